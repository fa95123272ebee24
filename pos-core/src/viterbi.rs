//! # Algoritmo de Viterbi — Decodificação Bigrama e Trigrama
//!
//! O algoritmo de Viterbi é um método de **programação dinâmica** que encontra
//! a sequência de tags mais provável sob um modelo de Markov.
//!
//! ## Intuição
//!
//! Uma busca exaustiva sobre as sequências possíveis custaria `O(T^N)` para N
//! palavras e T tags. O Viterbi explora que a **melhor sequência até a posição
//! k terminando em um estado** depende apenas do **melhor caminho até a
//! posição k-1** → `O(N × T²)` no bigrama e `O(N × T³)` no trigrama.
//!
//! ## Variantes
//!
//! - **Bigrama**: estado = tag atual. A leitura da saída é gulosa por
//!   posição: a cada posição sai a tag de maior score acumulado naquela linha
//!   do reticulado (não há retropropagação de backpointers).
//! - **Trigrama**: estado = par (tag anterior, tag atual), com tabela de
//!   backpointers e reconstrução do caminho de trás para frente. A transição
//!   de fim de sentença (`STOP`) é incorporada no passo de terminação — `STOP`
//!   nunca é uma posição emissora.
//!
//! ## Estabilidade numérica
//!
//! Os scores são acumulados em **log-space**: multiplicar probabilidades
//! minúsculas ao longo de uma sentença longa sofreria underflow; somar
//! logaritmos não. Probabilidade 1 vira 0.0, probabilidade 0 vira `-∞`, e o
//! argmax é o mesmo (o logaritmo é monotônico).
//!
//! ## Fronteiras e degeneração
//!
//! A posição 1 consome as transições a partir do contexto virtual de início
//! (`START_1`/`START_2`) — a mesma convenção com que as contagens foram
//! agregadas. Quando nenhum caminho de probabilidade positiva sobrevive, a
//! saída é a tag de fallback da configuração (política explícita, em vez de
//! um argmax dependente da ordem de iteração de contêineres).

use crate::config::ModelConfig;
use crate::emission::EmissionModel;
use crate::transition::{BigramTransitions, TrigramTransitions};

/// Retorna (índice, valor) do primeiro máximo de um slice.
///
/// Empates resolvem para o **primeiro** índice maximal — com o vocabulário de
/// tags ordenado, a decodificação é determinística.
fn best_in_row(row: &[f64]) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (i, &score) in row.iter().enumerate() {
        if score > best_score {
            best_score = score;
            best_idx = i;
        }
    }
    (best_idx, best_score)
}

/// Viterbi bigrama com leitura gulosa por posição.
///
/// Reticulado (n+1) × |T|; a linha 0 vale score 1 (estado inicial implícito).
/// Para cada posição k, `score(k, v) = max_u score(k-1, u) · P(v|u) · P(w_k|v)`,
/// com a posição 1 transitando a partir de `START_1`. A tag de saída em cada
/// posição é o argmax da linha inteira, não a reconstrução de um caminho
/// ótimo global.
pub fn viterbi_bigram(
    sentence: &[String],
    tags: &[String],
    transitions: &BigramTransitions,
    emissions: &EmissionModel,
    config: &ModelConfig,
) -> Vec<String> {
    if sentence.is_empty() {
        return Vec::new();
    }
    if tags.is_empty() {
        return vec![config.fallback_tag.clone(); sentence.len()];
    }

    let n_tags = tags.len();
    // Linha anterior do reticulado; log(1) = 0.0 na posição 0
    let mut prev_row = vec![0.0f64; n_tags];
    let mut output = Vec::with_capacity(sentence.len());

    for (k, word) in sentence.iter().enumerate() {
        let mut row = vec![f64::NEG_INFINITY; n_tags];

        for (v, tag_v) in tags.iter().enumerate() {
            let emit = emissions.prob(tag_v, word).ln();

            if k == 0 {
                row[v] = transitions.prob(tag_v, &config.start_1).ln() + emit;
            } else {
                let mut best = f64::NEG_INFINITY;
                for (u, tag_u) in tags.iter().enumerate() {
                    let score = prev_row[u] + transitions.prob(tag_v, tag_u).ln() + emit;
                    if score > best {
                        best = score;
                    }
                }
                row[v] = best;
            }
        }

        let (best_idx, best_score) = best_in_row(&row);
        if best_score == f64::NEG_INFINITY {
            // Nenhum caminho sobreviveu até aqui: política explícita de fallback
            output.push(config.fallback_tag.clone());
        } else {
            output.push(tags[best_idx].clone());
        }

        prev_row = row;
    }

    output
}

/// Viterbi trigrama com backpointers e terminação via `STOP`.
///
/// Estado na posição k: par (tag atual v, tag anterior u). Recorrência:
///
/// ```text
/// score(k, v, u) = max_s score(k-1, u, s) · P(v | s, u) · P(w_k | v)
/// ```
///
/// com os contextos de fronteira exatos: na posição 1 o antecedente é o par
/// (START_2, START_1); na posição 2, (START_1, u). A terminação escolhe o par
/// final maximizando `score(n, v, u) · P(STOP | u, v)` e o caminho é
/// reconstruído pelos backpointers, de trás para frente.
pub fn viterbi_trigram(
    sentence: &[String],
    tags: &[String],
    transitions: &TrigramTransitions,
    emissions: &EmissionModel,
    config: &ModelConfig,
) -> Vec<String> {
    let n = sentence.len();
    if n == 0 {
        return Vec::new();
    }
    if tags.is_empty() {
        return vec![config.fallback_tag.clone(); n];
    }

    let n_tags = tags.len();

    // Posição 1: o contexto real é o par de início; o score independe do
    // "slot" de tag anterior
    let first_scores: Vec<f64> = tags
        .iter()
        .map(|tag_v| {
            transitions.prob(tag_v, &config.start_1, &config.start_2).ln()
                + emissions.prob(tag_v, &sentence[0]).ln()
        })
        .collect();

    if n == 1 {
        // Terminação direta, sem nenhum passo de recorrência intermediário
        let finals: Vec<f64> = tags
            .iter()
            .enumerate()
            .map(|(v, tag_v)| {
                first_scores[v] + transitions.prob(&config.stop, tag_v, &config.start_1).ln()
            })
            .collect();
        let (best_idx, best_score) = best_in_row(&finals);
        if best_score == f64::NEG_INFINITY {
            return vec![config.fallback_tag.clone()];
        }
        return vec![tags[best_idx].clone()];
    }

    // lattice[v][u]: melhor score terminando com tag v na posição k e tag u
    // na posição k-1
    let mut lattice = vec![vec![f64::NEG_INFINITY; n_tags]; n_tags];

    // Posição 2: o antecedente do antecedente ainda é START_1
    for (v, tag_v) in tags.iter().enumerate() {
        let emit = emissions.prob(tag_v, &sentence[1]).ln();
        for (u, tag_u) in tags.iter().enumerate() {
            lattice[v][u] =
                first_scores[u] + transitions.prob(tag_v, tag_u, &config.start_1).ln() + emit;
        }
    }

    // Posições 3..=n: recorrência cheia com backpointers.
    // backptr[k-3][v][u] = argmax s do melhor caminho até (k, v, u)
    let mut backptr: Vec<Vec<Vec<usize>>> = Vec::with_capacity(n.saturating_sub(2));
    for k in 3..=n {
        let word = &sentence[k - 1];
        let mut next = vec![vec![f64::NEG_INFINITY; n_tags]; n_tags];
        let mut pointers = vec![vec![0usize; n_tags]; n_tags];

        for (v, tag_v) in tags.iter().enumerate() {
            let emit = emissions.prob(tag_v, word).ln();
            for (u, tag_u) in tags.iter().enumerate() {
                let mut best = f64::NEG_INFINITY;
                let mut best_s = 0;
                for (s, tag_s) in tags.iter().enumerate() {
                    let score = lattice[u][s] + transitions.prob(tag_v, tag_u, tag_s).ln() + emit;
                    if score > best {
                        best = score;
                        best_s = s;
                    }
                }
                next[v][u] = best;
                pointers[v][u] = best_s;
            }
        }

        lattice = next;
        backptr.push(pointers);
    }

    // Terminação: incorpora a transição para STOP no score final
    let mut best_score = f64::NEG_INFINITY;
    let mut best_v = 0;
    let mut best_u = 0;
    for (v, tag_v) in tags.iter().enumerate() {
        for (u, tag_u) in tags.iter().enumerate() {
            let score = lattice[v][u] + transitions.prob(&config.stop, tag_v, tag_u).ln();
            if score > best_score {
                best_score = score;
                best_v = v;
                best_u = u;
            }
        }
    }

    if best_score == f64::NEG_INFINITY {
        // Nenhuma sequência com probabilidade positiva: fallback documentado
        return vec![config.fallback_tag.clone(); n];
    }

    // Reconstrução: as duas últimas tags vêm da terminação; as anteriores,
    // dos backpointers — caminhada reversa explícita sobre
    // (posição, tag, tag anterior) → melhor antecessora
    let mut path = vec![0usize; n + 1]; // indexado por posição 1..=n
    path[n] = best_v;
    path[n - 1] = best_u;
    for k in (1..=n - 2).rev() {
        path[k] = backptr[k - 1][path[k + 2]][path[k + 1]];
    }

    (1..=n).map(|k| tags[path[k]].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::TaggedSentence;
    use crate::counts::CorpusCounts;

    struct Trained {
        tags: Vec<String>,
        bigram: BigramTransitions,
        trigram: TrigramTransitions,
        emissions: EmissionModel,
        config: ModelConfig,
    }

    fn train(corpus: &[TaggedSentence]) -> Trained {
        let config = ModelConfig::default();
        let counts = CorpusCounts::from_corpus(corpus, &config);
        let corpus_size = crate::corpus::token_count(corpus);
        Trained {
            tags: crate::corpus::common_tags(corpus, 0),
            bigram: BigramTransitions::from_counts(&counts),
            trigram: TrigramTransitions::from_counts(&counts),
            emissions: EmissionModel::from_counts(&counts, corpus_size),
            config,
        }
    }

    fn article_noun_corpus() -> Vec<TaggedSentence> {
        vec![
            TaggedSentence { text: "o cão", domain: "teste", annotations: &[("o", "ART"), ("cão", "N")] },
            TaggedSentence { text: "o gato", domain: "teste", annotations: &[("o", "ART"), ("gato", "N")] },
        ]
    }

    fn words(sentence: &[&str]) -> Vec<String> {
        sentence.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_bigram_decodes_seen_sentence() {
        let t = train(&article_noun_corpus());
        let result = viterbi_bigram(&words(&["o", "cão"]), &t.tags, &t.bigram, &t.emissions, &t.config);
        assert_eq!(result, vec!["ART", "N"]);
    }

    #[test]
    fn test_trigram_decodes_seen_sentence() {
        let t = train(&article_noun_corpus());
        let result = viterbi_trigram(&words(&["o", "cão"]), &t.tags, &t.trigram, &t.emissions, &t.config);
        assert_eq!(result, vec!["ART", "N"]);
    }

    #[test]
    fn test_decoders_generalize_to_unknown_words() {
        // As transições dominam: mesmo com as duas palavras desconhecidas, a
        // estrutura ART → N é a única com probabilidade positiva
        let t = train(&article_noun_corpus());
        let sentence = words(&["um", "pássaro"]);

        let bigram = viterbi_bigram(&sentence, &t.tags, &t.bigram, &t.emissions, &t.config);
        assert_eq!(bigram, vec!["ART", "N"]);

        let trigram = viterbi_trigram(&sentence, &t.tags, &t.trigram, &t.emissions, &t.config);
        assert_eq!(trigram, vec!["ART", "N"]);
    }

    #[test]
    fn test_trigram_single_word_sentence() {
        // A terminação é alcançável sem nenhum passo de recorrência
        let corpus = vec![
            TaggedSentence { text: "Sim.", domain: "teste", annotations: &[("Sim", "ADV")] },
            TaggedSentence { text: "Não.", domain: "teste", annotations: &[("Não", "ADV")] },
        ];
        let t = train(&corpus);
        let result = viterbi_trigram(&words(&["Talvez"]), &t.tags, &t.trigram, &t.emissions, &t.config);
        assert_eq!(result, vec!["ADV"]);
    }

    #[test]
    fn test_decoding_is_deterministic() {
        let corpus = crate::corpus::get_corpus();
        let t = train(&corpus);
        let sentence = words(&["A", "equipe", "venceu", "o", "torneio", "."]);

        let first = viterbi_trigram(&sentence, &t.tags, &t.trigram, &t.emissions, &t.config);
        let second = viterbi_trigram(&sentence, &t.tags, &t.trigram, &t.emissions, &t.config);
        assert_eq!(first, second);

        let first = viterbi_bigram(&sentence, &t.tags, &t.bigram, &t.emissions, &t.config);
        let second = viterbi_bigram(&sentence, &t.tags, &t.bigram, &t.emissions, &t.config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_trigram_degenerate_lattice_falls_back() {
        // Treinado apenas com sentenças de duas palavras, nenhum caminho de
        // três palavras tem probabilidade positiva: sai a tag de fallback
        let t = train(&article_noun_corpus());
        let result = viterbi_trigram(&words(&["x", "y", "z"]), &t.tags, &t.trigram, &t.emissions, &t.config);
        assert_eq!(result, vec!["N", "N", "N"]);
    }

    #[test]
    fn test_bigram_degenerate_position_falls_back() {
        // No bigrama a degeneração é por posição: as duas primeiras ainda
        // seguem ART → N; a terceira linha zera (N só transita para STOP)
        let t = train(&article_noun_corpus());
        let result = viterbi_bigram(&words(&["x", "y", "z"]), &t.tags, &t.bigram, &t.emissions, &t.config);
        assert_eq!(result, vec!["ART", "N", "N"]);
    }

    #[test]
    fn test_empty_sentence() {
        let t = train(&article_noun_corpus());
        assert!(viterbi_bigram(&[], &t.tags, &t.bigram, &t.emissions, &t.config).is_empty());
        assert!(viterbi_trigram(&[], &t.tags, &t.trigram, &t.emissions, &t.config).is_empty());
    }

    #[test]
    fn test_longer_sentence_recovers_training_structure() {
        // Quatro posições exercitam a recorrência cheia (k ≥ 3) e a
        // caminhada reversa pelos backpointers
        let corpus = vec![
            TaggedSentence {
                text: "o cão viu a casa",
                domain: "teste",
                annotations: &[("o", "ART"), ("cão", "N"), ("viu", "V"), ("a", "ART"), ("casa", "N")],
            },
            TaggedSentence {
                text: "a menina viu o mar",
                domain: "teste",
                annotations: &[("a", "ART"), ("menina", "N"), ("viu", "V"), ("o", "ART"), ("mar", "N")],
            },
        ];
        let t = train(&corpus);
        let result = viterbi_trigram(
            &words(&["o", "menino", "viu", "a", "praia"]),
            &t.tags,
            &t.trigram,
            &t.emissions,
            &t.config,
        );
        assert_eq!(result, vec!["ART", "N", "V", "ART", "N"]);
    }
}
