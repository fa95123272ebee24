//! # Modelo de Emissão com Suavização Add-One
//!
//! Probabilidade de uma tag gerar uma palavra: $P(w \mid t)$.
//!
//! A suavização de Laplace garante probabilidade estritamente positiva para
//! qualquer palavra — vista ou não no treinamento — desde que a própria tag
//! tenha sido observada:
//!
//! $$ P(w \mid t) = \frac{count(t, w) + 1}{total(t) + V} $$
//!
//! **Escolha de projeto documentada**: o denominador $V$ é o número total de
//! tokens do domínio de treinamento (uma constante global do corpus), e não o
//! tamanho do vocabulário da tag. É uma simplificação deliberada: o mesmo
//! denominador para todas as tags, conhecido antes de qualquer contagem por
//! tag.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::counts::CorpusCounts;

/// Função de emissão suavizada.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionModel {
    /// Contagem de (tag, palavra).
    counts: HashMap<(String, String), u32>,
    /// Total de palavras emitidas por tag. Uma tag presente aqui com total 0
    /// (a âncora) ainda emite qualquer palavra com probabilidade 1/V.
    totals: HashMap<String, u32>,
    /// Constante global de normalização: total de tokens do domínio.
    corpus_size: u32,
}

impl EmissionModel {
    pub fn from_counts(counts: &CorpusCounts, corpus_size: u32) -> Self {
        Self {
            counts: counts.emission.clone(),
            totals: counts.emission_totals.clone(),
            corpus_size,
        }
    }

    /// Probabilidade add-one de `tag` emitir `word`.
    ///
    /// Retorna 0 se a tag nunca foi observada (ela não pode ser atribuída);
    /// caso contrário o valor é estritamente positivo, mesmo para palavras
    /// desconhecidas.
    pub fn prob(&self, tag: &str, word: &str) -> f64 {
        match self.totals.get(tag) {
            None => 0.0,
            Some(total) => {
                let count = self
                    .counts
                    .get(&(tag.to_string(), word.to_string()))
                    .copied()
                    .unwrap_or(0);
                f64::from(count + 1) / f64::from(total + self.corpus_size)
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::corpus::TaggedSentence;

    fn model() -> EmissionModel {
        let config = ModelConfig::default();
        let corpus = vec![TaggedSentence {
            text: "o cão late.",
            domain: "teste",
            annotations: &[("o", "ART"), ("cão", "N"), ("late", "V"), (".", "PU")],
        }];
        let counts = CorpusCounts::from_corpus(&corpus, &config);
        // corpus_size = 4 tokens
        EmissionModel::from_counts(&counts, 4)
    }

    #[test]
    fn test_seen_word_beats_unseen_word() {
        let model = model();
        let seen = model.prob("N", "cão");
        let unseen = model.prob("N", "gato");
        assert!(seen > unseen);
        assert!(unseen > 0.0);
        // (1 + 1) / (1 + 4) e (0 + 1) / (1 + 4)
        assert!((seen - 2.0 / 5.0).abs() < 1e-12);
        assert!((unseen - 1.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_tag_has_zero_probability() {
        let model = model();
        assert_eq!(model.prob("ADJ", "cão"), 0.0);
    }

    #[test]
    fn test_anchor_tag_emits_any_word() {
        // A âncora "N" está sempre registrada, ainda que com total zero
        let config = ModelConfig::default();
        let corpus = vec![TaggedSentence {
            text: "sim",
            domain: "teste",
            annotations: &[("sim", "ADV")],
        }];
        let counts = CorpusCounts::from_corpus(&corpus, &config);
        let model = EmissionModel::from_counts(&counts, 1);
        assert!(model.prob("N", "qualquer") > 0.0);
        assert!((model.prob("N", "qualquer") - 1.0).abs() < 1e-12); // 1 / (0 + 1)
    }

    #[test]
    fn test_probabilities_are_bounded() {
        let config = ModelConfig::default();
        let corpus = crate::corpus::get_corpus();
        let counts = CorpusCounts::from_corpus(&corpus, &config);
        let model = EmissionModel::from_counts(&counts, crate::corpus::token_count(&corpus));

        for sentence in &corpus {
            for (word, tag) in sentence.annotations {
                let p = model.prob(tag, word);
                assert!(p > 0.0 && p <= 1.0);
            }
        }
    }
}
