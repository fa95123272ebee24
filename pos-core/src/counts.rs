//! # Agregador de Contagens do Corpus
//!
//! Varre o corpus anotado **uma única vez** e produz as três tabelas de
//! contagem brutas de que o modelo precisa:
//!
//! 1. **Bigramas de tags**: quantas vezes a tag B seguiu a tag A.
//! 2. **Trigramas de tags**: quantas vezes a tag C seguiu o par (A, B).
//! 3. **Emissões**: quantas vezes a tag T gerou a palavra W.
//!
//! ## Fronteiras de sentença
//!
//! Cada sentença com tags `t₁ … tₙ` é estendida virtualmente com o contexto de
//! início `(START_2, START_1)` e o marcador final `STOP`:
//!
//! ```text
//! bigramas:  (START_1, t₁) (t₁, t₂) … (tₙ₋₁, tₙ) (tₙ, STOP)
//! trigramas: (START_2, START_1, t₁) (START_1, t₁, t₂) … (tₙ₋₁, tₙ, STOP)
//! ```
//!
//! Assim o contexto do trigrama da primeira tag real é sempre o par de início,
//! e a última tag real transita para `STOP` em ambas as tabelas. Pseudo-tags
//! nunca entram na tabela de emissões.
//!
//! As tabelas são mapas esparsos chaveados por tuplas planas — um único
//! lookup por consulta, sem aninhamento de mapas.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::corpus::TaggedSentence;

/// Tabelas de contagem extraídas do corpus de treinamento.
///
/// A agregação é puramente aditiva e comutativa sobre a ordem das sentenças:
/// treinar com o corpus embaralhado produz tabelas idênticas.
///
/// Invariantes (verificáveis via [`CorpusCounts::check_invariants`]):
/// - para cada tag A, `bigram_totals[A]` = Σ `bigram[(A, ·)]`;
/// - para cada par (A, B), `trigram_totals[(A, B)]` = Σ `trigram[(A, B, ·)]`;
/// - para cada tag T, `emission_totals[T]` = Σ `emission[(T, ·)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusCounts {
    /// Contagem do par (tag, tag seguinte).
    pub bigram: HashMap<(String, String), u32>,
    /// Total de observações com a tag dada como primeiro elemento de um par.
    pub bigram_totals: HashMap<String, u32>,
    /// Contagem da tripla (tag, tag seguinte, tag seguinte da seguinte).
    pub trigram: HashMap<(String, String, String), u32>,
    /// Total de observações com o par dado como prefixo de uma tripla.
    pub trigram_totals: HashMap<(String, String), u32>,
    /// Contagem do par (tag, palavra emitida).
    pub emission: HashMap<(String, String), u32>,
    /// Total de palavras emitidas por cada tag.
    pub emission_totals: HashMap<String, u32>,
}

impl CorpusCounts {
    /// Agrega as três tabelas em uma única passada pelo corpus.
    ///
    /// A tag-âncora de suavização (`config.fallback_tag`) é pré-registrada com
    /// total zero: ela nunca fica ausente da tabela de emissões, mesmo que o
    /// corpus não a contenha.
    pub fn from_corpus(corpus: &[TaggedSentence], config: &ModelConfig) -> Self {
        let mut counts = Self::default();

        // Âncora estável de emissão
        counts
            .emission_totals
            .entry(config.fallback_tag.clone())
            .or_insert(0);

        for sentence in corpus {
            let tags: Vec<&str> = sentence.annotations.iter().map(|(_, tag)| *tag).collect();
            let n = tags.len();
            if n == 0 {
                continue;
            }

            // Bigramas: (START_1, t1) … (tn, STOP)
            counts.add_bigram(&config.start_1, tags[0]);
            for i in 0..n - 1 {
                counts.add_bigram(tags[i], tags[i + 1]);
            }
            counts.add_bigram(tags[n - 1], &config.stop);

            // Trigramas: (START_2, START_1, t1) … (tn-1, tn, STOP).
            // Uma sentença de uma só palavra produz (START_2, START_1, t1) e
            // (START_1, t1, STOP).
            counts.add_trigram(&config.start_2, &config.start_1, tags[0]);
            if n == 1 {
                counts.add_trigram(&config.start_1, tags[0], &config.stop);
            } else {
                counts.add_trigram(&config.start_1, tags[0], tags[1]);
                for i in 0..n - 2 {
                    counts.add_trigram(tags[i], tags[i + 1], tags[i + 2]);
                }
                counts.add_trigram(tags[n - 2], tags[n - 1], &config.stop);
            }

            // Emissões: apenas tokens reais; pseudo-tags não emitem palavras
            for (word, tag) in sentence.annotations {
                *counts
                    .emission
                    .entry((tag.to_string(), word.to_string()))
                    .or_insert(0) += 1;
                *counts.emission_totals.entry(tag.to_string()).or_insert(0) += 1;
            }
        }

        counts
    }

    fn add_bigram(&mut self, first: &str, second: &str) {
        *self
            .bigram
            .entry((first.to_string(), second.to_string()))
            .or_insert(0) += 1;
        *self.bigram_totals.entry(first.to_string()).or_insert(0) += 1;
    }

    fn add_trigram(&mut self, first: &str, second: &str, third: &str) {
        *self
            .trigram
            .entry((first.to_string(), second.to_string(), third.to_string()))
            .or_insert(0) += 1;
        *self
            .trigram_totals
            .entry((first.to_string(), second.to_string()))
            .or_insert(0) += 1;
    }

    /// Verifica os invariantes de consistência entre contagens e totais.
    ///
    /// Retorna `true` se cada total registrado for exatamente a soma das
    /// contagens individuais sob a chave correspondente.
    pub fn check_invariants(&self) -> bool {
        let mut bigram_sums: HashMap<&str, u32> = HashMap::new();
        for ((first, _), count) in &self.bigram {
            *bigram_sums.entry(first).or_insert(0) += count;
        }
        for (first, total) in &self.bigram_totals {
            if bigram_sums.get(first.as_str()).copied().unwrap_or(0) != *total {
                return false;
            }
        }

        let mut trigram_sums: HashMap<(&str, &str), u32> = HashMap::new();
        for ((first, second, _), count) in &self.trigram {
            *trigram_sums.entry((first, second)).or_insert(0) += count;
        }
        for ((first, second), total) in &self.trigram_totals {
            if trigram_sums
                .get(&(first.as_str(), second.as_str()))
                .copied()
                .unwrap_or(0)
                != *total
            {
                return false;
            }
        }

        let mut emission_sums: HashMap<&str, u32> = HashMap::new();
        for ((tag, _), count) in &self.emission {
            *emission_sums.entry(tag).or_insert(0) += count;
        }
        self.emission_totals.iter().all(|(tag, total)| {
            emission_sums.get(tag.as_str()).copied().unwrap_or(0) == *total
        })
    }
}
