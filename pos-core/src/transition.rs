//! # Modelos de Transição (Bigrama e Trigrama)
//!
//! Convertem as tabelas de contagem em funções de probabilidade de transição:
//!
//! - Bigrama: $P(t_i \mid t_{i-1})$
//! - Trigrama: $P(t_i \mid t_{i-2}, t_{i-1})$
//!
//! As razões contagem/total são materializadas **uma única vez**, na
//! construção, em mapas esparsos chaveados por tupla. Qualquer contexto não
//! observado no treinamento vale 0 — a consulta é um único lookup com default,
//! sem cadeia de verificações condicionais no laço quente do Viterbi.
//!
//! Como o mapa é derivado diretamente das contagens, os contextos de fronteira
//! (`START_1`/`START_2` como antecedentes, `STOP` como alvo) respondem às
//! mesmas consultas que qualquer tag real: é isso que mantém a convenção de
//! início do treinamento consistente com a da decodificação.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::counts::CorpusCounts;

/// Função de transição bigrama: $P(\text{atual} \mid \text{anterior})$.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigramTransitions {
    /// Chave: `(tag_anterior, tag_atual)`. Apenas pares observados.
    probs: HashMap<(String, String), f64>,
}

impl BigramTransitions {
    /// Materializa as razões count(anterior, atual) / total(anterior).
    pub fn from_counts(counts: &CorpusCounts) -> Self {
        let mut probs = HashMap::with_capacity(counts.bigram.len());
        for ((first, second), count) in &counts.bigram {
            // O total existe para todo par observado (invariante do agregador)
            let total = counts.bigram_totals.get(first).copied().unwrap_or(0);
            if total > 0 {
                probs.insert(
                    (first.clone(), second.clone()),
                    f64::from(*count) / f64::from(total),
                );
            }
        }
        Self { probs }
    }

    /// Probabilidade de `curr` dado o antecedente `prev`; 0 se o contexto ou a
    /// continuação nunca foram observados.
    pub fn prob(&self, curr: &str, prev: &str) -> f64 {
        self.probs
            .get(&(prev.to_string(), curr.to_string()))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Função de transição trigrama: $P(\text{atual} \mid \text{anterior}_2, \text{anterior}_1)$.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrigramTransitions {
    /// Chave: `(primeira, segunda, terceira)` na ordem em que ocorrem no
    /// corpus. Apenas triplas observadas.
    probs: HashMap<(String, String, String), f64>,
}

impl TrigramTransitions {
    /// Materializa as razões count(primeira, segunda, terceira) / total(primeira, segunda).
    pub fn from_counts(counts: &CorpusCounts) -> Self {
        let mut probs = HashMap::with_capacity(counts.trigram.len());
        for ((first, second, third), count) in &counts.trigram {
            let total = counts
                .trigram_totals
                .get(&(first.clone(), second.clone()))
                .copied()
                .unwrap_or(0);
            if total > 0 {
                probs.insert(
                    (first.clone(), second.clone(), third.clone()),
                    f64::from(*count) / f64::from(total),
                );
            }
        }
        Self { probs }
    }

    /// Probabilidade de `curr` dado o contexto (`prev_2`, `prev_1`), onde
    /// `prev_1` é a tag imediatamente anterior e `prev_2` a anterior a ela.
    /// Retorna 0 para qualquer tripla não observada. Aceita `STOP` como alvo
    /// (passo de terminação) e os marcadores de início como contexto.
    pub fn prob(&self, curr: &str, prev_1: &str, prev_2: &str) -> f64 {
        self.probs
            .get(&(prev_2.to_string(), prev_1.to_string(), curr.to_string()))
            .copied()
            .unwrap_or(0.0)
    }
}
