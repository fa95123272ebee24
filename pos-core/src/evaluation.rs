//! # Avaliação do Etiquetador
//!
//! Alimenta um decodificador com as sentenças de teste e agrega taxas de
//! acerto em dois recortes:
//!
//! - **Palavra conhecida vs. desconhecida**: conhecida = apareceu no corpus de
//!   treinamento (predicado dado pelo mapa de [`crate::corpus::words_to_tags`]).
//! - **Classe gramatical grossa** da tag-gabarito: verbos, substantivos,
//!   adjetivos e um balaio "outras". Os contadores por classe cobrem apenas as
//!   palavras conhecidas.
//!
//! Denominadores zero (nenhuma palavra conhecida no teste, nenhuma ocorrência
//! de uma classe) produzem acurácia indefinida (`None`), jamais divisão por
//! zero.
//!
//! A decodificação das sentenças de teste é independente entre si — as tabelas
//! do modelo são somente-leitura — e roda em paralelo via rayon. A agregação
//! dos contadores permanece sequencial.

use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::corpus::TaggedSentence;

/// Classe gramatical grossa para o relatório de acurácia.
///
/// Os conjuntos de pertinência são fechados e fixos sobre o tagset do corpus
/// embutido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoarseClass {
    /// V, VAUX, PCP
    Verb,
    /// N, NPROP
    Noun,
    /// ADJ
    Adjective,
    /// Qualquer outra tag
    Other,
}

impl CoarseClass {
    /// Classifica uma tag do tagset nas classes grossas.
    pub fn of(tag: &str) -> Self {
        match tag {
            "V" | "VAUX" | "PCP" => CoarseClass::Verb,
            "N" | "NPROP" => CoarseClass::Noun,
            "ADJ" => CoarseClass::Adjective,
            _ => CoarseClass::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoarseClass::Verb => "verbos",
            CoarseClass::Noun => "substantivos",
            CoarseClass::Adjective => "adjetivos",
            CoarseClass::Other => "outras",
        }
    }
}

/// Contadores agregados de uma rodada de avaliação.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalReport {
    /// Acertos em palavras conhecidas.
    pub known_correct: u32,
    /// Total de palavras conhecidas no teste.
    pub known_total: u32,
    /// Acertos em palavras desconhecidas.
    pub unknown_correct: u32,
    /// Total de palavras desconhecidas no teste.
    pub unknown_total: u32,
    /// Acertos por classe grossa (apenas palavras conhecidas).
    pub class_correct: [u32; 4],
    /// Totais por classe grossa (apenas palavras conhecidas).
    pub class_total: [u32; 4],
}

impl EvalReport {
    fn class_index(class: CoarseClass) -> usize {
        match class {
            CoarseClass::Verb => 0,
            CoarseClass::Noun => 1,
            CoarseClass::Adjective => 2,
            CoarseClass::Other => 3,
        }
    }

    /// Registra um token avaliado.
    pub fn record(&mut self, gold_tag: &str, predicted_tag: &str, known: bool) {
        let correct = gold_tag == predicted_tag;
        let class = Self::class_index(CoarseClass::of(gold_tag));

        if known {
            self.known_total += 1;
            self.class_total[class] += 1;
            if correct {
                self.known_correct += 1;
                self.class_correct[class] += 1;
            }
        } else {
            self.unknown_total += 1;
            if correct {
                self.unknown_correct += 1;
            }
        }
    }

    fn ratio(correct: u32, total: u32) -> Option<f64> {
        if total == 0 {
            None
        } else {
            Some(f64::from(correct) / f64::from(total))
        }
    }

    /// Acurácia sobre palavras conhecidas; `None` se não houver nenhuma.
    pub fn known_accuracy(&self) -> Option<f64> {
        Self::ratio(self.known_correct, self.known_total)
    }

    /// Acurácia sobre palavras desconhecidas; `None` se não houver nenhuma.
    pub fn unknown_accuracy(&self) -> Option<f64> {
        Self::ratio(self.unknown_correct, self.unknown_total)
    }

    /// Acurácia global (conhecidas + desconhecidas).
    pub fn total_accuracy(&self) -> Option<f64> {
        Self::ratio(
            self.known_correct + self.unknown_correct,
            self.known_total + self.unknown_total,
        )
    }

    /// Acurácia da classe grossa dada; `None` se a classe não ocorreu.
    pub fn class_accuracy(&self, class: CoarseClass) -> Option<f64> {
        let i = Self::class_index(class);
        Self::ratio(self.class_correct[i], self.class_total[i])
    }
}

fn fmt_ratio(f: &mut fmt::Formatter<'_>, label: &str, ratio: Option<f64>, correct: u32, total: u32) -> fmt::Result {
    match ratio {
        Some(value) => writeln!(f, "  {label}: {value:.4} ({correct}/{total})"),
        None => writeln!(f, "  {label}: indefinida (0 ocorrências)"),
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_ratio(f, "conhecidas", self.known_accuracy(), self.known_correct, self.known_total)?;
        fmt_ratio(f, "desconhecidas", self.unknown_accuracy(), self.unknown_correct, self.unknown_total)?;
        fmt_ratio(
            f,
            "total",
            self.total_accuracy(),
            self.known_correct + self.unknown_correct,
            self.known_total + self.unknown_total,
        )?;
        for class in [CoarseClass::Verb, CoarseClass::Noun, CoarseClass::Adjective, CoarseClass::Other] {
            let i = Self::class_index(class);
            fmt_ratio(f, class.name(), self.class_accuracy(class), self.class_correct[i], self.class_total[i])?;
        }
        Ok(())
    }
}

/// Avalia um decodificador sobre o conjunto de teste.
///
/// `test` (com gabarito) e `untagged` (só palavras) estão alinhados índice a
/// índice, palavra a palavra — contrato do provedor de corpus. `known_words`
/// é o mapa palavra → tags do **treinamento** (ver
/// [`crate::corpus::words_to_tags`]).
///
/// As sentenças são decodificadas em paralelo; o decodificador só lê as
/// tabelas do modelo.
pub fn evaluate<F>(
    decode: F,
    test: &[TaggedSentence],
    untagged: &[Vec<String>],
    known_words: &HashMap<String, HashMap<String, u32>>,
) -> EvalReport
where
    F: Fn(&[String]) -> Vec<String> + Sync,
{
    let decoded: Vec<Vec<String>> = untagged.par_iter().map(|sentence| decode(sentence)).collect();

    let mut report = EvalReport::default();
    for (sentence, predicted) in test.iter().zip(&decoded) {
        for ((word, gold_tag), predicted_tag) in sentence.annotations.iter().zip(predicted) {
            let known = known_words.contains_key(*word);
            report.record(gold_tag, predicted_tag, known);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus;

    #[test]
    fn test_coarse_classes() {
        assert_eq!(CoarseClass::of("V"), CoarseClass::Verb);
        assert_eq!(CoarseClass::of("VAUX"), CoarseClass::Verb);
        assert_eq!(CoarseClass::of("PCP"), CoarseClass::Verb);
        assert_eq!(CoarseClass::of("N"), CoarseClass::Noun);
        assert_eq!(CoarseClass::of("NPROP"), CoarseClass::Noun);
        assert_eq!(CoarseClass::of("ADJ"), CoarseClass::Adjective);
        assert_eq!(CoarseClass::of("ART"), CoarseClass::Other);
        assert_eq!(CoarseClass::of("PU"), CoarseClass::Other);
    }

    #[test]
    fn test_empty_report_has_undefined_ratios() {
        let report = EvalReport::default();
        assert_eq!(report.known_accuracy(), None);
        assert_eq!(report.unknown_accuracy(), None);
        assert_eq!(report.total_accuracy(), None);
        assert_eq!(report.class_accuracy(CoarseClass::Verb), None);
        // E o Display não divide por zero
        let text = report.to_string();
        assert!(text.contains("indefinida"));
    }

    #[test]
    fn test_record_splits_known_and_unknown() {
        let mut report = EvalReport::default();
        report.record("N", "N", true);
        report.record("N", "V", true);
        report.record("V", "V", false);

        assert_eq!(report.known_correct, 1);
        assert_eq!(report.known_total, 2);
        assert_eq!(report.unknown_correct, 1);
        assert_eq!(report.unknown_total, 1);
        assert_eq!(report.known_accuracy(), Some(0.5));
        assert_eq!(report.total_accuracy(), Some(2.0 / 3.0));
        // Classes só contam palavras conhecidas
        assert_eq!(report.class_total[EvalReport::class_index(CoarseClass::Verb)], 0);
        assert_eq!(report.class_accuracy(CoarseClass::Noun), Some(0.5));
    }

    #[test]
    fn test_evaluate_with_oracle_decoder() {
        // Decodificador-oráculo: devolve o gabarito; toda acurácia definida é 1
        let test = vec![TaggedSentence {
            text: "o cão late.",
            domain: "teste",
            annotations: &[("o", "ART"), ("cão", "N"), ("late", "V"), (".", "PU")],
        }];
        let untagged = corpus::untagged(&test);
        let known = corpus::words_to_tags(&test);

        let gold: Vec<Vec<String>> = test
            .iter()
            .map(|s| s.annotations.iter().map(|(_, t)| t.to_string()).collect())
            .collect();
        let report = evaluate(
            |sentence: &[String]| {
                let idx = untagged.iter().position(|u| u == sentence).unwrap();
                gold[idx].clone()
            },
            &test,
            &untagged,
            &known,
        );

        assert_eq!(report.known_accuracy(), Some(1.0));
        assert_eq!(report.unknown_total, 0);
        assert_eq!(report.class_accuracy(CoarseClass::Noun), Some(1.0));
        assert_eq!(report.class_accuracy(CoarseClass::Adjective), None);
    }

    #[test]
    fn test_evaluate_marks_unknown_words() {
        let training = vec![TaggedSentence {
            text: "o cão",
            domain: "teste",
            annotations: &[("o", "ART"), ("cão", "N")],
        }];
        let test = vec![TaggedSentence {
            text: "o lobo",
            domain: "teste",
            annotations: &[("o", "ART"), ("lobo", "N")],
        }];
        let untagged = corpus::untagged(&test);
        let known = corpus::words_to_tags(&training);

        let report = evaluate(
            |sentence: &[String]| vec!["ART".to_string(); sentence.len()],
            &test,
            &untagged,
            &known,
        );

        // "o" é conhecida e acertou; "lobo" é desconhecida e errou
        assert_eq!(report.known_correct, 1);
        assert_eq!(report.known_total, 1);
        assert_eq!(report.unknown_correct, 0);
        assert_eq!(report.unknown_total, 1);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut report = EvalReport::default();
        report.record("N", "N", true);
        let json = serde_json::to_string(&report).unwrap();
        let back: EvalReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.known_correct, 1);
    }
}
