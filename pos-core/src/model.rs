//! # Modelo HMM Treinado
//!
//! O modelo encapsula tudo o que a decodificação precisa:
//! - **Vocabulário fechado de tags** (as tags "comuns" do treinamento, ordenadas)
//! - **Transições** bigrama e trigrama (razões de contagem)
//! - **Emissões** com suavização add-one
//!
//! ## Ciclo de vida
//!
//! As tabelas são construídas uma única vez por corpus de treinamento
//! ([`HmmTagger::train`]) e ficam imutáveis dali em diante: todas as chamadas
//! de decodificação compartilham as mesmas tabelas em modo somente-leitura. O
//! reticulado do Viterbi é criado e descartado a cada sentença.

use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::corpus::{self, CorpusError, TaggedSentence};
use crate::counts::CorpusCounts;
use crate::emission::EmissionModel;
use crate::transition::{BigramTransitions, TrigramTransitions};
use crate::viterbi::{viterbi_bigram, viterbi_trigram};

/// Etiquetador morfossintático por HMM (bigrama e trigrama).
///
/// # Exemplo
///
/// ```rust
/// use pos_core::{corpus, HmmTagger, ModelConfig};
///
/// let full = corpus::get_corpus();
/// let (training, _test) = corpus::split(&full, 0.9);
/// let domain_size = corpus::token_count(&full);
///
/// let tagger = HmmTagger::train(training, domain_size, ModelConfig::default()).unwrap();
/// let sentence: Vec<String> = ["A", "equipe", "venceu", "."]
///     .iter().map(|w| w.to_string()).collect();
/// let tags = tagger.tag_trigram(&sentence);
/// assert_eq!(tags.len(), sentence.len());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmmTagger {
    config: ModelConfig,
    /// Vocabulário fechado, ordenado (garante decodificação determinística).
    tags: Vec<String>,
    bigram: BigramTransitions,
    trigram: TrigramTransitions,
    emissions: EmissionModel,
}

impl HmmTagger {
    /// Treina o modelo sobre o corpus anotado.
    ///
    /// `domain_token_count` é o total de tokens do domínio de treinamento — a
    /// constante de normalização da suavização de emissão (por convenção,
    /// calculada sobre o domínio completo, antes da partição treino/teste).
    ///
    /// Falha cedo com [`CorpusError`] para corpus malformado ou quando nenhuma
    /// tag supera o limiar de frequência da configuração.
    pub fn train(
        corpus: &[TaggedSentence],
        domain_token_count: u32,
        config: ModelConfig,
    ) -> Result<Self, CorpusError> {
        corpus::validate(corpus)?;

        let tags = corpus::common_tags(corpus, config.common_tag_threshold);
        if tags.is_empty() {
            return Err(CorpusError::NoCommonTags(config.common_tag_threshold));
        }

        let counts = CorpusCounts::from_corpus(corpus, &config);
        let bigram = BigramTransitions::from_counts(&counts);
        let trigram = TrigramTransitions::from_counts(&counts);
        let emissions = EmissionModel::from_counts(&counts, domain_token_count);

        Ok(Self {
            config,
            tags,
            bigram,
            trigram,
            emissions,
        })
    }

    /// Decodifica a sentença com o Viterbi bigrama. Uma tag por palavra.
    pub fn tag_bigram(&self, sentence: &[String]) -> Vec<String> {
        viterbi_bigram(sentence, &self.tags, &self.bigram, &self.emissions, &self.config)
    }

    /// Decodifica a sentença com o Viterbi trigrama. Uma tag por palavra.
    pub fn tag_trigram(&self, sentence: &[String]) -> Vec<String> {
        viterbi_trigram(sentence, &self.tags, &self.trigram, &self.emissions, &self.config)
    }

    /// Vocabulário fechado de decodificação.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_config() -> ModelConfig {
        // Limiar zero: corpora de teste são minúsculos
        ModelConfig {
            common_tag_threshold: 0,
            ..ModelConfig::default()
        }
    }

    #[test]
    fn test_train_rejects_empty_corpus() {
        let result = HmmTagger::train(&[], 0, training_config());
        assert_eq!(result.unwrap_err(), CorpusError::EmptyCorpus);
    }

    #[test]
    fn test_train_requires_common_tags() {
        let corpus = vec![TaggedSentence {
            text: "o cão",
            domain: "teste",
            annotations: &[("o", "ART"), ("cão", "N")],
        }];
        // Com o limiar padrão (20), nenhuma tag deste corpus é comum
        let result = HmmTagger::train(&corpus, 2, ModelConfig::default());
        assert_eq!(result.unwrap_err(), CorpusError::NoCommonTags(20));
    }

    #[test]
    fn test_end_to_end_article_noun() {
        let corpus = vec![
            TaggedSentence { text: "o cão", domain: "teste", annotations: &[("o", "ART"), ("cão", "N")] },
            TaggedSentence { text: "o gato", domain: "teste", annotations: &[("o", "ART"), ("gato", "N")] },
        ];
        let tagger = HmmTagger::train(&corpus, 4, training_config()).unwrap();

        let sentence: Vec<String> = ["o", "cão"].iter().map(|w| w.to_string()).collect();
        assert_eq!(tagger.tag_bigram(&sentence), vec!["ART", "N"]);
        assert_eq!(tagger.tag_trigram(&sentence), vec!["ART", "N"]);
    }

    #[test]
    fn test_tags_are_sorted() {
        let corpus = crate::corpus::get_corpus();
        let size = crate::corpus::token_count(&corpus);
        let tagger = HmmTagger::train(&corpus, size, ModelConfig::default()).unwrap();

        let mut sorted = tagger.tags().to_vec();
        sorted.sort();
        assert_eq!(tagger.tags(), sorted.as_slice());
    }

    #[test]
    fn test_rare_tags_never_decoded() {
        // NUM é rara no corpus embutido: não pode sair do decodificador nem
        // para uma sentença cuja resposta correta seria NUM
        let corpus = crate::corpus::get_corpus();
        let size = crate::corpus::token_count(&corpus);
        let tagger = HmmTagger::train(&corpus, size, ModelConfig::default()).unwrap();
        assert!(!tagger.tags().contains(&"NUM".to_string()));

        let sentence: Vec<String> = ["A", "lei", "de", "1888", "."]
            .iter()
            .map(|w| w.to_string())
            .collect();
        for tag in tagger.tag_trigram(&sentence) {
            assert_ne!(tag, "NUM");
        }
    }

    #[test]
    fn test_output_length_matches_input() {
        let corpus = crate::corpus::get_corpus();
        let size = crate::corpus::token_count(&corpus);
        let tagger = HmmTagger::train(&corpus, size, ModelConfig::default()).unwrap();

        for len in 1..8 {
            let sentence: Vec<String> = (0..len).map(|i| format!("palavra{i}")).collect();
            assert_eq!(tagger.tag_bigram(&sentence).len(), len);
            assert_eq!(tagger.tag_trigram(&sentence).len(), len);
        }
    }
}
