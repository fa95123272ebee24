//! # pos-core — Etiquetagem Morfossintática (POS Tagging) via HMM
//!
//! Este crate implementa um etiquetador morfossintático de referência para
//! Português Brasileiro, baseado em um Hidden Markov Model de bigramas e
//! trigramas de tags com decodificação por Viterbi. Ele foi projetado para ser
//! didático e modular, permitindo comparar as duas ordens de modelo sobre o
//! mesmo corpus.
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui em um pipeline linear, das folhas para o topo:
//!
//! 1.  **Corpus** ([`corpus`]): sentenças anotadas (palavra, tag), partição
//!     treino/teste, vocabulário de tags comuns.
//! 2.  **Contagens** ([`counts`]): uma passada pelo treinamento produz as
//!     tabelas de bigramas, trigramas e emissões, com os marcadores virtuais
//!     de início e fim de sentença.
//! 3.  **Probabilidades** ([`transition`], [`emission`]): as contagens viram
//!     funções puras de probabilidade — razões para as transições, suavização
//!     add-one para as emissões.
//! 4.  **Decodificação** ([`viterbi`], [`model`]): programação dinâmica sobre
//!     o reticulado posição × tag (bigrama) ou posição × tag × tag anterior
//!     (trigrama), com backpointers e terminação via `STOP`.
//! 5.  **Avaliação** ([`evaluation`]): acurácia por palavra
//!     conhecida/desconhecida e por classe gramatical grossa.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pos_core::{corpus, evaluation, HmmTagger, ModelConfig};
//!
//! // 1. Corpus embutido, particionado
//! let full = corpus::get_corpus();
//! let (training, test) = corpus::split(&full, 0.9);
//!
//! // 2. Treina o modelo (tabelas imutáveis dali em diante)
//! let tagger = HmmTagger::train(
//!     training,
//!     corpus::token_count(&full),
//!     ModelConfig::default(),
//! ).unwrap();
//!
//! // 3. Decodifica e avalia o conjunto de teste
//! let untagged = corpus::untagged(test);
//! let known = corpus::words_to_tags(training);
//! let report = evaluation::evaluate(|s| tagger.tag_trigram(s), test, &untagged, &known);
//! println!("{report}");
//! ```

pub mod config;
pub mod corpus;
pub mod counts;
pub mod emission;
pub mod evaluation;
pub mod model;
pub mod transition;
pub mod viterbi;

pub use config::ModelConfig;
pub use corpus::{CorpusError, TaggedSentence};
pub use evaluation::{evaluate, CoarseClass, EvalReport};
pub use model::HmmTagger;
