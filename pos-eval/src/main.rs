//! Avaliação dos decodificadores bigrama e trigrama sobre o corpus embutido.
//!
//! Fluxo: partição 90/10 do corpus, treinamento do HMM, decodificação do
//! conjunto de teste com os dois Viterbi e impressão das taxas de acerto
//! (palavras conhecidas/desconhecidas e classes gramaticais grossas), além de
//! um resumo em JSON.

use pos_core::{corpus, evaluation, EvalReport, HmmTagger, ModelConfig};
use serde::Serialize;
use tracing::info;

/// Fração do corpus reservada ao treinamento.
const TRAINING_FRACTION: f64 = 0.9;
/// Máximo de sentenças avaliadas no teste.
const MAX_TEST_SENTENCES: usize = 100;

#[derive(Serialize)]
struct Summary<'a> {
    training_sentences: usize,
    test_sentences: usize,
    domain_tokens: u32,
    tags: &'a [String],
    bigram: &'a EvalReport,
    trigram: &'a EvalReport,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let full = corpus::get_corpus();
    let (training, test) = corpus::split(&full, TRAINING_FRACTION);
    let test = &test[..test.len().min(MAX_TEST_SENTENCES)];
    let domain_tokens = corpus::token_count(&full);

    info!(
        "corpus: {} sentenças ({} treino, {} teste), {} tokens no domínio",
        full.len(),
        training.len(),
        test.len(),
        domain_tokens
    );

    let tagger = HmmTagger::train(training, domain_tokens, ModelConfig::default())?;
    info!("vocabulário fechado: {} tags: {:?}", tagger.tags().len(), tagger.tags());

    let untagged = corpus::untagged(test);
    let known = corpus::words_to_tags(training);

    info!("decodificando com o Viterbi bigrama");
    let bigram_report = evaluation::evaluate(|s| tagger.tag_bigram(s), test, &untagged, &known);
    println!("Viterbi - Bigrama:");
    print!("{bigram_report}");

    info!("decodificando com o Viterbi trigrama");
    let trigram_report = evaluation::evaluate(|s| tagger.tag_trigram(s), test, &untagged, &known);
    println!("Viterbi - Trigrama:");
    print!("{trigram_report}");

    let summary = Summary {
        training_sentences: training.len(),
        test_sentences: test.len(),
        domain_tokens,
        tags: tagger.tags(),
        bigram: &bigram_report,
        trigram: &trigram_report,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
