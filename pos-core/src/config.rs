//! # Constantes Compartilhadas do Modelo
//!
//! Todos os símbolos reservados do etiquetador (pseudo-tags de início e fim de
//! sentença, tag-âncora de suavização, limiar de frequência do vocabulário)
//! vivem em um único objeto de configuração, passado **explicitamente** para
//! cada componente. Nenhum módulo depende de constantes globais.
//!
//! ## Pseudo-tags
//!
//! | Símbolo   | Papel                                                        |
//! |-----------|--------------------------------------------------------------|
//! | `START_2` | Primeiro elemento do contexto virtual de início (trigrama)   |
//! | `START_1` | Segundo elemento do contexto virtual de início               |
//! | `STOP`    | Marcador de fim de sentença                                  |
//!
//! Pseudo-tags participam das estatísticas de **transição**, mas nunca das de
//! **emissão**: elas não geram palavras.

use serde::{Deserialize, Serialize};

/// Configuração do modelo HMM.
///
/// Criada uma vez pelo chamador e compartilhada (por referência) com o
/// agregador de contagens, os modelos de transição/emissão e os decodificadores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Pseudo-tag imediatamente anterior à primeira palavra da sentença.
    pub start_1: String,
    /// Pseudo-tag anterior a [`ModelConfig::start_1`] (completa o contexto do trigrama).
    pub start_2: String,
    /// Pseudo-tag de fim de sentença.
    pub stop: String,
    /// Tag-âncora de emissão e política de degeneração.
    ///
    /// É pré-registrada na tabela de emissões com total zero, garantindo que a
    /// suavização add-one produza probabilidade estritamente positiva para ela
    /// mesmo sem nenhuma ocorrência. Também é a tag emitida quando nenhum
    /// caminho do reticulado sobrevive (ver [`crate::viterbi`]).
    ///
    /// Convenção: a tag de substantivo comum, a classe aberta mais frequente.
    pub fallback_tag: String,
    /// Uma tag só entra no vocabulário fechado de decodificação se ocorrer
    /// **mais de** este número de vezes no corpus de treinamento. Tags raras
    /// nunca podem ser escolhidas como saída.
    pub common_tag_threshold: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            start_1: "START_1".to_string(),
            start_2: "START_2".to_string(),
            stop: "STOP".to_string(),
            fallback_tag: "N".to_string(),
            common_tag_threshold: 20,
        }
    }
}

impl ModelConfig {
    /// Verifica se `tag` é uma das pseudo-tags reservadas.
    pub fn is_pseudo_tag(&self, tag: &str) -> bool {
        tag == self.start_1 || tag == self.start_2 || tag == self.stop
    }
}
