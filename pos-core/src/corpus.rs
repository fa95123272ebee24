//! # Corpus em Português Brasileiro com Anotações Morfossintáticas
//!
//! Corpus de sentenças anotadas manualmente cobrindo domínios temáticos do
//! Brasil. Cada palavra está pareada com sua classe gramatical (tag POS) em um
//! esquema simplificado inspirado no Mac-Morpho, servindo de material de
//! treinamento e demonstração para o etiquetador HMM.
//!
//! ## Tagset
//!
//! | Tag   | Classe                        | Exemplos                  |
//! |-------|-------------------------------|---------------------------|
//! | N     | Substantivo comum             | vacina, cidade, gol       |
//! | NPROP | Nome próprio                  | Fiocruz, Brasília         |
//! | ADJ   | Adjetivo                      | novo, brasileira          |
//! | V     | Verbo pleno                   | venceu, estuda            |
//! | VAUX  | Verbo auxiliar                | foi, tinha                |
//! | PCP   | Particípio                    | aprovado, construída      |
//! | ART   | Artigo                        | o, a, um, as              |
//! | PREP  | Preposição (e contrações)     | de, em, no, da, pelo      |
//! | PRON  | Pronome                       | ela, nós, muita, ninguém  |
//! | ADV   | Advérbio                      | ontem, bem, sempre        |
//! | NUM   | Numeral                       | dois, 1888                |
//! | KC    | Conjunção coordenativa        | e                         |
//! | KS    | Conjunção subordinativa       | quando                    |
//! | PU    | Pontuação                     | .                         |
//!
//! ## Domínios Cobertos
//! - Saúde e medicina
//! - Esportes
//! - Economia e negócios
//! - Ciência e tecnologia
//! - Cultura e entretenimento
//! - Meio ambiente
//! - Educação
//! - História do Brasil
//! - Política e cotidiano

use std::collections::HashMap;

use thiserror::Error;

/// Uma sentença anotada com classes gramaticais.
///
/// Cada elemento de `annotations` é um par `(palavra, tag)`. A ordem é
/// significativa e o comprimento é sempre ≥ 1 em um corpus válido
/// (ver [`validate`]).
#[derive(Debug, Clone, Copy)]
pub struct TaggedSentence {
    /// O texto corrido da sentença.
    pub text: &'static str,
    /// Domínio temático (utilizado para análises de performance por área).
    pub domain: &'static str,
    /// Pares (palavra, tag POS).
    /// Exemplo: `[("A", "ART"), ("vacina", "N")]`
    pub annotations: &'static [(&'static str, &'static str)],
}

/// Erros de validação do corpus.
///
/// A construção do modelo falha cedo (fail-fast) diante de um corpus
/// malformado, em vez de propagar estatísticas silenciosamente erradas.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("o corpus de treinamento está vazio")]
    EmptyCorpus,
    #[error("a sentença {0} não possui tokens")]
    EmptySentence(usize),
    #[error("palavra vazia na posição {position} da sentença {sentence}")]
    EmptyWord { sentence: usize, position: usize },
    #[error("tag vazia na posição {position} da sentença {sentence}")]
    EmptyTag { sentence: usize, position: usize },
    #[error("nenhuma tag ocorre mais de {0} vezes no corpus de treinamento")]
    NoCommonTags(u32),
}

/// Valida a boa-formação do corpus: não-vazio, sem sentenças vazias, sem
/// palavras ou tags vazias.
pub fn validate(corpus: &[TaggedSentence]) -> Result<(), CorpusError> {
    if corpus.is_empty() {
        return Err(CorpusError::EmptyCorpus);
    }
    for (s, sentence) in corpus.iter().enumerate() {
        if sentence.annotations.is_empty() {
            return Err(CorpusError::EmptySentence(s));
        }
        for (p, (word, tag)) in sentence.annotations.iter().enumerate() {
            if word.is_empty() {
                return Err(CorpusError::EmptyWord { sentence: s, position: p });
            }
            if tag.is_empty() {
                return Err(CorpusError::EmptyTag { sentence: s, position: p });
            }
        }
    }
    Ok(())
}

/// Particiona o corpus em (treinamento, teste) segundo a fração dada.
///
/// A divisão é posicional (sem embaralhamento), reproduzível entre execuções.
pub fn split(corpus: &[TaggedSentence], training_fraction: f64) -> (&[TaggedSentence], &[TaggedSentence]) {
    let n = (corpus.len() as f64 * training_fraction).round() as usize;
    let n = n.min(corpus.len());
    (&corpus[..n], &corpus[n..])
}

/// Número total de tokens do corpus.
///
/// Este escalar é a constante de normalização da suavização add-one do modelo
/// de emissão (ver [`crate::emission::EmissionModel`]); por convenção é
/// calculado sobre o domínio completo, antes da partição treino/teste.
pub fn token_count(corpus: &[TaggedSentence]) -> u32 {
    corpus
        .iter()
        .map(|sentence| sentence.annotations.len() as u32)
        .sum()
}

/// Tags "comuns": aquelas que ocorrem **mais de** `threshold` vezes.
///
/// Forma o vocabulário fechado de decodificação. Tags raras ficam de fora e
/// nunca podem ser escolhidas como saída, ainda que corretas no gabarito.
/// O resultado vem ordenado, garantindo iteração determinística nos
/// decodificadores.
pub fn common_tags(corpus: &[TaggedSentence], threshold: u32) -> Vec<String> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for sentence in corpus {
        for (_, tag) in sentence.annotations {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > threshold)
        .map(|(tag, _)| tag.to_string())
        .collect();
    tags.sort();
    tags
}

/// Mapa palavra → (tag → ocorrências) do corpus.
///
/// O conjunto de chaves é o predicado de "palavra conhecida" usado pela
/// avaliação: uma palavra do teste é conhecida se apareceu no treinamento.
pub fn words_to_tags(corpus: &[TaggedSentence]) -> HashMap<String, HashMap<String, u32>> {
    let mut map: HashMap<String, HashMap<String, u32>> = HashMap::new();
    for sentence in corpus {
        for (word, tag) in sentence.annotations {
            *map.entry(word.to_string())
                .or_default()
                .entry(tag.to_string())
                .or_insert(0) += 1;
        }
    }
    map
}

/// Versão sem gabarito do corpus: apenas as palavras, sentença a sentença.
///
/// Alinhada índice a índice com o corpus de origem — o contrato esperado por
/// [`crate::evaluation::evaluate`].
pub fn untagged(corpus: &[TaggedSentence]) -> Vec<Vec<String>> {
    corpus
        .iter()
        .map(|sentence| {
            sentence
                .annotations
                .iter()
                .map(|(word, _)| word.to_string())
                .collect()
        })
        .collect()
}

/// Retorna o corpus completo em PT-BR.
pub fn get_corpus() -> Vec<TaggedSentence> {
    vec![
        // ===== SAÚDE =====
        TaggedSentence {
            text: "A Fiocruz desenvolveu uma vacina nova contra a dengue.",
            domain: "saúde",
            annotations: &[
                ("A", "ART"), ("Fiocruz", "NPROP"), ("desenvolveu", "V"), ("uma", "ART"),
                ("vacina", "N"), ("nova", "ADJ"), ("contra", "PREP"), ("a", "ART"),
                ("dengue", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O médico examinou o paciente no hospital da cidade.",
            domain: "saúde",
            annotations: &[
                ("O", "ART"), ("médico", "N"), ("examinou", "V"), ("o", "ART"),
                ("paciente", "N"), ("no", "PREP"), ("hospital", "N"), ("da", "PREP"),
                ("cidade", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A enfermeira aplicou a dose da vacina ontem.",
            domain: "saúde",
            annotations: &[
                ("A", "ART"), ("enfermeira", "N"), ("aplicou", "V"), ("a", "ART"),
                ("dose", "N"), ("da", "PREP"), ("vacina", "N"), ("ontem", "ADV"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O Instituto Butantan produz milhões de doses para o país.",
            domain: "saúde",
            annotations: &[
                ("O", "ART"), ("Instituto", "NPROP"), ("Butantan", "NPROP"), ("produz", "V"),
                ("milhões", "N"), ("de", "PREP"), ("doses", "N"), ("para", "PREP"),
                ("o", "ART"), ("país", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A pesquisa clínica confirmou a eficácia do tratamento moderno.",
            domain: "saúde",
            annotations: &[
                ("A", "ART"), ("pesquisa", "N"), ("clínica", "ADJ"), ("confirmou", "V"),
                ("a", "ART"), ("eficácia", "N"), ("do", "PREP"), ("tratamento", "N"),
                ("moderno", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Ela recebeu o resultado do exame hoje.",
            domain: "saúde",
            annotations: &[
                ("Ela", "PRON"), ("recebeu", "V"), ("o", "ART"), ("resultado", "N"),
                ("do", "PREP"), ("exame", "N"), ("hoje", "ADV"), (".", "PU"),
            ],
        },

        // ===== ESPORTES =====
        TaggedSentence {
            text: "O Flamengo venceu o campeonato brasileiro no Maracanã.",
            domain: "esportes",
            annotations: &[
                ("O", "ART"), ("Flamengo", "NPROP"), ("venceu", "V"), ("o", "ART"),
                ("campeonato", "N"), ("brasileiro", "ADJ"), ("no", "PREP"),
                ("Maracanã", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A seleção brasileira disputou a final da copa.",
            domain: "esportes",
            annotations: &[
                ("A", "ART"), ("seleção", "N"), ("brasileira", "ADJ"), ("disputou", "V"),
                ("a", "ART"), ("final", "N"), ("da", "PREP"), ("copa", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O atacante marcou um gol bonito no segundo tempo.",
            domain: "esportes",
            annotations: &[
                ("O", "ART"), ("atacante", "N"), ("marcou", "V"), ("um", "ART"),
                ("gol", "N"), ("bonito", "ADJ"), ("no", "PREP"), ("segundo", "ADJ"),
                ("tempo", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A torcida comemorou a vitória com muita festa.",
            domain: "esportes",
            annotations: &[
                ("A", "ART"), ("torcida", "N"), ("comemorou", "V"), ("a", "ART"),
                ("vitória", "N"), ("com", "PREP"), ("muita", "PRON"), ("festa", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Ele treina no clube todos os dias.",
            domain: "esportes",
            annotations: &[
                ("Ele", "PRON"), ("treina", "V"), ("no", "PREP"), ("clube", "N"),
                ("todos", "PRON"), ("os", "ART"), ("dias", "N"), (".", "PU"),
            ],
        },

        // ===== ECONOMIA =====
        TaggedSentence {
            text: "O banco central aumentou a taxa de juros.",
            domain: "economia",
            annotations: &[
                ("O", "ART"), ("banco", "N"), ("central", "ADJ"), ("aumentou", "V"),
                ("a", "ART"), ("taxa", "N"), ("de", "PREP"), ("juros", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A Petrobras anunciou um lucro recorde neste ano.",
            domain: "economia",
            annotations: &[
                ("A", "ART"), ("Petrobras", "NPROP"), ("anunciou", "V"), ("um", "ART"),
                ("lucro", "N"), ("recorde", "N"), ("neste", "PREP"), ("ano", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A inflação caiu muito durante o semestre.",
            domain: "economia",
            annotations: &[
                ("A", "ART"), ("inflação", "N"), ("caiu", "V"), ("muito", "ADV"),
                ("durante", "PREP"), ("o", "ART"), ("semestre", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O mercado financeiro reagiu bem ao anúncio do governo.",
            domain: "economia",
            annotations: &[
                ("O", "ART"), ("mercado", "N"), ("financeiro", "ADJ"), ("reagiu", "V"),
                ("bem", "ADV"), ("ao", "PREP"), ("anúncio", "N"), ("do", "PREP"),
                ("governo", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "As empresas pequenas geram muitos empregos no país.",
            domain: "economia",
            annotations: &[
                ("As", "ART"), ("empresas", "N"), ("pequenas", "ADJ"), ("geram", "V"),
                ("muitos", "PRON"), ("empregos", "N"), ("no", "PREP"), ("país", "N"), (".", "PU"),
            ],
        },

        // ===== CIÊNCIA =====
        TaggedSentence {
            text: "Os cientistas observaram uma estrela distante com o telescópio.",
            domain: "ciência",
            annotations: &[
                ("Os", "ART"), ("cientistas", "N"), ("observaram", "V"), ("uma", "ART"),
                ("estrela", "N"), ("distante", "ADJ"), ("com", "PREP"), ("o", "ART"),
                ("telescópio", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A sonda enviou imagens novas do planeta vermelho.",
            domain: "ciência",
            annotations: &[
                ("A", "ART"), ("sonda", "N"), ("enviou", "V"), ("imagens", "N"),
                ("novas", "ADJ"), ("do", "PREP"), ("planeta", "N"), ("vermelho", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O laboratório publicou o estudo na revista internacional.",
            domain: "ciência",
            annotations: &[
                ("O", "ART"), ("laboratório", "N"), ("publicou", "V"), ("o", "ART"),
                ("estudo", "N"), ("na", "PREP"), ("revista", "N"), ("internacional", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A equipe analisou os dados durante dois meses.",
            domain: "ciência",
            annotations: &[
                ("A", "ART"), ("equipe", "N"), ("analisou", "V"), ("os", "ART"),
                ("dados", "N"), ("durante", "PREP"), ("dois", "NUM"), ("meses", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Eles descobriram uma espécie rara na floresta.",
            domain: "ciência",
            annotations: &[
                ("Eles", "PRON"), ("descobriram", "V"), ("uma", "ART"), ("espécie", "N"),
                ("rara", "ADJ"), ("na", "PREP"), ("floresta", "N"), (".", "PU"),
            ],
        },

        // ===== CULTURA =====
        TaggedSentence {
            text: "A escritora lançou um romance novo na bienal.",
            domain: "cultura",
            annotations: &[
                ("A", "ART"), ("escritora", "N"), ("lançou", "V"), ("um", "ART"),
                ("romance", "N"), ("novo", "ADJ"), ("na", "PREP"), ("bienal", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O museu recebeu uma exposição sobre a arte moderna.",
            domain: "cultura",
            annotations: &[
                ("O", "ART"), ("museu", "N"), ("recebeu", "V"), ("uma", "ART"),
                ("exposição", "N"), ("sobre", "PREP"), ("a", "ART"), ("arte", "N"),
                ("moderna", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A banda tocou uma música antiga no festival.",
            domain: "cultura",
            annotations: &[
                ("A", "ART"), ("banda", "N"), ("tocou", "V"), ("uma", "ART"),
                ("música", "N"), ("antiga", "ADJ"), ("no", "PREP"), ("festival", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O filme brasileiro ganhou o prêmio principal do júri.",
            domain: "cultura",
            annotations: &[
                ("O", "ART"), ("filme", "N"), ("brasileiro", "ADJ"), ("ganhou", "V"),
                ("o", "ART"), ("prêmio", "N"), ("principal", "ADJ"), ("do", "PREP"),
                ("júri", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Machado de Assis escreveu obras fundamentais da literatura.",
            domain: "cultura",
            annotations: &[
                ("Machado", "NPROP"), ("de", "PREP"), ("Assis", "NPROP"), ("escreveu", "V"),
                ("obras", "N"), ("fundamentais", "ADJ"), ("da", "PREP"), ("literatura", "N"), (".", "PU"),
            ],
        },

        // ===== MEIO AMBIENTE =====
        TaggedSentence {
            text: "O desmatamento na Amazônia diminuiu neste ano.",
            domain: "meio ambiente",
            annotations: &[
                ("O", "ART"), ("desmatamento", "N"), ("na", "PREP"), ("Amazônia", "NPROP"),
                ("diminuiu", "V"), ("neste", "PREP"), ("ano", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "As chuvas fortes alagaram o centro da capital.",
            domain: "meio ambiente",
            annotations: &[
                ("As", "ART"), ("chuvas", "N"), ("fortes", "ADJ"), ("alagaram", "V"),
                ("o", "ART"), ("centro", "N"), ("da", "PREP"), ("capital", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O rio recebeu o esgoto da região durante décadas.",
            domain: "meio ambiente",
            annotations: &[
                ("O", "ART"), ("rio", "N"), ("recebeu", "V"), ("o", "ART"),
                ("esgoto", "N"), ("da", "PREP"), ("região", "N"), ("durante", "PREP"),
                ("décadas", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Os voluntários plantaram mudas nativas na reserva.",
            domain: "meio ambiente",
            annotations: &[
                ("Os", "ART"), ("voluntários", "N"), ("plantaram", "V"), ("mudas", "N"),
                ("nativas", "ADJ"), ("na", "PREP"), ("reserva", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Ela defende a preservação das áreas verdes.",
            domain: "meio ambiente",
            annotations: &[
                ("Ela", "PRON"), ("defende", "V"), ("a", "ART"), ("preservação", "N"),
                ("das", "PREP"), ("áreas", "N"), ("verdes", "ADJ"), (".", "PU"),
            ],
        },

        // ===== EDUCAÇÃO =====
        TaggedSentence {
            text: "A escola pública abriu vagas novas neste semestre.",
            domain: "educação",
            annotations: &[
                ("A", "ART"), ("escola", "N"), ("pública", "ADJ"), ("abriu", "V"),
                ("vagas", "N"), ("novas", "ADJ"), ("neste", "PREP"), ("semestre", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Os alunos apresentaram o projeto na feira de ciências.",
            domain: "educação",
            annotations: &[
                ("Os", "ART"), ("alunos", "N"), ("apresentaram", "V"), ("o", "ART"),
                ("projeto", "N"), ("na", "PREP"), ("feira", "N"), ("de", "PREP"),
                ("ciências", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A professora explicou a matéria com muita paciência.",
            domain: "educação",
            annotations: &[
                ("A", "ART"), ("professora", "N"), ("explicou", "V"), ("a", "ART"),
                ("matéria", "N"), ("com", "PREP"), ("muita", "PRON"), ("paciência", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A universidade federal ofereceu bolsas para os estudantes.",
            domain: "educação",
            annotations: &[
                ("A", "ART"), ("universidade", "N"), ("federal", "ADJ"), ("ofereceu", "V"),
                ("bolsas", "N"), ("para", "PREP"), ("os", "ART"), ("estudantes", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Ele estuda matemática e física na biblioteca.",
            domain: "educação",
            annotations: &[
                ("Ele", "PRON"), ("estuda", "V"), ("matemática", "N"), ("e", "KC"),
                ("física", "N"), ("na", "PREP"), ("biblioteca", "N"), (".", "PU"),
            ],
        },

        // ===== HISTÓRIA =====
        TaggedSentence {
            text: "A princesa Isabel assinou a lei áurea em 1888.",
            domain: "história",
            annotations: &[
                ("A", "ART"), ("princesa", "N"), ("Isabel", "NPROP"), ("assinou", "V"),
                ("a", "ART"), ("lei", "N"), ("áurea", "ADJ"), ("em", "PREP"),
                ("1888", "NUM"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Dom Pedro proclamou a independência do Brasil.",
            domain: "história",
            annotations: &[
                ("Dom", "NPROP"), ("Pedro", "NPROP"), ("proclamou", "V"), ("a", "ART"),
                ("independência", "N"), ("do", "PREP"), ("Brasil", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A corte portuguesa chegou ao Rio de Janeiro em 1808.",
            domain: "história",
            annotations: &[
                ("A", "ART"), ("corte", "N"), ("portuguesa", "ADJ"), ("chegou", "V"),
                ("ao", "PREP"), ("Rio", "NPROP"), ("de", "PREP"), ("Janeiro", "NPROP"),
                ("em", "PREP"), ("1808", "NUM"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Os historiadores estudam os documentos do período colonial.",
            domain: "história",
            annotations: &[
                ("Os", "ART"), ("historiadores", "N"), ("estudam", "V"), ("os", "ART"),
                ("documentos", "N"), ("do", "PREP"), ("período", "N"), ("colonial", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O império terminou com a proclamação da república.",
            domain: "história",
            annotations: &[
                ("O", "ART"), ("império", "N"), ("terminou", "V"), ("com", "PREP"),
                ("a", "ART"), ("proclamação", "N"), ("da", "PREP"), ("república", "N"), (".", "PU"),
            ],
        },

        // ===== TECNOLOGIA =====
        TaggedSentence {
            text: "A empresa lançou um aplicativo novo para celulares.",
            domain: "tecnologia",
            annotations: &[
                ("A", "ART"), ("empresa", "N"), ("lançou", "V"), ("um", "ART"),
                ("aplicativo", "N"), ("novo", "ADJ"), ("para", "PREP"), ("celulares", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O sistema processa os dados em tempo real.",
            domain: "tecnologia",
            annotations: &[
                ("O", "ART"), ("sistema", "N"), ("processa", "V"), ("os", "ART"),
                ("dados", "N"), ("em", "PREP"), ("tempo", "N"), ("real", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Os engenheiros desenvolveram um robô para a fábrica.",
            domain: "tecnologia",
            annotations: &[
                ("Os", "ART"), ("engenheiros", "N"), ("desenvolveram", "V"), ("um", "ART"),
                ("robô", "N"), ("para", "PREP"), ("a", "ART"), ("fábrica", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A internet mudou a comunicação entre as pessoas.",
            domain: "tecnologia",
            annotations: &[
                ("A", "ART"), ("internet", "N"), ("mudou", "V"), ("a", "ART"),
                ("comunicação", "N"), ("entre", "PREP"), ("as", "ART"), ("pessoas", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Ela programa em várias linguagens quando trabalha.",
            domain: "tecnologia",
            annotations: &[
                ("Ela", "PRON"), ("programa", "V"), ("em", "PREP"), ("várias", "PRON"),
                ("linguagens", "N"), ("quando", "KS"), ("trabalha", "V"), (".", "PU"),
            ],
        },

        // ===== POLÍTICA =====
        TaggedSentence {
            text: "O projeto foi aprovado pelo congresso ontem.",
            domain: "política",
            annotations: &[
                ("O", "ART"), ("projeto", "N"), ("foi", "VAUX"), ("aprovado", "PCP"),
                ("pelo", "PREP"), ("congresso", "N"), ("ontem", "ADV"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A ponte foi construída pelo governo estadual.",
            domain: "política",
            annotations: &[
                ("A", "ART"), ("ponte", "N"), ("foi", "VAUX"), ("construída", "PCP"),
                ("pelo", "PREP"), ("governo", "N"), ("estadual", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "As obras foram concluídas antes do prazo.",
            domain: "política",
            annotations: &[
                ("As", "ART"), ("obras", "N"), ("foram", "VAUX"), ("concluídas", "PCP"),
                ("antes", "ADV"), ("do", "PREP"), ("prazo", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O prefeito tinha prometido uma solução rápida.",
            domain: "política",
            annotations: &[
                ("O", "ART"), ("prefeito", "N"), ("tinha", "VAUX"), ("prometido", "PCP"),
                ("uma", "ART"), ("solução", "N"), ("rápida", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A votação aconteceu ontem e o resultado saiu hoje.",
            domain: "política",
            annotations: &[
                ("A", "ART"), ("votação", "N"), ("aconteceu", "V"), ("ontem", "ADV"),
                ("e", "KC"), ("o", "ART"), ("resultado", "N"), ("saiu", "V"),
                ("hoje", "ADV"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Os senadores discutiram a proposta durante a sessão.",
            domain: "política",
            annotations: &[
                ("Os", "ART"), ("senadores", "N"), ("discutiram", "V"), ("a", "ART"),
                ("proposta", "N"), ("durante", "PREP"), ("a", "ART"), ("sessão", "N"), (".", "PU"),
            ],
        },

        // ===== COTIDIANO =====
        TaggedSentence {
            text: "Ele sempre chega cedo ao trabalho.",
            domain: "cotidiano",
            annotations: &[
                ("Ele", "PRON"), ("sempre", "ADV"), ("chega", "V"), ("cedo", "ADV"),
                ("ao", "PREP"), ("trabalho", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Nós visitamos Brasília e Goiânia durante as férias.",
            domain: "cotidiano",
            annotations: &[
                ("Nós", "PRON"), ("visitamos", "V"), ("Brasília", "NPROP"), ("e", "KC"),
                ("Goiânia", "NPROP"), ("durante", "PREP"), ("as", "ART"), ("férias", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Ela morava em Recife quando era criança.",
            domain: "cotidiano",
            annotations: &[
                ("Ela", "PRON"), ("morava", "V"), ("em", "PREP"), ("Recife", "NPROP"),
                ("quando", "KS"), ("era", "V"), ("criança", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O governador de Minas Gerais visitou Salvador ontem.",
            domain: "cotidiano",
            annotations: &[
                ("O", "ART"), ("governador", "N"), ("de", "PREP"), ("Minas", "NPROP"),
                ("Gerais", "NPROP"), ("visitou", "V"), ("Salvador", "NPROP"),
                ("ontem", "ADV"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Eles ainda moram perto da praça central.",
            domain: "cotidiano",
            annotations: &[
                ("Eles", "PRON"), ("ainda", "ADV"), ("moram", "V"), ("perto", "ADV"),
                ("da", "PREP"), ("praça", "N"), ("central", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Você conhece bem a história do Paraná.",
            domain: "cotidiano",
            annotations: &[
                ("Você", "PRON"), ("conhece", "V"), ("bem", "ADV"), ("a", "ART"),
                ("história", "N"), ("do", "PREP"), ("Paraná", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Santos Dumont voou em Paris com o avião dele.",
            domain: "cotidiano",
            annotations: &[
                ("Santos", "NPROP"), ("Dumont", "NPROP"), ("voou", "V"), ("em", "PREP"),
                ("Paris", "NPROP"), ("com", "PREP"), ("o", "ART"), ("avião", "N"),
                ("dele", "PRON"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A prefeitura de Curitiba criou um parque novo.",
            domain: "cotidiano",
            annotations: &[
                ("A", "ART"), ("prefeitura", "N"), ("de", "PREP"), ("Curitiba", "NPROP"),
                ("criou", "V"), ("um", "ART"), ("parque", "N"), ("novo", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Nós sempre lemos as notícias pela manhã.",
            domain: "cotidiano",
            annotations: &[
                ("Nós", "PRON"), ("sempre", "ADV"), ("lemos", "V"), ("as", "ART"),
                ("notícias", "N"), ("pela", "PREP"), ("manhã", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O trem chega muito cedo na estação.",
            domain: "cotidiano",
            annotations: &[
                ("O", "ART"), ("trem", "N"), ("chega", "V"), ("muito", "ADV"),
                ("cedo", "ADV"), ("na", "PREP"), ("estação", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Ela também participou da reunião hoje.",
            domain: "cotidiano",
            annotations: &[
                ("Ela", "PRON"), ("também", "ADV"), ("participou", "V"), ("da", "PREP"),
                ("reunião", "N"), ("hoje", "ADV"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Alguns moradores reclamaram do barulho novamente.",
            domain: "cotidiano",
            annotations: &[
                ("Alguns", "PRON"), ("moradores", "N"), ("reclamaram", "V"), ("do", "PREP"),
                ("barulho", "N"), ("novamente", "ADV"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O turista fotografou o Pão de Açúcar no Rio.",
            domain: "cotidiano",
            annotations: &[
                ("O", "ART"), ("turista", "N"), ("fotografou", "V"), ("o", "ART"),
                ("Pão", "NPROP"), ("de", "PREP"), ("Açúcar", "NPROP"), ("no", "PREP"),
                ("Rio", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Eles já terminaram o trabalho da semana.",
            domain: "cotidiano",
            annotations: &[
                ("Eles", "PRON"), ("já", "ADV"), ("terminaram", "V"), ("o", "ART"),
                ("trabalho", "N"), ("da", "PREP"), ("semana", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O ônibus passou muito tarde ontem à noite.",
            domain: "cotidiano",
            annotations: &[
                ("O", "ART"), ("ônibus", "N"), ("passou", "V"), ("muito", "ADV"),
                ("tarde", "ADV"), ("ontem", "ADV"), ("à", "PREP"), ("noite", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Ninguém respondeu a pergunta do professor.",
            domain: "cotidiano",
            annotations: &[
                ("Ninguém", "PRON"), ("respondeu", "V"), ("a", "ART"), ("pergunta", "N"),
                ("do", "PREP"), ("professor", "N"), (".", "PU"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_is_valid() {
        let corpus = get_corpus();
        assert!(validate(&corpus).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_corpus() {
        assert_eq!(validate(&[]), Err(CorpusError::EmptyCorpus));
    }

    #[test]
    fn test_validate_rejects_empty_sentence() {
        let corpus = vec![TaggedSentence {
            text: "",
            domain: "teste",
            annotations: &[],
        }];
        assert_eq!(validate(&corpus), Err(CorpusError::EmptySentence(0)));
    }

    #[test]
    fn test_validate_rejects_empty_tag() {
        let corpus = vec![TaggedSentence {
            text: "ola",
            domain: "teste",
            annotations: &[("ola", "")],
        }];
        assert_eq!(
            validate(&corpus),
            Err(CorpusError::EmptyTag { sentence: 0, position: 0 })
        );
    }

    #[test]
    fn test_token_count() {
        let corpus = vec![
            TaggedSentence { text: "o cão", domain: "teste", annotations: &[("o", "ART"), ("cão", "N")] },
            TaggedSentence { text: "ela corre", domain: "teste", annotations: &[("ela", "PRON"), ("corre", "V")] },
        ];
        assert_eq!(token_count(&corpus), 4);
    }

    #[test]
    fn test_common_tags_respects_threshold() {
        let corpus = vec![
            TaggedSentence { text: "o cão", domain: "teste", annotations: &[("o", "ART"), ("cão", "N")] },
            TaggedSentence { text: "a casa", domain: "teste", annotations: &[("a", "ART"), ("casa", "N")] },
            TaggedSentence { text: "ele", domain: "teste", annotations: &[("ele", "PRON")] },
        ];
        // Limiar 1: apenas tags com mais de uma ocorrência
        let tags = common_tags(&corpus, 1);
        assert_eq!(tags, vec!["ART".to_string(), "N".to_string()]);
        // Limiar 0: todas as tags entram, ordenadas
        let tags = common_tags(&corpus, 0);
        assert_eq!(tags, vec!["ART".to_string(), "N".to_string(), "PRON".to_string()]);
    }

    #[test]
    fn test_common_tags_of_embedded_corpus() {
        // As classes principais devem superar o limiar padrão de 20; as raras
        // (NUM, KC, KS, VAUX, PCP) ficam de fora do vocabulário fechado.
        let corpus = get_corpus();
        let tags = common_tags(&corpus, 20);
        for expected in ["ART", "N", "V", "PREP", "PU", "ADJ", "ADV", "PRON", "NPROP"] {
            assert!(tags.contains(&expected.to_string()), "tag comum ausente: {expected}");
        }
        for rare in ["NUM", "KC", "KS", "VAUX", "PCP"] {
            assert!(!tags.contains(&rare.to_string()), "tag rara não deveria entrar: {rare}");
        }
    }

    #[test]
    fn test_words_to_tags() {
        let corpus = vec![
            TaggedSentence { text: "a casa", domain: "teste", annotations: &[("a", "ART"), ("casa", "N")] },
            TaggedSentence { text: "a pessoa", domain: "teste", annotations: &[("a", "ART"), ("pessoa", "N")] },
        ];
        let map = words_to_tags(&corpus);
        assert_eq!(map["a"]["ART"], 2);
        assert_eq!(map["casa"]["N"], 1);
        assert!(!map.contains_key("cachorro"));
    }

    #[test]
    fn test_split_proportions() {
        let corpus = get_corpus();
        let (training, test) = split(&corpus, 0.9);
        assert_eq!(training.len() + test.len(), corpus.len());
        assert!(training.len() > test.len());
        assert!(!test.is_empty());
    }
}
