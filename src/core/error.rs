//! # Erros de Configuração
//!
//! Taxonomia dos erros que podem ocorrer ao **construir** o motor:
//! pontos de quebra malformados em uma função de pertinência, ou uma
//! regra referenciando variável/termo que não foi declarado.
//!
//! Todos são fatais: um [`ConfigError`] impede a inicialização do motor.
//! Depois que a base de regras foi validada com sucesso, nenhuma destas
//! condições pode ocorrer em tempo de avaliação — se ocorrer, é um bug
//! de programação, não uma condição de runtime a ser recuperada.

use thiserror::Error;

/// Erro de configuração detectado na construção do motor.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Pontos de quebra que violam a ordem exigida `a <= b <= c <= d`.
    #[error("pontos de quebra inválidos: [{a}, {b}, {c}, {d}] (exige a <= b <= c <= d)")]
    InvalidBreakpoints {
        /// Início da rampa de subida.
        a: f64,
        /// Início do platô.
        b: f64,
        /// Fim do platô.
        c: f64,
        /// Fim da rampa de descida.
        d: f64,
    },

    /// Termo referenciado que não foi declarado para a variável.
    #[error("termo desconhecido '{term}' para a variável '{variable}'")]
    UnknownTerm {
        /// Nome da variável consultada.
        variable: String,
        /// Nome do termo inexistente.
        term: String,
    },

    /// Regra referenciando uma variável que o motor não declara.
    #[error("variável desconhecida '{variable}' referenciada pela regra {rule_id}")]
    UnknownVariable {
        /// Nome da variável inexistente.
        variable: String,
        /// Id (1-based) da regra que fez a referência.
        rule_id: usize,
    },
}
