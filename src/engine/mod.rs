//! # Módulo Engine — Motor de Inferência Fuzzy
//!
//! Este módulo contém o **motor de inferência** do Diagnóstico Fuzzy,
//! responsável por transformar as doze notas de sintomas em três
//! escores contínuos de severidade, acompanhados do relatório de
//! quais regras dispararam.
//!
//! ## Pipeline de Avaliação (estilo Mamdani)
//!
//! ```text
//! Entradas (12 valores)
//!   │
//!   ├── 1. Fuzzificação: grau de cada (variável, termo)
//!   ├── 2. Força de disparo de cada regra (And = min, Or = max)
//!   ├── 3. Implicação por recorte (min) + agregação por máximo
//!   ├── 4. Defuzzificação por centroide, por variável de saída
//!   └── 5. Captura das ativações (regras com força > 0)
//!   │
//! Diagnosis { depressao, ansiedade, tea, ativações }
//! ```
//!
//! A base de regras é construída **uma única vez** na inicialização e
//! validada por inteiro; a avaliação é uma função pura das entradas
//! mais a base estática, segura para leitores concorrentes ilimitados.
//!
//! Veja [`FuzzyEngine`] para detalhes.

/// Sub-módulo com a coleção ordenada e validada de regras.
pub mod rule_base;

/// Sub-módulo com a tabela de regras declarada como dados.
pub mod rule_table;

/// Sub-módulo com o motor de avaliação e o resultado por requisição.
pub mod inference;

/// Sub-módulo com o relatório de ativações.
pub mod activation;

// Re-exports para acesso via `crate::engine::FuzzyEngine`.
pub use activation::Activation;
pub use inference::{Diagnosis, DiagnosisError, FuzzyEngine};
pub use rule_base::RuleBase;
