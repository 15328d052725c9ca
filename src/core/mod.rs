//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** do motor de inferência
//! fuzzy. Tudo no Diagnóstico Fuzzy gira em torno destes tipos:
//!
//! - [`TrapezoidMf`] — Função de pertinência trapezoidal (grau de verdade em \[0,1\])
//! - [`LinguisticVariable`] — Variável linguística com universo discretizado e termos
//! - [`Antecedent`] — Árvore de expressão E/OU sobre pares (variável, termo)
//! - [`Rule`] — Regra imutável com id posicional e consequentes ordenados
//! - [`SymptomInputs`] — A bateria de doze notas de sintomas de uma avaliação
//! - [`ConfigError`] — Erros de configuração, fatais na inicialização
//!
//! ## Analogia com o Mundo Real
//!
//! Pense em cada [`LinguisticVariable`] como uma **régua qualitativa**:
//! em vez de um limiar numérico único ("ansiedade > 7"), a régua tem
//! faixas sobrepostas ("baixo", "médio", "alto") e um valor concreto
//! pertence a cada faixa com um grau entre 0 e 1. A sobreposição das
//! faixas é intencional: é ela que produz transições suaves entre os
//! quadros clínicos.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{LinguisticVariable, TrapezoidMf};
//!
//! let medo = LinguisticVariable::new("medo", 0.0, 5.0, 1.0)
//!     .term("baixo", TrapezoidMf::new(0.0, 0.0, 1.0, 2.0)?)
//!     .term("alto", TrapezoidMf::new(3.0, 4.0, 6.0, 6.0)?);
//!
//! assert_eq!(medo.membership("baixo", 0.0)?, 1.0);
//! ```

/// Sub-módulo com a função de pertinência trapezoidal [`TrapezoidMf`].
pub mod membership;

/// Sub-módulo com a variável linguística [`LinguisticVariable`].
pub mod variable;

/// Sub-módulo com [`Antecedent`], [`Rule`] e os construtores da tabela de regras.
pub mod rule;

/// Sub-módulo com os nomes canônicos de variáveis e termos.
pub mod vocab;

/// Sub-módulo com a bateria de entradas [`SymptomInputs`].
pub mod inputs;

/// Sub-módulo com a taxonomia de erros de configuração.
pub mod error;

// Re-exports para conveniência — permite usar `crate::core::TrapezoidMf` diretamente.
pub use error::ConfigError;
pub use inputs::SymptomInputs;
pub use membership::TrapezoidMf;
pub use rule::{Antecedent, Consequent, Rule};
pub use variable::LinguisticVariable;
