//! # Regras — Antecedentes E/OU e Consequentes
//!
//! Uma [`Rule`] emparelha uma árvore de expressão [`Antecedent`]
//! (avaliada contra a atribuição de entradas) com uma lista ordenada de
//! [`Consequent`]s (os pares variável de saída / termo que a regra
//! sustenta quando dispara).
//!
//! ## Semântica
//!
//! A árvore é avaliada de baixo para cima contra valores concretos,
//! produzindo a **força de disparo** em \[0, 1\]:
//!
//! | Nó | Força |
//! |----|-------|
//! | `Term(variável, termo)` | grau de pertinência do valor concreto |
//! | `And(esq, dir)` | mínimo dos filhos |
//! | `Or(esq, dir)` | máximo dos filhos |
//!
//! Negação não é usada em nenhuma regra da base.
//!
//! ## Construtores da tabela
//!
//! A tabela de regras é dados, não código imperativo repetido. Os
//! construtores [`t`], [`any_of`] e [`all_of`] deixam cada registro
//! compacto e legível:
//!
//! ```rust
//! use crate::core::rule::{all_of, any_of, t};
//!
//! let antecedente = all_of(vec![
//!     t("medo", "alto"),
//!     any_of("morte", &["baixo", "medio"]),
//! ]);
//! ```

use serde::Serialize;

use super::error::ConfigError;

/// Árvore de expressão do antecedente de uma regra.
///
/// As folhas referenciam pares (variável, termo) por nome; a resolução
/// dos nomes é validada uma única vez na construção da base de regras.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Antecedent {
    /// Folha: grau de pertinência do valor da variável no termo.
    Term {
        /// Nome da variável de entrada.
        variable: &'static str,
        /// Nome do termo consultado.
        term: &'static str,
    },
    /// Conjunção fuzzy: mínimo dos filhos.
    And(Box<Antecedent>, Box<Antecedent>),
    /// Disjunção fuzzy: máximo dos filhos.
    Or(Box<Antecedent>, Box<Antecedent>),
}

impl Antecedent {
    /// Combina duas expressões por conjunção (mínimo).
    pub fn and(self, other: Antecedent) -> Antecedent {
        Antecedent::And(Box::new(self), Box::new(other))
    }

    /// Combina duas expressões por disjunção (máximo).
    pub fn or(self, other: Antecedent) -> Antecedent {
        Antecedent::Or(Box::new(self), Box::new(other))
    }

    /// Força de disparo da expressão, em \[0, 1\].
    ///
    /// `membership` resolve uma folha (variável, termo) para o grau de
    /// pertinência do valor concreto daquela variável — o motor fornece
    /// o fechamento com acesso à atribuição de entradas.
    pub fn strength<F>(&self, membership: &F) -> Result<f64, ConfigError>
    where
        F: Fn(&'static str, &'static str) -> Result<f64, ConfigError>,
    {
        match self {
            Antecedent::Term { variable, term } => membership(*variable, *term),
            Antecedent::And(l, r) => Ok(l.strength(membership)?.min(r.strength(membership)?)),
            Antecedent::Or(l, r) => Ok(l.strength(membership)?.max(r.strength(membership)?)),
        }
    }

    /// Visita todas as folhas (variável, termo) da expressão.
    ///
    /// Usado pela validação da base de regras na construção.
    pub fn visit_terms<F>(&self, visit: &mut F)
    where
        F: FnMut(&'static str, &'static str),
    {
        match self {
            Antecedent::Term { variable, term } => visit(*variable, *term),
            Antecedent::And(l, r) | Antecedent::Or(l, r) => {
                l.visit_terms(visit);
                r.visit_terms(visit);
            }
        }
    }
}

/// Atribuição de saída sustentada por uma regra: (variável, termo).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Consequent {
    /// Nome da variável de saída.
    pub variable: &'static str,
    /// Termo de severidade atribuído.
    pub term: &'static str,
}

/// Regra imutável da base.
///
/// O `id` é a posição 1-based na ordem de declaração — é este número
/// que aparece no relatório de ativações e na trilha de auditoria, por
/// isso a ordem de declaração da tabela nunca pode ser alterada.
///
/// A base entregue usa um consequente por regra (regras irmãs
/// compartilham o antecedente — o estilo deliberado de autoria
/// "várias regras por condição"), mas o tipo suporta vários.
#[derive(Clone, Debug, Serialize)]
pub struct Rule {
    /// Posição 1-based na ordem de declaração.
    pub id: usize,
    /// Árvore de expressão avaliada contra as entradas.
    pub antecedent: Antecedent,
    /// Atribuições de saída, em ordem.
    pub consequents: Vec<Consequent>,
}

/// Folha (variável, termo) — o construtor mais comum da tabela.
pub fn t(variable: &'static str, term: &'static str) -> Antecedent {
    Antecedent::Term { variable, term }
}

/// Disjunção de termos de uma mesma variável, dobrada em `Or` binários.
///
/// # Panics
///
/// Com uma lista vazia de termos — a tabela é estática e cada fator
/// declara ao menos um termo.
pub fn any_of(variable: &'static str, terms: &[&'static str]) -> Antecedent {
    terms
        .iter()
        .map(|term| t(variable, term))
        .reduce(Antecedent::or)
        .expect("any_of requer ao menos um termo")
}

/// Conjunção de fatores, dobrada em `And` binários.
///
/// # Panics
///
/// Com uma lista vazia de fatores — a tabela é estática e cada regra
/// declara ao menos um fator.
pub fn all_of(parts: Vec<Antecedent>) -> Antecedent {
    parts
        .into_iter()
        .reduce(Antecedent::and)
        .expect("all_of requer ao menos um fator")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Resolve folhas a partir de uma tabela fixa (variável, termo) -> grau.
    fn resolver<'a>(
        graus: &'a HashMap<(&'static str, &'static str), f64>,
    ) -> impl Fn(&'static str, &'static str) -> Result<f64, ConfigError> + 'a {
        move |variable, term| Ok(graus[&(variable, term)])
    }

    /// `And` é o mínimo e `Or` é o máximo dos filhos.
    #[test]
    fn test_and_min_or_max() {
        let graus = HashMap::from([
            (("medo", "alto"), 0.7),
            (("morte", "baixo"), 0.2),
            (("morte", "medio"), 0.5),
        ]);
        let f = resolver(&graus);

        let e = t("medo", "alto").and(t("morte", "baixo"));
        assert_eq!(e.strength(&f).unwrap(), 0.2);

        let ou = t("morte", "baixo").or(t("morte", "medio"));
        assert_eq!(ou.strength(&f).unwrap(), 0.5);
    }

    /// `all_of`/`any_of` dobram listas na mesma semântica min/max.
    #[test]
    fn test_construtores_da_tabela() {
        let graus = HashMap::from([
            (("medo", "alto"), 0.7),
            (("preoc_exc", "alto"), 0.9),
            (("morte", "baixo"), 0.2),
            (("morte", "medio"), 0.5),
        ]);
        let f = resolver(&graus);

        let a = all_of(vec![
            t("medo", "alto"),
            t("preoc_exc", "alto"),
            any_of("morte", &["baixo", "medio"]),
        ]);
        // min(0.7, 0.9, max(0.2, 0.5)) = 0.5
        assert_eq!(a.strength(&f).unwrap(), 0.5);
    }

    /// A força do And nunca excede o mínimo dos filhos; a do Or nunca
    /// fica abaixo do máximo.
    #[test]
    fn test_limites_de_forca() {
        let graus = HashMap::from([(("a", "x"), 0.3), (("b", "y"), 0.8)]);
        let f = resolver(&graus);
        let and = t("a", "x").and(t("b", "y"));
        let or = t("a", "x").or(t("b", "y"));
        assert!(and.strength(&f).unwrap() <= 0.3);
        assert!(or.strength(&f).unwrap() >= 0.8);
    }

    /// O visitante percorre todas as folhas, na ordem da expressão.
    #[test]
    fn test_visit_terms() {
        let a = all_of(vec![
            t("medo", "alto"),
            any_of("morte", &["baixo", "medio"]),
        ]);
        let mut folhas = Vec::new();
        a.visit_terms(&mut |v, tm| folhas.push((v, tm)));
        assert_eq!(
            folhas,
            vec![("medo", "alto"), ("morte", "baixo"), ("morte", "medio")]
        );
    }
}
