//! # RuleBase — A Coleção Ordenada de Regras
//!
//! A [`RuleBase`] é o contêiner imutável das regras da bateria,
//! construído uma única vez na inicialização do motor e nunca mais
//! mutado. A **ordem de declaração é contrato**: o id de cada regra é
//! a sua posição 1-based na tabela, e é esse número que aparece no
//! relatório de ativações e na trilha de auditoria.
//!
//! ## Validação na Construção
//!
//! [`RuleBaseBuilder::build`] percorre cada regra e resolve todas as
//! referências (variável, termo) — folhas do antecedente contra as
//! variáveis de entrada, consequentes contra as de saída. Qualquer
//! referência não declarada é um [`ConfigError`] fatal: o motor não
//! sobe com uma base malformada, e por isso a avaliação nunca encontra
//! nomes não resolvidos.

use crate::core::rule::{Antecedent, Consequent, Rule};
use crate::core::{ConfigError, LinguisticVariable};

/// Coleção ordenada e validada de regras, imutável após a construção.
#[derive(Debug)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Regras na ordem de declaração (ids 1..=len).
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Quantidade de regras da base.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Indica se a base está vazia (nunca, para a bateria entregue).
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Construtor incremental da [`RuleBase`].
///
/// A tabela de regras chama [`rule()`](RuleBaseBuilder::rule) e
/// [`group()`](RuleBaseBuilder::group) na ordem de autoria; os ids são
/// atribuídos sequencialmente a partir de 1.
#[derive(Default)]
pub struct RuleBaseBuilder {
    rules: Vec<Rule>,
}

impl RuleBaseBuilder {
    /// Cria um construtor vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acrescenta uma regra com um único consequente.
    pub fn rule(&mut self, antecedent: Antecedent, variable: &'static str, term: &'static str) {
        let id = self.rules.len() + 1;
        self.rules.push(Rule {
            id,
            antecedent,
            consequents: vec![Consequent { variable, term }],
        });
    }

    /// Acrescenta uma regra por consequente, todas compartilhando o
    /// mesmo antecedente.
    ///
    /// É o estilo de autoria "várias regras por condição" da base:
    /// um mesmo quadro clínico alimenta as três saídas por regras
    /// irmãs adjacentes, cada uma com id próprio.
    pub fn group(&mut self, antecedent: Antecedent, outputs: &[(&'static str, &'static str)]) {
        for &(variable, term) in outputs {
            self.rule(antecedent.clone(), variable, term);
        }
    }

    /// Valida todas as referências e congela a base.
    ///
    /// # Erros
    ///
    /// - [`ConfigError::UnknownVariable`] para folha ou consequente
    ///   referenciando variável não declarada;
    /// - [`ConfigError::UnknownTerm`] para termo não declarado na
    ///   variável referenciada.
    pub fn build(
        self,
        inputs: &[LinguisticVariable],
        outputs: &[LinguisticVariable],
    ) -> Result<RuleBase, ConfigError> {
        for rule in &self.rules {
            let mut bad: Option<ConfigError> = None;
            rule.antecedent.visit_terms(&mut |variable, term| {
                if bad.is_some() {
                    return;
                }
                bad = check_reference(inputs, variable, term, rule.id).err();
            });
            if let Some(err) = bad {
                return Err(err);
            }
            for consequent in &rule.consequents {
                check_reference(outputs, consequent.variable, consequent.term, rule.id)?;
            }
        }
        tracing::debug!(regras = self.rules.len(), "base de regras validada");
        Ok(RuleBase { rules: self.rules })
    }
}

/// Resolve uma referência (variável, termo) contra um conjunto de
/// variáveis declaradas.
fn check_reference(
    variables: &[LinguisticVariable],
    variable: &'static str,
    term: &'static str,
    rule_id: usize,
) -> Result<(), ConfigError> {
    let declared = variables
        .iter()
        .find(|v| v.name() == variable)
        .ok_or_else(|| ConfigError::UnknownVariable {
            variable: variable.to_string(),
            rule_id,
        })?;
    if !declared.has_term(term) {
        return Err(ConfigError::UnknownTerm {
            variable: variable.to_string(),
            term: term.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rule::t;
    use crate::core::TrapezoidMf;

    fn variavel(name: &'static str) -> LinguisticVariable {
        LinguisticVariable::new(name, 0.0, 5.0, 1.0)
            .term("baixo", TrapezoidMf::new(0.0, 0.0, 1.0, 2.0).unwrap())
            .term("alto", TrapezoidMf::new(3.0, 4.0, 6.0, 6.0).unwrap())
    }

    /// Ids são atribuídos sequencialmente, na ordem de declaração,
    /// inclusive dentro de grupos.
    #[test]
    fn test_ids_sequenciais() {
        let mut b = RuleBaseBuilder::new();
        b.rule(t("medo", "baixo"), "saida", "baixo");
        b.group(t("medo", "alto"), &[("saida", "alto"), ("saida", "baixo")]);

        let base = b
            .build(&[variavel("medo")], &[variavel("saida")])
            .unwrap();
        let ids: Vec<usize> = base.rules().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // As regras do grupo compartilham o antecedente
        assert_eq!(base.rules()[1].antecedent, base.rules()[2].antecedent);
    }

    /// Termo não declarado no antecedente impede a construção.
    #[test]
    fn test_termo_desconhecido_no_antecedente() {
        let mut b = RuleBaseBuilder::new();
        b.rule(t("medo", "medio"), "saida", "baixo");
        let err = b
            .build(&[variavel("medo")], &[variavel("saida")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTerm { .. }));
    }

    /// Variável não declarada no consequente impede a construção e
    /// reporta o id da regra culpada.
    #[test]
    fn test_variavel_desconhecida_no_consequente() {
        let mut b = RuleBaseBuilder::new();
        b.rule(t("medo", "baixo"), "saida", "baixo");
        b.rule(t("medo", "alto"), "inexistente", "baixo");
        let err = b
            .build(&[variavel("medo")], &[variavel("saida")])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownVariable {
                variable: "inexistente".to_string(),
                rule_id: 2,
            }
        );
    }
}
