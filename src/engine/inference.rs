//! # FuzzyEngine — Avaliação Mamdani
//!
//! O motor recebe a bateria de entradas e produz um [`Diagnosis`] por
//! requisição: os três escores defuzzificados mais a lista de regras
//! ativadas. Não há estado mutável entre avaliações — a base de regras
//! e as variáveis linguísticas são somente-leitura após a construção,
//! seguras para leitores concorrentes ilimitados.
//!
//! ## Algoritmo
//!
//! 1. Valida cada entrada contra o universo da sua variável.
//! 2. Calcula a força de disparo de cada regra (And = min, Or = max,
//!    folha = grau de pertinência do valor concreto).
//! 3. Para cada variável de saída, agrega o suporte de cada termo:
//!    máximo ponto-a-ponto, sobre as regras que atribuem aquele
//!    (variável, termo), de `min(força, pertinência(termo, x))` em
//!    cada ponto amostrado — implicação por recorte (min) de Mamdani
//!    seguida de agregação por máximo. Os termos da variável são então
//!    combinados por máximo ponto-a-ponto em um único conjunto fuzzy.
//! 4. Defuzzifica por centroide: `Σ(x·μ) / Σ(μ)` sobre os pontos
//!    amostrados. Conjunto identicamente nulo não vira 0 nem NaN: é a
//!    condição distinta "nenhuma regra aplicável".
//! 5. Registra como ativação toda regra com força estritamente
//!    positiva, na ordem de declaração.
//!
//! ## Semântica de Falha
//!
//! Se **qualquer** uma das três saídas ficar sem regra contribuinte, a
//! avaliação inteira falha com a condição de combinação de entradas
//! não-diagnosticável — nada de resultados parciais. O chamador
//! registra a falha na trilha de auditoria e exibe o aviso ao usuário;
//! o motor não faz retry (a avaliação é função pura das entradas).
//!
//! ## Custo
//!
//! Limitado e proporcional a (nº de regras × nº de pontos do universo
//! de saída) — 252 × 11 por saída. Sem suspensão, sem I/O: a linha de
//! auditoria é gravada pelo chamador depois do cálculo puro.

use serde::Serialize;
use thiserror::Error;

use crate::core::vocab::{
    ALTO, BAIXO, GRAVE, LEVE, MEDIO, MODERADO, OUTPUT_ORDER, SYMPTOM_ORDER,
};
use crate::core::{ConfigError, LinguisticVariable, SymptomInputs, TrapezoidMf};

use super::activation::Activation;
use super::rule_base::{RuleBase, RuleBaseBuilder};
use super::rule_table;

/// Erro de avaliação — recuperável pelo chamador, ao contrário dos
/// erros de configuração.
#[derive(Debug, Error)]
pub enum DiagnosisError {
    /// Nenhuma regra contribuiu para a variável de saída: combinação
    /// de entradas não-diagnosticável. Reportada distintamente, nunca
    /// silenciosamente transformada em zero.
    #[error("nenhuma regra aplicável para a saída '{variable}'")]
    NoApplicableRule {
        /// Variável de saída sem suporte agregado.
        variable: String,
    },

    /// Valor de entrada fora do universo representável da variável.
    /// A fonte externa (sliders e seletor) não produz valores fora de
    /// faixa, então isto indica um chamador defeituoso.
    #[error("valor fora do universo [{min}, {max}] para '{variable}': {value}")]
    OutOfRange {
        /// Variável de entrada violada.
        variable: String,
        /// Valor recebido.
        value: f64,
        /// Limite inferior do universo.
        min: f64,
        /// Limite superior do universo.
        max: f64,
    },

    /// Referência não resolvida encontrada durante a avaliação — um
    /// bug de programação: a validação na construção torna isto
    /// inalcançável para o motor entregue.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Resultado de uma avaliação diagnóstica — um valor por requisição.
///
/// Substitui o objeto simulador compartilhado por um contexto com
/// escopo de requisição: criado pela avaliação, devolvido ao chamador
/// e descartado depois que o resultado é consumido e a linha de
/// auditoria é emitida. Nunca compartilhado nem mutado
/// concorrentemente.
#[derive(Clone, Debug, Serialize)]
pub struct Diagnosis {
    /// Escore de depressão em \[0, 10\].
    pub depressao: f64,
    /// Escore de ansiedade em \[0, 10\].
    pub ansiedade: f64,
    /// Escore de suspeita de TEA em \[0, 10\].
    pub tea: f64,
    /// Regras ativadas (força > 0), na ordem de declaração.
    pub activations: Vec<Activation>,
}

/// Motor de inferência fuzzy da bateria de sintomas.
///
/// Construído uma vez na inicialização; [`diagnose()`](FuzzyEngine::diagnose)
/// é uma função pura das entradas mais o estado somente-leitura.
pub struct FuzzyEngine {
    /// As doze variáveis de entrada, na ordem canônica.
    inputs: Vec<LinguisticVariable>,
    /// As três variáveis de saída, na ordem canônica.
    outputs: Vec<LinguisticVariable>,
    /// A base validada de regras.
    rules: RuleBase,
}

impl FuzzyEngine {
    /// Constrói o motor completo: variáveis, funções de pertinência e
    /// a tabela inteira de regras, validada.
    ///
    /// # Erros
    ///
    /// Qualquer [`ConfigError`] é fatal e deve impedir a subida do
    /// processo — uma base malformada não pode atender requisições.
    pub fn new() -> Result<Self, ConfigError> {
        let inputs = SYMPTOM_ORDER
            .into_iter()
            .map(symptom_variable)
            .collect::<Result<Vec<_>, _>>()?;
        let outputs = OUTPUT_ORDER
            .into_iter()
            .map(severity_variable)
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = RuleBaseBuilder::new();
        rule_table::populate(&mut builder);
        let rules = builder.build(&inputs, &outputs)?;

        tracing::info!(
            entradas = inputs.len(),
            saidas = outputs.len(),
            regras = rules.len(),
            "motor de inferência construído"
        );
        Ok(Self {
            inputs,
            outputs,
            rules,
        })
    }

    /// Quantidade de regras da base validada.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Avalia a bateria de entradas e devolve o diagnóstico.
    ///
    /// # Erros
    ///
    /// - [`DiagnosisError::OutOfRange`] para valor fora do universo;
    /// - [`DiagnosisError::NoApplicableRule`] quando alguma saída fica
    ///   sem regra contribuinte (a avaliação inteira falha).
    pub fn diagnose(&self, entradas: &SymptomInputs) -> Result<Diagnosis, DiagnosisError> {
        self.validate(entradas)?;

        // Força de disparo de cada regra, na ordem de declaração
        let mut strengths = Vec::with_capacity(self.rules.len());
        for rule in self.rules.rules() {
            let strength = rule.antecedent.strength(&|variable, term| {
                let value =
                    entradas
                        .get(variable)
                        .ok_or_else(|| ConfigError::UnknownVariable {
                            variable: variable.to_string(),
                            rule_id: rule.id,
                        })?;
                self.input(variable, rule.id)?.membership(term, value)
            })?;
            strengths.push(strength);
        }

        // Agregação e defuzzificação por variável de saída; a primeira
        // saída sem suporte aborta a avaliação inteira
        let mut scores = Vec::with_capacity(self.outputs.len());
        for output in &self.outputs {
            let (points, mu) = self.aggregate(output, &strengths)?;
            let score =
                centroid(&points, &mu).ok_or_else(|| DiagnosisError::NoApplicableRule {
                    variable: output.name().to_string(),
                })?;
            scores.push(score);
        }

        let activations: Vec<Activation> = self
            .rules
            .rules()
            .iter()
            .zip(&strengths)
            .filter(|(_, s)| **s > 0.0)
            .map(|(rule, s)| Activation {
                rule_id: rule.id,
                strength: *s,
            })
            .collect();

        tracing::debug!(
            depressao = scores[0],
            ansiedade = scores[1],
            tea = scores[2],
            ativadas = activations.len(),
            "avaliação concluída"
        );

        Ok(Diagnosis {
            depressao: scores[0],
            ansiedade: scores[1],
            tea: scores[2],
            activations,
        })
    }

    /// Rejeita valores fora do universo da variável.
    ///
    /// Política deliberada: sem clamping — a fonte externa não produz
    /// valores fora de faixa, então um valor fora do universo indica
    /// um chamador defeituoso e é reportado como erro de validação.
    fn validate(&self, entradas: &SymptomInputs) -> Result<(), DiagnosisError> {
        for (variable, value) in entradas.pairs() {
            if let Some(declared) = self.inputs.iter().find(|v| v.name() == variable) {
                let (min, max) = declared.universe();
                if value < min || value > max || value.is_nan() {
                    return Err(DiagnosisError::OutOfRange {
                        variable: variable.to_string(),
                        value,
                        min,
                        max,
                    });
                }
            }
        }
        Ok(())
    }

    /// Variável de entrada por nome; ausência é erro de configuração.
    fn input(&self, variable: &'static str, rule_id: usize) -> Result<&LinguisticVariable, ConfigError> {
        self.inputs
            .iter()
            .find(|v| v.name() == variable)
            .ok_or_else(|| ConfigError::UnknownVariable {
                variable: variable.to_string(),
                rule_id,
            })
    }

    /// Conjunto fuzzy agregado da variável de saída, amostrado no
    /// universo: máximo ponto-a-ponto dos consequentes recortados de
    /// todas as regras que dispararam.
    fn aggregate(
        &self,
        output: &LinguisticVariable,
        strengths: &[f64],
    ) -> Result<(Vec<f64>, Vec<f64>), ConfigError> {
        let points: Vec<f64> = output.sample_points().collect();
        let mut mu = vec![0.0_f64; points.len()];

        for rule in self.rules.rules() {
            let strength = strengths[rule.id - 1];
            if strength <= 0.0 {
                continue;
            }
            for consequent in &rule.consequents {
                if consequent.variable != output.name() {
                    continue;
                }
                for (i, &x) in points.iter().enumerate() {
                    let clipped = strength.min(output.membership(consequent.term, x)?);
                    if clipped > mu[i] {
                        mu[i] = clipped;
                    }
                }
            }
        }
        Ok((points, mu))
    }
}

/// Centroide discreto `Σ(x·μ) / Σ(μ)` sobre os pontos amostrados.
///
/// `None` para o conjunto identicamente nulo — a defuzzificação é
/// indefinida e o chamador sinaliza a condição distinta em vez de
/// devolver 0 ou NaN.
fn centroid(points: &[f64], mu: &[f64]) -> Option<f64> {
    let total: f64 = mu.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let weighted: f64 = points.iter().zip(mu).map(|(x, m)| x * m).sum();
    Some(weighted / total)
}

/// Variável de sintoma: universo \[0, 5\] passo 1, termos baixo/médio/alto.
///
/// Pontos de quebra da bateria; o `d = 6` além do topo do universo é
/// intencional — mantém o termo "alto" saturado em 1.0 na nota máxima.
fn symptom_variable(name: &'static str) -> Result<LinguisticVariable, ConfigError> {
    Ok(LinguisticVariable::new(name, 0.0, 5.0, 1.0)
        .term(BAIXO, TrapezoidMf::new(0.0, 0.0, 1.0, 2.0)?)
        .term(MEDIO, TrapezoidMf::new(1.0, 2.0, 3.0, 4.0)?)
        .term(ALTO, TrapezoidMf::new(3.0, 4.0, 6.0, 6.0)?))
}

/// Variável de severidade: universo \[0, 10\] passo 1, termos
/// leve/moderado/grave.
fn severity_variable(name: &'static str) -> Result<LinguisticVariable, ConfigError> {
    Ok(LinguisticVariable::new(name, 0.0, 10.0, 1.0)
        .term(LEVE, TrapezoidMf::new(0.0, 0.0, 2.0, 4.0)?)
        .term(MODERADO, TrapezoidMf::new(2.0, 4.0, 6.0, 8.0)?)
        .term(GRAVE, TrapezoidMf::new(6.0, 8.0, 10.0, 10.0)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Centroide do termo "leve" recortado em 1.0: (0+1+2+1.5)/3.5.
    const LEVE_CHEIO: f64 = 9.0 / 7.0;
    /// Centroide do termo "grave" recortado em 1.0: 30.5/3.5.
    const GRAVE_CHEIO: f64 = 61.0 / 7.0;

    fn motor() -> FuzzyEngine {
        FuzzyEngine::new().expect("base de regras validada")
    }

    fn aprox(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// A base entregue tem exatamente 252 regras com ids 1..=252.
    #[test]
    fn test_base_completa() {
        let m = motor();
        assert_eq!(m.rule_count(), 252);
        let ids: Vec<usize> = m.rules.rules().iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=252).collect::<Vec<usize>>());
    }

    /// Cenário de linha de base: todas as notas em 0 e período "2
    /// semanas ou mais" (1). A regra 1 (quadro todo-baixo) dispara com
    /// força 1.0, junto com suas irmãs espelhadas 11 e 15; as três
    /// saídas caem na faixa baixa.
    #[test]
    fn test_cenario_linha_de_base() {
        let mut entradas = SymptomInputs::uniform(0.0);
        entradas.seman_sint_present = 1.0;

        let d = motor().diagnose(&entradas).unwrap();
        assert!(aprox(d.depressao, LEVE_CHEIO));
        assert!(aprox(d.ansiedade, LEVE_CHEIO));
        assert!(aprox(d.tea, LEVE_CHEIO));
        assert!(d.depressao < 4.0 && d.ansiedade < 4.0 && d.tea < 4.0);

        let ativadas: Vec<(usize, f64)> =
            d.activations.iter().map(|a| (a.rule_id, a.strength)).collect();
        assert_eq!(ativadas, vec![(1, 1.0), (11, 1.0), (15, 1.0)]);
    }

    /// Cenário maximal: todas as notas em 5 e período "desde a
    /// infância" (5). O bloco grave de antecedente reduzido dispara
    /// (regras 250 a 252) e o TEA vai para a faixa superior.
    #[test]
    fn test_cenario_maximal() {
        let entradas = SymptomInputs::uniform(5.0);

        let d = motor().diagnose(&entradas).unwrap();
        assert!(aprox(d.tea, GRAVE_CHEIO));
        assert!(d.tea > 6.0);

        let ids: Vec<usize> = d.activations.iter().map(|a| a.rule_id).collect();
        assert_eq!(ids, vec![250, 251, 252]);
        assert!(d.activations.iter().all(|a| aprox(a.strength, 1.0)));
    }

    /// Quadro depressivo grave isolado: sintomas nucleares de
    /// depressão no máximo, demais em zero. As regras irmãs 127 a 129
    /// disparam e a depressão vai para a faixa superior.
    #[test]
    fn test_cenario_depressao_grave() {
        let mut entradas = SymptomInputs::uniform(0.0);
        entradas.anedonia = 5.0;
        entradas.humor_deprimido = 5.0;
        entradas.alteracao_sono = 5.0;
        entradas.morte = 5.0;
        entradas.sint_present_maior = 5.0;
        entradas.seman_sint_present = 5.0;

        let d = motor().diagnose(&entradas).unwrap();
        assert!(aprox(d.depressao, GRAVE_CHEIO));
        assert!(d.depressao > 6.0);
        assert!(aprox(d.ansiedade, LEVE_CHEIO));
        assert!(aprox(d.tea, LEVE_CHEIO));

        let ids: Vec<usize> = d.activations.iter().map(|a| a.rule_id).collect();
        assert_eq!(ids, vec![127, 128, 129]);
    }

    /// Lacuna real de cobertura da base: comportamentos estereotipados
    /// no máximo com todos os demais sintomas ausentes não casa com
    /// nenhuma regra. A avaliação inteira falha com a condição
    /// não-diagnosticável — nunca um zero silencioso.
    #[test]
    fn test_combinacao_nao_diagnosticavel() {
        let mut entradas = SymptomInputs::uniform(0.0);
        entradas.comport_est = 5.0;
        entradas.seman_sint_present = 1.0;

        let err = motor().diagnose(&entradas).unwrap_err();
        assert!(matches!(err, DiagnosisError::NoApplicableRule { .. }));
    }

    /// Avaliações repetidas das mesmas entradas produzem saídas e
    /// listas de ativação idênticas — nenhum estado oculto sobrevive
    /// entre requisições.
    #[test]
    fn test_determinismo() {
        let m = motor();
        let mut entradas = SymptomInputs::uniform(0.0);
        entradas.anedonia = 1.5;
        entradas.seman_sint_present = 1.0;

        let d1 = m.diagnose(&entradas).unwrap();
        let d2 = m.diagnose(&entradas).unwrap();
        assert_eq!(d1.depressao, d2.depressao);
        assert_eq!(d1.ansiedade, d2.ansiedade);
        assert_eq!(d1.tea, d2.tea);
        assert_eq!(d1.activations, d2.activations);
    }

    /// A lista de ativações contém exatamente as regras com força
    /// estritamente positiva, em ordem ascendente de id, com forças
    /// em (0, 1].
    #[test]
    fn test_ativacoes_completas_e_ordenadas() {
        let mut entradas = SymptomInputs::uniform(0.0);
        entradas.anedonia = 1.5;
        entradas.seman_sint_present = 1.0;

        let d = motor().diagnose(&entradas).unwrap();
        assert!(!d.activations.is_empty());
        for par in d.activations.windows(2) {
            assert!(par[0].rule_id < par[1].rule_id);
        }
        for a in &d.activations {
            assert!(a.strength > 0.0 && a.strength <= 1.0);
        }
        // anedonia parcialmente fora do "baixo" atenua o quadro
        // todo-baixo para 0.5
        let ativadas: Vec<(usize, f64)> =
            d.activations.iter().map(|a| (a.rule_id, a.strength)).collect();
        assert_eq!(ativadas, vec![(1, 0.5), (11, 0.5), (15, 0.5)]);
    }

    /// Valor fora do universo é rejeitado com erro de validação, sem
    /// clamping.
    #[test]
    fn test_entrada_fora_de_faixa() {
        let mut entradas = SymptomInputs::uniform(0.0);
        entradas.anedonia = 7.0;

        let err = motor().diagnose(&entradas).unwrap_err();
        match err {
            DiagnosisError::OutOfRange {
                variable, value, ..
            } => {
                assert_eq!(variable, "anedonia");
                assert_eq!(value, 7.0);
            }
            other => panic!("esperava OutOfRange, veio {other:?}"),
        }
    }
}
