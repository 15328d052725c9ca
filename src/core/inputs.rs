//! # SymptomInputs — A Bateria de Entradas
//!
//! A atribuição de entradas de uma avaliação: exatamente doze valores
//! reais, um por variável de entrada, nominalmente em \[0, 5\].
//!
//! Onze vêm de controles deslizantes; `seman_sint_present` é um
//! ordinal derivado externamente de um seletor de três opções
//! ("2 semanas ou mais" -> 1, "6 meses ou mais" -> 3,
//! "Desde a infância" -> 5). A derivação é responsabilidade do
//! colaborador externo (camada web), não do motor.
//!
//! Chaves ausentes são impossíveis no nível do tipo: a struct exige os
//! doze campos e o serde rejeita JSON com membros faltando.

use serde::{Deserialize, Serialize};

use super::vocab;

/// As doze notas de sintomas de uma avaliação diagnóstica.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymptomInputs {
    /// Anedonia (perda de interesses).
    pub anedonia: f64,
    /// Humor deprimido.
    pub humor_deprimido: f64,
    /// Alteração no padrão do sono.
    pub alteracao_sono: f64,
    /// Pensamentos de morte.
    pub morte: f64,
    /// Rigidez cognitiva.
    pub rigidez_cog: f64,
    /// Medo.
    pub medo: f64,
    /// Preocupação excessiva.
    pub preoc_exc: f64,
    /// Comportamentos estereotipados.
    pub comport_est: f64,
    /// Dificuldade na interação social.
    pub dif_inte_soc: f64,
    /// Possui doença(s) pré-existente(s)?
    pub doenca_pre_existente: f64,
    /// Sintomas presentes na maior parte do tempo.
    pub sint_present_maior: f64,
    /// Período com sintomas presentes (1, 3 ou 5, derivado do seletor).
    pub seman_sint_present: f64,
}

impl SymptomInputs {
    /// Valor da variável nomeada, ou `None` para nome desconhecido.
    pub fn get(&self, variable: &str) -> Option<f64> {
        match variable {
            vocab::ANEDONIA => Some(self.anedonia),
            vocab::HUMOR_DEPRIMIDO => Some(self.humor_deprimido),
            vocab::ALTERACAO_SONO => Some(self.alteracao_sono),
            vocab::MORTE => Some(self.morte),
            vocab::RIGIDEZ_COG => Some(self.rigidez_cog),
            vocab::MEDO => Some(self.medo),
            vocab::PREOC_EXC => Some(self.preoc_exc),
            vocab::COMPORT_EST => Some(self.comport_est),
            vocab::DIF_INTE_SOC => Some(self.dif_inte_soc),
            vocab::DOENCA_PRE_EXISTENTE => Some(self.doenca_pre_existente),
            vocab::SINT_PRESENT_MAIOR => Some(self.sint_present_maior),
            vocab::SEMAN_SINT_PRESENT => Some(self.seman_sint_present),
            _ => None,
        }
    }

    /// Pares (nome, valor) na ordem canônica do contrato de entrada.
    pub fn pairs(&self) -> [(&'static str, f64); 12] {
        [
            (vocab::ANEDONIA, self.anedonia),
            (vocab::HUMOR_DEPRIMIDO, self.humor_deprimido),
            (vocab::ALTERACAO_SONO, self.alteracao_sono),
            (vocab::MORTE, self.morte),
            (vocab::RIGIDEZ_COG, self.rigidez_cog),
            (vocab::MEDO, self.medo),
            (vocab::PREOC_EXC, self.preoc_exc),
            (vocab::COMPORT_EST, self.comport_est),
            (vocab::DIF_INTE_SOC, self.dif_inte_soc),
            (vocab::DOENCA_PRE_EXISTENTE, self.doenca_pre_existente),
            (vocab::SINT_PRESENT_MAIOR, self.sint_present_maior),
            (vocab::SEMAN_SINT_PRESENT, self.seman_sint_present),
        ]
    }

    /// Bateria com todas as notas em um mesmo valor — conveniência
    /// para testes e cenários sintéticos.
    pub fn uniform(value: f64) -> Self {
        Self {
            anedonia: value,
            humor_deprimido: value,
            alteracao_sono: value,
            morte: value,
            rigidez_cog: value,
            medo: value,
            preoc_exc: value,
            comport_est: value,
            dif_inte_soc: value,
            doenca_pre_existente: value,
            sint_present_maior: value,
            seman_sint_present: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vocab::SYMPTOM_ORDER;

    /// `pairs()` segue a ordem canônica e cobre as doze variáveis.
    #[test]
    fn test_ordem_canonica() {
        let entradas = SymptomInputs::uniform(2.0);
        let pares = entradas.pairs();
        assert_eq!(pares.len(), 12);
        for (par, esperado) in pares.iter().zip(SYMPTOM_ORDER) {
            assert_eq!(par.0, esperado);
        }
    }

    /// `get()` resolve cada nome canônico e rejeita desconhecidos.
    #[test]
    fn test_get_por_nome() {
        let mut entradas = SymptomInputs::uniform(0.0);
        entradas.medo = 4.0;
        assert_eq!(entradas.get("medo"), Some(4.0));
        assert_eq!(entradas.get("anedonia"), Some(0.0));
        assert_eq!(entradas.get("inexistente"), None);
    }
}
