//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`]. A interface é JSON puro: o
//! formulário de coleta, a exibição de resultados e o visualizador de
//! regras ativadas são colaboradores externos que consomem esta API.
//!
//! ## Padrão de Resposta
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `diagnose` | POST | JSON | Executa a avaliação e grava a trilha |
//! | `rules_summary` | GET | JSON | Resumo da base para visualizadores |
//!
//! ## Derivação do Período
//!
//! O seletor de período é a única entrada que não é um slider: as três
//! opções são mapeadas para o ordinal 1/3/5 **aqui**, na borda externa
//! — o motor recebe sempre os doze valores numéricos prontos.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::SymptomInputs;
use crate::engine::{Diagnosis, DiagnosisError};

use super::state::AppState;

/// Aviso exibido ao usuário quando nenhuma regra cobre as entradas.
const NO_RULES_NOTICE: &str = "Não existem regras cadastradas para as entradas fornecidas.";

/// Período com sintomas presentes — o seletor de três opções.
///
/// A derivação para o ordinal da variável `seman_sint_present` segue o
/// mapeamento do formulário: 2 semanas -> 1 (baixo), 6 meses -> 3
/// (médio), desde a infância -> 5 (alto).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum SymptomPeriod {
    /// "2 semanas ou mais" -> 1.
    #[serde(rename = "2 semanas ou mais")]
    TwoWeeksOrMore,
    /// "6 meses ou mais" -> 3.
    #[serde(rename = "6 meses ou mais")]
    SixMonthsOrMore,
    /// "Desde a infância" -> 5.
    #[serde(rename = "Desde a infância")]
    SinceChildhood,
}

impl SymptomPeriod {
    /// Ordinal da variável `seman_sint_present`.
    pub fn grau(self) -> f64 {
        match self {
            SymptomPeriod::TwoWeeksOrMore => 1.0,
            SymptomPeriod::SixMonthsOrMore => 3.0,
            SymptomPeriod::SinceChildhood => 5.0,
        }
    }
}

/// Corpo do `POST /diagnostico`: os onze sliders mais o seletor.
#[derive(Debug, Deserialize)]
pub struct DiagnosisRequest {
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
    /// Período com sintomas presentes.
    pub periodo: SymptomPeriod,
}

impl DiagnosisRequest {
    /// Monta a bateria de entradas do motor, derivando o ordinal do
    /// período.
    pub fn into_inputs(self) -> SymptomInputs {
        SymptomInputs {
            anedonia: self.anedonia,
            humor_deprimido: self.humor_deprimido,
            alteracao_sono: self.alteracao_sono,
            morte: self.morte,
            rigidez_cog: self.rigidez_cog,
            medo: self.medo,
            preoc_exc: self.preoc_exc,
            comport_est: self.comport_est,
            dif_inte_soc: self.dif_inte_soc,
            doenca_pre_existente: self.doenca_pre_existente,
            sint_present_maior: self.sint_present_maior,
            seman_sint_present: self.periodo.grau(),
        }
    }
}

/// Uma regra ativada na resposta JSON, com o grau já formatado em
/// duas casas (o mesmo layout do visualizador externo).
#[derive(Debug, Serialize)]
pub struct ActivatedRule {
    /// Id 1-based da regra.
    pub regra: usize,
    /// Grau de ativação com duas casas decimais.
    pub grau: String,
}

/// Resposta do `POST /diagnostico`.
#[derive(Debug, Serialize)]
pub struct DiagnosisResponse {
    /// Escore de depressão em \[0, 10\].
    pub depressao: f64,
    /// Escore de ansiedade em \[0, 10\].
    pub ansiedade: f64,
    /// Escore de suspeita de TEA em \[0, 10\].
    pub tea: f64,
    /// Regras ativadas, na ordem de declaração.
    pub regras_ativadas: Vec<ActivatedRule>,
}

impl From<&Diagnosis> for DiagnosisResponse {
    fn from(d: &Diagnosis) -> Self {
        Self {
            depressao: d.depressao,
            ansiedade: d.ansiedade,
            tea: d.tea,
            regras_ativadas: d
                .activations
                .iter()
                .map(|a| ActivatedRule {
                    regra: a.rule_id,
                    grau: a.formatted_strength(),
                })
                .collect(),
        }
    }
}

/// Corpo de erro das respostas não-2xx.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Mensagem legível em PT-BR.
    pub mensagem: String,
}

/// POST `/diagnostico` — executa a avaliação completa.
///
/// Fluxo: monta a bateria, roda o motor, grava a linha de auditoria
/// (sucesso ou falha) e devolve escores + ativações. A gravação
/// acontece depois do cálculo puro.
///
/// | Condição | Status |
/// |----------|--------|
/// | Avaliação concluída | 200 |
/// | Nenhuma regra cobre as entradas | 422 |
/// | Valor fora do universo | 400 |
/// | Falha de I/O na trilha | 500 |
pub async fn diagnose(
    State(state): State<AppState>,
    Json(request): Json<DiagnosisRequest>,
) -> Response {
    let entradas = request.into_inputs();

    match state.engine.diagnose(&entradas) {
        Ok(diagnosis) => {
            if let Err(err) = state.audit.record_success(&entradas, &diagnosis) {
                tracing::error!(error = %err, "falha ao gravar a trilha de auditoria");
                return internal_error();
            }
            tracing::info!(
                depressao = diagnosis.depressao,
                ansiedade = diagnosis.ansiedade,
                tea = diagnosis.tea,
                ativadas = diagnosis.activations.len(),
                "diagnóstico concluído"
            );
            Json(DiagnosisResponse::from(&diagnosis)).into_response()
        }
        Err(DiagnosisError::NoApplicableRule { variable }) => {
            tracing::warn!(saida = %variable, "combinação de entradas não-diagnosticável");
            if let Err(err) = state.audit.record_failure(&entradas) {
                tracing::error!(error = %err, "falha ao gravar a trilha de auditoria");
                return internal_error();
            }
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    mensagem: NO_RULES_NOTICE.to_string(),
                }),
            )
                .into_response()
        }
        Err(err @ DiagnosisError::OutOfRange { .. }) => {
            tracing::warn!(error = %err, "entrada rejeitada na validação");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    mensagem: err.to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            // ConfigError em avaliação: inalcançável com a base validada
            tracing::error!(error = %err, "erro interno na avaliação");
            internal_error()
        }
    }
}

/// Resumo da base de regras para visualizadores externos.
#[derive(Debug, Serialize)]
pub struct RulesSummary {
    /// Quantidade total de regras da base validada.
    pub total: usize,
}

/// GET `/regras` — resumo da base para o visualizador externo.
pub async fn rules_summary(State(state): State<AppState>) -> Json<RulesSummary> {
    Json(RulesSummary {
        total: state.engine.rule_count(),
    })
}

/// Resposta 500 genérica, sem vazar detalhes internos.
fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            mensagem: "Erro interno ao processar o diagnóstico.".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mapeamento do seletor de período para o ordinal 1/3/5.
    #[test]
    fn test_derivacao_do_periodo() {
        assert_eq!(SymptomPeriod::TwoWeeksOrMore.grau(), 1.0);
        assert_eq!(SymptomPeriod::SixMonthsOrMore.grau(), 3.0);
        assert_eq!(SymptomPeriod::SinceChildhood.grau(), 5.0);
    }

    /// O seletor desserializa a partir dos rótulos do formulário.
    #[test]
    fn test_rotulos_do_seletor() {
        let p: SymptomPeriod = serde_json::from_str("\"Desde a infância\"").unwrap();
        assert_eq!(p, SymptomPeriod::SinceChildhood);
        let p: SymptomPeriod = serde_json::from_str("\"2 semanas ou mais\"").unwrap();
        assert_eq!(p, SymptomPeriod::TwoWeeksOrMore);
        assert!(serde_json::from_str::<SymptomPeriod>("\"ontem\"").is_err());
    }

    /// A requisição vira a bateria do motor com o ordinal derivado.
    #[test]
    fn test_into_inputs() {
        let corpo = serde_json::json!({
            "anedonia": 1.0, "humor_deprimido": 2.0, "alteracao_sono": 0.0,
            "morte": 0.0, "rigidez_cog": 0.0, "medo": 3.0, "preoc_exc": 0.0,
            "comport_est": 0.0, "dif_inte_soc": 0.0, "doenca_pre_existente": 0.0,
            "sint_present_maior": 4.0, "periodo": "6 meses ou mais"
        });
        let request: DiagnosisRequest = serde_json::from_value(corpo).unwrap();
        let entradas = request.into_inputs();
        assert_eq!(entradas.seman_sint_present, 3.0);
        assert_eq!(entradas.medo, 3.0);
        assert_eq!(entradas.sint_present_maior, 4.0);
    }

    /// Campo ausente é rejeitado pelo serde: chaves faltando são
    /// impossíveis no motor.
    #[test]
    fn test_campo_ausente_rejeitado() {
        let corpo = serde_json::json!({ "anedonia": 1.0, "periodo": "2 semanas ou mais" });
        assert!(serde_json::from_value::<DiagnosisRequest>(corpo).is_err());
    }
}
