//! # Vocabulário Canônico
//!
//! Nomes de variáveis e termos usados pela bateria. Centralizados aqui
//! para que a tabela de regras, o motor e a trilha de auditoria
//! compartilhem exatamente as mesmas chaves — um typo vira erro de
//! validação na inicialização, não um bug silencioso.

// ─── Variáveis de entrada ────────────────────────────────────────

/// Anedonia (perda de interesses).
pub const ANEDONIA: &str = "anedonia";
/// Humor deprimido.
pub const HUMOR_DEPRIMIDO: &str = "humor_deprimido";
/// Alteração no padrão do sono.
pub const ALTERACAO_SONO: &str = "alteracao_sono";
/// Pensamentos de morte.
pub const MORTE: &str = "morte";
/// Rigidez cognitiva.
pub const RIGIDEZ_COG: &str = "rigidez_cog";
/// Medo.
pub const MEDO: &str = "medo";
/// Preocupação excessiva.
pub const PREOC_EXC: &str = "preoc_exc";
/// Comportamentos estereotipados.
pub const COMPORT_EST: &str = "comport_est";
/// Dificuldade na interação social.
pub const DIF_INTE_SOC: &str = "dif_inte_soc";
/// Possui doença(s) pré-existente(s)?
pub const DOENCA_PRE_EXISTENTE: &str = "doenca_pre_existente";
/// Sintomas presentes na maior parte do tempo.
pub const SINT_PRESENT_MAIOR: &str = "sint_present_maior";
/// Período com sintomas presentes (ordinal derivado do seletor: 1, 3 ou 5).
pub const SEMAN_SINT_PRESENT: &str = "seman_sint_present";

// ─── Variáveis de saída ──────────────────────────────────────────

/// Escore de depressão, em [0, 10].
pub const DEPRESSAO: &str = "depressao";
/// Escore de ansiedade, em [0, 10].
pub const ANSIEDADE: &str = "ansiedade";
/// Escore de suspeita de TEA, em [0, 10].
pub const TEA: &str = "tea";

// ─── Termos ──────────────────────────────────────────────────────

/// Termo de entrada: faixa baixa do sintoma.
pub const BAIXO: &str = "baixo";
/// Termo de entrada: faixa intermediária.
pub const MEDIO: &str = "medio";
/// Termo de entrada: faixa alta.
pub const ALTO: &str = "alto";

/// Termo de saída: severidade leve.
pub const LEVE: &str = "leve";
/// Termo de saída: severidade moderada.
pub const MODERADO: &str = "moderado";
/// Termo de saída: severidade grave.
pub const GRAVE: &str = "grave";

/// Ordem canônica das doze entradas — a mesma do contrato de entrada
/// e das linhas da trilha de auditoria.
pub const SYMPTOM_ORDER: [&str; 12] = [
    ANEDONIA,
    HUMOR_DEPRIMIDO,
    ALTERACAO_SONO,
    MORTE,
    RIGIDEZ_COG,
    MEDO,
    PREOC_EXC,
    COMPORT_EST,
    DIF_INTE_SOC,
    DOENCA_PRE_EXISTENTE,
    SINT_PRESENT_MAIOR,
    SEMAN_SINT_PRESENT,
];

/// Ordem canônica das três saídas.
pub const OUTPUT_ORDER: [&str; 3] = [DEPRESSAO, ANSIEDADE, TEA];
