//! # Tabela de Regras — A Base Completa da Bateria
//!
//! As 252 regras da bateria, declaradas como **dados** na ordem de
//! autoria. A posição na tabela é contrato: o id de cada
//! regra é a sua posição 1-based, e é esse número que aparece no
//! relatório de ativações e na trilha de auditoria — nenhuma regra
//! pode ser inserida, removida ou reordenada sem quebrar o histórico.
//!
//! ## Organização
//!
//! | Bloco | Regras | Conteúdo |
//! |-------|--------|----------|
//! | Quadros isolados | 1..=10 | um transtorno predominante por vez |
//! | Espelhamento | 11..=30 | os mesmos quadros alimentando as demais saídas |
//! | Pares: depressão x ansiedade | 31..=54 | dois transtornos elevados |
//! | Pares: ansiedade x TEA | 55..=81 | dois transtornos elevados |
//! | Pares: depressão x TEA | 82..=108 | dois transtornos elevados |
//! | Triplas co-ocorrentes | 109..=144 | três transtornos simultâneos |
//! | Refinamento | 145..=174 | casos adicionados em calibração |
//! | Ajustes visuais | 175..=234 | calibrados na inspeção dos conjuntos |
//! | Antecedente reduzido | 235..=252 | cobertura de reserva com 5 fatores |
//!
//! Cada quadro clínico alimenta as três saídas por regras irmãs
//! adjacentes de mesmo antecedente ([`RuleBaseBuilder::group`]) — o
//! estilo deliberado de autoria "várias regras por condição". O bloco
//! final usa antecedentes reduzidos (cinco fatores nucleares de cada
//! transtorno) como cobertura de reserva.

use crate::core::rule::{all_of, any_of, t};
use crate::core::vocab::{
    ALTERACAO_SONO, ALTO, ANEDONIA, ANSIEDADE, BAIXO, COMPORT_EST, DEPRESSAO, DIF_INTE_SOC,
    DOENCA_PRE_EXISTENTE, GRAVE, HUMOR_DEPRIMIDO, LEVE, MEDIO, MEDO, MODERADO, MORTE, PREOC_EXC,
    RIGIDEZ_COG, SEMAN_SINT_PRESENT, SINT_PRESENT_MAIOR, TEA,
};

use super::rule_base::RuleBaseBuilder;

/// Declara a tabela inteira no construtor, na ordem de autoria.
pub fn populate(b: &mut RuleBaseBuilder) {
    isolated_cases(b);
    mirrored_outputs(b);
    depression_anxiety_pairs(b);
    anxiety_asd_pairs(b);
    depression_asd_pairs(b);
    cooccurring_triples(b);
    refinement_cases(b);
    visual_adjustments(b);
    coarse_fallbacks(b);
}

/// Quadros isolados: um transtorno predominante por vez.
fn isolated_cases(b: &mut RuleBaseBuilder) {
    // Depressão LEVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
            t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
            t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        DEPRESSAO,
        LEVE,
    );

    b.rule(
        all_of(vec![
            any_of(ANEDONIA, &[BAIXO, MEDIO]), t(HUMOR_DEPRIMIDO, MEDIO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
            t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        DEPRESSAO,
        LEVE,
    );

    // Depressão MODERADO
    b.rule(
        all_of(vec![
            t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
            any_of(MORTE, &[BAIXO, MEDIO]), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO),
            t(PREOC_EXC, BAIXO), t(COMPORT_EST, BAIXO),
            any_of(DIF_INTE_SOC, &[BAIXO, MEDIO]), t(DOENCA_PRE_EXISTENTE, BAIXO),
            any_of(SINT_PRESENT_MAIOR, &[BAIXO, MEDIO]), t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        DEPRESSAO,
        MODERADO,
    );

    // Depressão GRAVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
            t(MORTE, ALTO), t(RIGIDEZ_COG, ALTO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, ALTO),
            any_of(DOENCA_PRE_EXISTENTE, &[BAIXO, MEDIO, ALTO]),
            t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        DEPRESSAO,
        GRAVE,
    );

    // Ansiedade LEVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), any_of(MEDO, &[BAIXO, MEDIO]),
            any_of(PREOC_EXC, &[BAIXO, MEDIO]), t(COMPORT_EST, BAIXO),
            t(DIF_INTE_SOC, BAIXO), t(DOENCA_PRE_EXISTENTE, BAIXO),
            t(SINT_PRESENT_MAIOR, BAIXO), t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        ANSIEDADE,
        LEVE,
    );

    // Ansiedade MODERADO
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), any_of(MEDO, &[BAIXO, MEDIO]), t(PREOC_EXC, MEDIO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, MEDIO),
            any_of(DOENCA_PRE_EXISTENTE, &[BAIXO, MEDIO]), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        ANSIEDADE,
        MODERADO,
    );

    // Ansiedade GRAVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[MEDIO, ALTO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
            t(COMPORT_EST, BAIXO), any_of(DIF_INTE_SOC, &[MEDIO, ALTO]),
            any_of(DOENCA_PRE_EXISTENTE, &[MEDIO, ALTO]), t(SINT_PRESENT_MAIOR, ALTO),
            t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        ANSIEDADE,
        GRAVE,
    );

    // TEA LEVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            any_of(RIGIDEZ_COG, &[BAIXO, MEDIO]), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, ALTO),
        ]),
        TEA,
        LEVE,
    );

    // TEA MODERADO
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
            any_of(MORTE, &[BAIXO, MEDIO]), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO),
            t(PREOC_EXC, BAIXO), t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, ALTO),
        ]),
        TEA,
        MODERADO,
    );

    // TEA GRAVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
            t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
            t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, ALTO),
        ]),
        TEA,
        GRAVE,
    );

}

/// Espelhamento: os mesmos quadros alimentando as demais saídas.
fn mirrored_outputs(b: &mut RuleBaseBuilder) {
    // Depressão LEVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
            t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
            t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        ANSIEDADE,
        LEVE,
    );

    b.rule(
        all_of(vec![
            any_of(ANEDONIA, &[BAIXO, MEDIO]), t(HUMOR_DEPRIMIDO, MEDIO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
            t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        ANSIEDADE,
        LEVE,
    );

    // Depressão MODERADO
    b.rule(
        all_of(vec![
            t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
            any_of(MORTE, &[BAIXO, MEDIO]), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO),
            t(PREOC_EXC, BAIXO), t(COMPORT_EST, BAIXO),
            any_of(DIF_INTE_SOC, &[BAIXO, MEDIO]), t(DOENCA_PRE_EXISTENTE, BAIXO),
            any_of(SINT_PRESENT_MAIOR, &[BAIXO, MEDIO]), t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        ANSIEDADE,
        LEVE,
    );

    // Depressão GRAVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
            t(MORTE, ALTO), t(RIGIDEZ_COG, ALTO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, ALTO),
            any_of(DOENCA_PRE_EXISTENTE, &[BAIXO, MEDIO, ALTO]),
            t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        ANSIEDADE,
        LEVE,
    );

    // Depressão LEVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
            t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
            t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        TEA,
        LEVE,
    );

    b.rule(
        all_of(vec![
            any_of(ANEDONIA, &[BAIXO, MEDIO]), t(HUMOR_DEPRIMIDO, MEDIO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
            t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        TEA,
        LEVE,
    );

    // Depressão MODERADO
    b.rule(
        all_of(vec![
            t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
            any_of(MORTE, &[BAIXO, MEDIO]), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO),
            t(PREOC_EXC, BAIXO), t(COMPORT_EST, BAIXO),
            any_of(DIF_INTE_SOC, &[BAIXO, MEDIO]), t(DOENCA_PRE_EXISTENTE, BAIXO),
            any_of(SINT_PRESENT_MAIOR, &[BAIXO, MEDIO]), t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        TEA,
        LEVE,
    );

    // Depressão GRAVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
            t(MORTE, ALTO), t(RIGIDEZ_COG, ALTO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, ALTO),
            any_of(DOENCA_PRE_EXISTENTE, &[BAIXO, MEDIO, ALTO]),
            t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, BAIXO),
        ]),
        TEA,
        LEVE,
    );

    // Ansiedade LEVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), any_of(MEDO, &[BAIXO, MEDIO]),
            any_of(PREOC_EXC, &[BAIXO, MEDIO]), t(COMPORT_EST, BAIXO),
            t(DIF_INTE_SOC, BAIXO), t(DOENCA_PRE_EXISTENTE, BAIXO),
            t(SINT_PRESENT_MAIOR, BAIXO), t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        DEPRESSAO,
        LEVE,
    );

    // Ansiedade MODERADO
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), any_of(MEDO, &[BAIXO, MEDIO]), t(PREOC_EXC, MEDIO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, MEDIO),
            any_of(DOENCA_PRE_EXISTENTE, &[BAIXO, MEDIO]), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        DEPRESSAO,
        LEVE,
    );

    // Ansiedade GRAVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[MEDIO, ALTO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
            t(COMPORT_EST, BAIXO), any_of(DIF_INTE_SOC, &[MEDIO, ALTO]),
            any_of(DOENCA_PRE_EXISTENTE, &[MEDIO, ALTO]), t(SINT_PRESENT_MAIOR, ALTO),
            t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        DEPRESSAO,
        LEVE,
    );

    // Ansiedade LEVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), any_of(MEDO, &[BAIXO, MEDIO]),
            any_of(PREOC_EXC, &[BAIXO, MEDIO]), t(COMPORT_EST, BAIXO),
            t(DIF_INTE_SOC, BAIXO), t(DOENCA_PRE_EXISTENTE, BAIXO),
            t(SINT_PRESENT_MAIOR, BAIXO), t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        TEA,
        LEVE,
    );

    // Ansiedade MODERADO
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), any_of(MEDO, &[BAIXO, MEDIO]), t(PREOC_EXC, MEDIO),
            t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, MEDIO),
            any_of(DOENCA_PRE_EXISTENTE, &[BAIXO, MEDIO]), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        TEA,
        LEVE,
    );

    // Ansiedade GRAVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[MEDIO, ALTO]), t(MORTE, BAIXO),
            t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
            t(COMPORT_EST, BAIXO), any_of(DIF_INTE_SOC, &[MEDIO, ALTO]),
            any_of(DOENCA_PRE_EXISTENTE, &[MEDIO, ALTO]), t(SINT_PRESENT_MAIOR, ALTO),
            t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        TEA,
        LEVE,
    );

    // TEA LEVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            any_of(RIGIDEZ_COG, &[BAIXO, MEDIO]), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, ALTO),
        ]),
        ANSIEDADE,
        LEVE,
    );

    // TEA MODERADO
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
            any_of(MORTE, &[BAIXO, MEDIO]), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO),
            t(PREOC_EXC, BAIXO), t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, ALTO),
        ]),
        ANSIEDADE,
        LEVE,
    );

    // TEA GRAVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
            t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
            t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, ALTO),
        ]),
        ANSIEDADE,
        LEVE,
    );

    // TEA LEVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO),
            any_of(ALTERACAO_SONO, &[BAIXO, MEDIO]), t(MORTE, BAIXO),
            any_of(RIGIDEZ_COG, &[BAIXO, MEDIO]), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, ALTO),
        ]),
        DEPRESSAO,
        LEVE,
    );

    // TEA MODERADO
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
            any_of(MORTE, &[BAIXO, MEDIO]), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO),
            t(PREOC_EXC, BAIXO), t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, ALTO),
        ]),
        DEPRESSAO,
        LEVE,
    );

    // TEA GRAVE
    b.rule(
        all_of(vec![
            t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
            t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
            t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, ALTO),
        ]),
        DEPRESSAO,
        LEVE,
    );

}

/// Pares co-ocorrentes: depressão e ansiedade.
fn depression_anxiety_pairs(b: &mut RuleBaseBuilder) {
    // Depressão LEVE e ansiedade MODERADO
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // Depressão MODERADO e ansiedade MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, MEDIO]),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // Depressão GRAVE e ansiedade GRAVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, MEDIO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, ALTO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, MEDIO]),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    // Ansiedade LEVE e depressão MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(ANSIEDADE, LEVE), (DEPRESSAO, MODERADO), (TEA, LEVE)]);

    // Ansiedade LEVE e depressão GRAVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(ANSIEDADE, LEVE), (DEPRESSAO, GRAVE), (TEA, LEVE)]);

    // Ansiedade GRAVE e depressão LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(ANSIEDADE, GRAVE), (DEPRESSAO, LEVE), (TEA, LEVE)]);

    // Ansiedade MODERADO e depressão GRAVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, ALTO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), any_of(SINT_PRESENT_MAIOR, &[MEDIO, ALTO]),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(ANSIEDADE, MODERADO), (DEPRESSAO, GRAVE), (TEA, LEVE)]);

    // Ansiedade GRAVE e depressão MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), any_of(SINT_PRESENT_MAIOR, &[ALTO, MEDIO]),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(ANSIEDADE, GRAVE), (DEPRESSAO, MODERADO), (TEA, LEVE)]);

}

/// Pares co-ocorrentes: ansiedade e TEA.
fn anxiety_asd_pairs(b: &mut RuleBaseBuilder) {
    // Ansiedade LEVE e TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(ANSIEDADE, LEVE), (TEA, LEVE), (DEPRESSAO, LEVE)]);

    // Ansiedade MODERADO e TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        any_of(DOENCA_PRE_EXISTENTE, &[BAIXO, MEDIO]), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(ANSIEDADE, MODERADO), (TEA, MODERADO), (DEPRESSAO, LEVE)]);

    // Ansiedade GRAVE e TEA GRAVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
        any_of(MORTE, &[ALTO, MEDIO]), t(RIGIDEZ_COG, ALTO), t(MEDO, ALTO),
        t(PREOC_EXC, ALTO), t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO),
        t(DOENCA_PRE_EXISTENTE, ALTO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(ANSIEDADE, GRAVE), (TEA, GRAVE), (DEPRESSAO, LEVE)]);

    // Ansiedade LEVE e TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(ANSIEDADE, LEVE), (TEA, MODERADO), (DEPRESSAO, LEVE)]);

    // Ansiedade LEVE e TEA GRAVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
        t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(ANSIEDADE, LEVE), (TEA, GRAVE), (DEPRESSAO, LEVE)]);

    // Ansiedade MODERADO e TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(ANSIEDADE, MODERADO), (TEA, LEVE), (DEPRESSAO, LEVE)]);

    // Ansiedade GRAVE e TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(ANSIEDADE, GRAVE), (TEA, LEVE), (DEPRESSAO, LEVE)]);

    // Ansiedade GRAVE e TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, ALTO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        any_of(DOENCA_PRE_EXISTENTE, &[BAIXO, MEDIO]),
        any_of(SINT_PRESENT_MAIOR, &[MEDIO, ALTO]), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(ANSIEDADE, GRAVE), (TEA, MODERADO), (DEPRESSAO, LEVE)]);

    // Ansiedade MODERADO e TEA GRAVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
        any_of(SINT_PRESENT_MAIOR, &[MEDIO, ALTO]), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(ANSIEDADE, MODERADO), (TEA, GRAVE), (DEPRESSAO, LEVE)]);

}

/// Pares co-ocorrentes: depressão e TEA.
fn depression_asd_pairs(b: &mut RuleBaseBuilder) {
    // Depressão LEVE e TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (TEA, LEVE), (ANSIEDADE, LEVE)]);

    // Depressão MODERADO e TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (TEA, MODERADO), (ANSIEDADE, LEVE)]);

    // Depressão GRAVE e TEA GRAVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, MEDIO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
        t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (TEA, GRAVE), (ANSIEDADE, LEVE)]);

    // Depressão LEVE e TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (TEA, MODERADO), (ANSIEDADE, LEVE)]);

    // Depressão LEVE e TEA GRAVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, MEDIO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
        t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (TEA, GRAVE), (ANSIEDADE, LEVE)]);

    // Depressão MODERADO e TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (TEA, LEVE), (ANSIEDADE, LEVE)]);

    // Depressão GRAVE e TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), any_of(SINT_PRESENT_MAIOR, &[MEDIO, ALTO]),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (TEA, LEVE), (ANSIEDADE, LEVE)]);

    // Depressão GRAVE e TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, MEDIO), t(MEDO, MEDIO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, ALTO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), any_of(SINT_PRESENT_MAIOR, &[MEDIO, ALTO]),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (TEA, MODERADO), (ANSIEDADE, LEVE)]);

    // Depressão MODERADO e TEA GRAVE
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, MEDIO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
        any_of(SINT_PRESENT_MAIOR, &[MEDIO, ALTO]), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (TEA, GRAVE), (ANSIEDADE, LEVE)]);

}

/// Triplas co-ocorrentes.
fn cooccurring_triples(b: &mut RuleBaseBuilder) {
    // Depressão MODERADO, Ansiedade LEVE, TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Depressão GRAVE, Ansiedade MODERADO, TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, ALTO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, MODERADO), (TEA, MODERADO)]);

    // Depressão LEVE, Ansiedade GRAVE, TEA GRAVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, ALTO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO),
        any_of(DOENCA_PRE_EXISTENTE, &[BAIXO, MEDIO]), t(SINT_PRESENT_MAIOR, ALTO),
        any_of(SEMAN_SINT_PRESENT, &[MEDIO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, GRAVE), (TEA, GRAVE)]);

    // Depressão LEVE, Ansiedade LEVE, TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, MODERADO)]);

    // Depressão MODERADO, Ansiedade LEVE, TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, LEVE), (TEA, MODERADO)]);

    // Depressão MODERADO, Ansiedade LEVE, TEA GRAVE
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
        t(SINT_PRESENT_MAIOR, ALTO), any_of(SEMAN_SINT_PRESENT, &[BAIXO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, LEVE), (TEA, GRAVE)]);

    // Depressão GRAVE, Ansiedade LEVE, TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Depressão GRAVE, Ansiedade LEVE, TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, LEVE), (TEA, MODERADO)]);

    // Depressão GRAVE, Ansiedade LEVE, TEA GRAVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, ALTO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
        t(SINT_PRESENT_MAIOR, ALTO), any_of(SEMAN_SINT_PRESENT, &[BAIXO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, LEVE), (TEA, GRAVE)]);

    // Depressão MODERADO, Ansiedade GRAVE, TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        any_of(SEMAN_SINT_PRESENT, &[MEDIO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    // Depressão LEVE, Ansiedade GRAVE, TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        any_of(SEMAN_SINT_PRESENT, &[MEDIO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, GRAVE), (TEA, MODERADO)]);

    // Depressão GRAVE, Ansiedade GRAVE, TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, MEDIO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, MEDIO, ALTO]),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, GRAVE), (TEA, MODERADO)]);

}

/// Casos de refinamento.
fn refinement_cases(b: &mut RuleBaseBuilder) {
    // Depressão GRAVE, Ansiedade LEVE, TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Depressão GRAVE, Ansiedade MODERADO
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // Depressão LEVE, Ansiedade GRAVE
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    // Depressão GRAVE, Ansiedade GRAVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, MEDIO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, MEDIO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, ALTO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, ALTO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    // Depressão GRAVE, TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, LEVE)]);

    b.rule(
        all_of(vec![
            t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
            t(MORTE, ALTO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
            t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
            t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
            t(SEMAN_SINT_PRESENT, MEDIO),
        ]),
        TEA,
        LEVE,
    );

    // Ansiedade LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
        t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Depressão GRAVE, Ansiedade GRAVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, ALTO), t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, MEDIO]),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    // Depressão MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
        t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Ansiedade LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, BAIXO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, LEVE)]);

}

/// Ajustes calibrados na inspeção visual dos conjuntos.
fn visual_adjustments(b: &mut RuleBaseBuilder) {
    // Depressão GRAVE, Ansiedade MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, MEDIO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // Depressão LEVE, Ansiedade LEVE
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Depressão LEVE, Ansiedade MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // Ansiedade GRAVE, Depressão MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    // Ansiedade GRAVE, Depressão LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    // Ansiedade MODERADO, Depressão MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), any_of(MEDO, &[BAIXO, MEDIO]),
        t(PREOC_EXC, ALTO), t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        any_of(SEMAN_SINT_PRESENT, &[BAIXO, MEDIO]),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // Ansiedade LEVE, Depressão LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, MEDIO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Depressão MODERADO, Ansiedade MODERADO
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, MEDIO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // Ansiedade GRAVE, Depressão MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    // Ansiedade MODERADO, Depressão LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, BAIXO), t(PREOC_EXC, ALTO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO),
        any_of(PREOC_EXC, &[BAIXO, MEDIO]), t(COMPORT_EST, ALTO),
        t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
        t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, MODERADO)]);

    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO),
        any_of(PREOC_EXC, &[BAIXO, MEDIO]), t(COMPORT_EST, ALTO),
        t(DIF_INTE_SOC, ALTO), t(DOENCA_PRE_EXISTENTE, BAIXO),
        t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, MODERADO)]);

    // Depressão MODERADO, Ansiedade MODERADO, TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, MEDIO), t(RIGIDEZ_COG, ALTO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, ALTO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, MODERADO), (TEA, MODERADO)]);

    // Depressão MODERADO, TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, MEDIO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, MEDIO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Ansiedade MODERADO, TEA MODERADO
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, ALTO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, ALTO), t(MEDO, ALTO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, ALTO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, MODERADO), (TEA, MODERADO)]);

    // TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, MEDIO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, ALTO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Ansiedade MODERADO, TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, MEDIO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, ALTO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // TEA LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, MEDIO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, MEDIO), t(MEDO, BAIXO), t(PREOC_EXC, BAIXO),
        t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, ALTO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, ALTO),
        t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Ansiedade MODERADO, Depressão LEVE
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, BAIXO), t(ALTERACAO_SONO, BAIXO),
        t(MORTE, BAIXO), t(RIGIDEZ_COG, BAIXO), t(MEDO, ALTO), t(PREOC_EXC, MEDIO),
        t(COMPORT_EST, BAIXO), t(DIF_INTE_SOC, BAIXO),
        t(DOENCA_PRE_EXISTENTE, BAIXO), t(SINT_PRESENT_MAIOR, MEDIO),
        t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

}

/// Regras de antecedente reduzido: cobertura de reserva.
fn coarse_fallbacks(b: &mut RuleBaseBuilder) {
    // Depressão moderada (antecedente reduzido)
    let a = all_of(vec![
        t(ANEDONIA, BAIXO), t(HUMOR_DEPRIMIDO, MEDIO), t(MORTE, MEDIO),
        t(SINT_PRESENT_MAIOR, MEDIO), t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(DEPRESSAO, MODERADO), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Depressão grave (antecedente reduzido)
    let a = all_of(vec![
        t(ANEDONIA, ALTO), t(HUMOR_DEPRIMIDO, ALTO), t(MORTE, ALTO),
        t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, BAIXO),
    ]);
    b.group(a, &[(DEPRESSAO, GRAVE), (ANSIEDADE, LEVE), (TEA, LEVE)]);

    // Ansiedade moderada (antecedente reduzido)
    let a = all_of(vec![
        t(ALTERACAO_SONO, MEDIO), t(MEDO, MEDIO), t(PREOC_EXC, MEDIO),
        t(SINT_PRESENT_MAIOR, MEDIO), t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, MODERADO), (TEA, LEVE)]);

    // Ansiedade grave (antecedente reduzido)
    let a = all_of(vec![
        t(ALTERACAO_SONO, ALTO), t(MEDO, ALTO), t(PREOC_EXC, ALTO),
        t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, MEDIO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, GRAVE), (TEA, LEVE)]);

    // TEA moderado (antecedente reduzido)
    let a = all_of(vec![
        t(RIGIDEZ_COG, MEDIO), t(COMPORT_EST, MEDIO), t(DIF_INTE_SOC, MEDIO),
        t(SINT_PRESENT_MAIOR, MEDIO), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, MODERADO)]);

    // TEA grave (antecedente reduzido)
    let a = all_of(vec![
        t(RIGIDEZ_COG, ALTO), t(COMPORT_EST, ALTO), t(DIF_INTE_SOC, ALTO),
        t(SINT_PRESENT_MAIOR, ALTO), t(SEMAN_SINT_PRESENT, ALTO),
    ]);
    b.group(a, &[(DEPRESSAO, LEVE), (ANSIEDADE, LEVE), (TEA, GRAVE)]);

}
