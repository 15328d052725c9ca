//! # Relatório de Ativações
//!
//! Para cada avaliação, o motor registra **quais regras dispararam e
//! com que força** — é o que torna o resultado explicável. Uma regra é
//! considerada ativada quando sua força de disparo é estritamente
//! maior que zero; a lista preserva a ordem de declaração das regras
//! (ids ascendentes).
//!
//! A lista é capturada diretamente como saída de primeira classe da
//! avaliação e viaja dentro do [`Diagnosis`](super::Diagnosis) de cada
//! requisição — não existe estado compartilhado entre avaliações, o
//! que torna o uso concorrente seguro por construção.

use std::fmt;

use serde::Serialize;

/// Uma regra ativada: id (posição de declaração) e força de disparo.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Activation {
    /// Id 1-based da regra na ordem de declaração.
    pub rule_id: usize,
    /// Força de disparo em (0, 1] — estritamente positiva por contrato.
    pub strength: f64,
}

impl Activation {
    /// Força de disparo formatada com duas casas decimais, como exibida
    /// na trilha de auditoria e nas interfaces externas.
    pub fn formatted_strength(&self) -> String {
        format!("{:.2}", self.strength)
    }
}

/// Formatação `(id, "força")` usada na trilha de auditoria.
impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, \"{:.2}\")", self.rule_id, self.strength)
    }
}

/// Renderiza a lista completa de ativações no layout da trilha:
/// `[(1, "1.00"), (11, "0.50")]`.
pub fn format_activations(activations: &[Activation]) -> String {
    let itens: Vec<String> = activations.iter().map(Activation::to_string).collect();
    format!("[{}]", itens.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A força é exibida com exatamente duas casas decimais.
    #[test]
    fn test_display_duas_casas() {
        let a = Activation {
            rule_id: 7,
            strength: 0.333_333,
        };
        assert_eq!(a.to_string(), "(7, \"0.33\")");
        assert_eq!(a.formatted_strength(), "0.33");
    }

    /// Lista renderizada no layout da trilha de auditoria.
    #[test]
    fn test_format_activations() {
        let lista = vec![
            Activation {
                rule_id: 1,
                strength: 1.0,
            },
            Activation {
                rule_id: 11,
                strength: 0.5,
            },
        ];
        assert_eq!(format_activations(&lista), "[(1, \"1.00\"), (11, \"0.50\")]");
        assert_eq!(format_activations(&[]), "[]");
    }
}
