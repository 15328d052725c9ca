//! # LinguisticVariable — Variável Linguística
//!
//! Uma quantidade nomeada descrita por **termos qualitativos
//! sobrepostos** (ex: baixo/médio/alto) em vez de um limiar numérico
//! único. Cada termo mapeia para uma [`TrapezoidMf`]; o universo é um
//! intervalo limitado com passo de amostragem fixo.
//!
//! ## Papéis
//!
//! | Papel | Universo | Termos |
//! |-------|----------|--------|
//! | Entrada (antecedente) | \[0, 5\], passo 1 | baixo, medio, alto |
//! | Saída (consequente) | \[0, 10\], passo 1 | leve, moderado, grave |
//!
//! A sobreposição entre termos é esperada e intencional; os termos de
//! uma variável **não** particionam o universo sem lacunas.

use serde::Serialize;

use super::error::ConfigError;
use super::membership::TrapezoidMf;

/// Variável linguística: nome, universo discretizado e termos ordenados.
///
/// Construída uma vez na inicialização do motor e nunca mais mutada.
/// A consulta de pertinência delega à função do termo nomeado; um termo
/// não declarado é um erro de programação ([`ConfigError::UnknownTerm`]),
/// nunca uma condição de runtime depois que a base de regras foi
/// validada.
#[derive(Clone, Debug, Serialize)]
pub struct LinguisticVariable {
    /// Nome canônico da variável (ex: "anedonia", "depressao").
    name: &'static str,
    /// Limites inferior e superior do universo de discurso.
    universe: (f64, f64),
    /// Passo de amostragem do universo (1.0 em toda a bateria).
    step: f64,
    /// Termos na ordem de declaração: (nome, função de pertinência).
    terms: Vec<(&'static str, TrapezoidMf)>,
}

impl LinguisticVariable {
    /// Cria uma variável sem termos sobre o universo `[min, max]`.
    ///
    /// Os termos são acrescentados via [`term()`](LinguisticVariable::term);
    /// o invariante "conjunto de termos não-vazio" é garantido pelos
    /// construtores do motor, que sempre declaram os três termos da
    /// bateria.
    pub fn new(name: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self {
            name,
            universe: (min, max),
            step,
            terms: Vec::new(),
        }
    }

    /// Acrescenta um termo, preservando a ordem de declaração.
    pub fn term(mut self, name: &'static str, mf: TrapezoidMf) -> Self {
        self.terms.push((name, mf));
        self
    }

    /// Nome canônico da variável.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Limites `(min, max)` do universo de discurso.
    pub fn universe(&self) -> (f64, f64) {
        self.universe
    }

    /// Indica se o termo foi declarado para esta variável.
    pub fn has_term(&self, term: &str) -> bool {
        self.terms.iter().any(|(name, _)| *name == term)
    }

    /// Nomes dos termos na ordem de declaração.
    pub fn term_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.terms.iter().map(|(name, _)| *name)
    }

    /// Grau de pertinência de `x` no termo nomeado.
    ///
    /// # Erros
    ///
    /// [`ConfigError::UnknownTerm`] se o termo não foi declarado —
    /// impossível para uma base de regras validada na construção.
    pub fn membership(&self, term: &str, x: f64) -> Result<f64, ConfigError> {
        self.terms
            .iter()
            .find(|(name, _)| *name == term)
            .map(|(_, mf)| mf.degree(x))
            .ok_or_else(|| ConfigError::UnknownTerm {
                variable: self.name.to_string(),
                term: term.to_string(),
            })
    }

    /// Pontos amostrados do universo, de `min` a `max` com o passo fixo.
    ///
    /// Usado somente pela defuzzificação: o passo precisa coincidir
    /// entre instâncias do motor para centroides reproduzíveis.
    pub fn sample_points(&self) -> impl Iterator<Item = f64> {
        let (min, max) = self.universe;
        let step = self.step;
        let n = ((max - min) / step).round() as usize + 1;
        (0..n).map(move |i| min + step * i as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sintoma() -> LinguisticVariable {
        LinguisticVariable::new("medo", 0.0, 5.0, 1.0)
            .term("baixo", TrapezoidMf::new(0.0, 0.0, 1.0, 2.0).unwrap())
            .term("medio", TrapezoidMf::new(1.0, 2.0, 3.0, 4.0).unwrap())
            .term("alto", TrapezoidMf::new(3.0, 4.0, 6.0, 6.0).unwrap())
    }

    /// A consulta delega à função de pertinência do termo nomeado.
    #[test]
    fn test_membership_delega_ao_termo() {
        let v = sintoma();
        assert_eq!(v.membership("baixo", 0.0).unwrap(), 1.0);
        assert_eq!(v.membership("medio", 2.5).unwrap(), 1.0);
        assert_eq!(v.membership("alto", 5.0).unwrap(), 1.0);
        // Sobreposição intencional: 1.5 pertence a "baixo" e a "medio"
        assert_eq!(v.membership("baixo", 1.5).unwrap(), 0.5);
        assert_eq!(v.membership("medio", 1.5).unwrap(), 0.5);
    }

    /// Termo não declarado produz erro de configuração.
    #[test]
    fn test_termo_desconhecido() {
        let v = sintoma();
        let err = v.membership("altissimo", 3.0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownTerm {
                variable: "medo".to_string(),
                term: "altissimo".to_string(),
            }
        );
    }

    /// O universo discretizado cobre min..=max com o passo declarado.
    #[test]
    fn test_sample_points() {
        let saida = LinguisticVariable::new("depressao", 0.0, 10.0, 1.0);
        let pontos: Vec<f64> = saida.sample_points().collect();
        assert_eq!(pontos.len(), 11);
        assert_eq!(pontos[0], 0.0);
        assert_eq!(pontos[10], 10.0);
    }
}
