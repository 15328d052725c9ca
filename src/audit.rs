//! # Trilha de Auditoria — Registro Append-Only das Avaliações
//!
//! Módulo responsável por gravar **uma linha de texto por avaliação**
//! (bem-sucedida ou não) em um arquivo append-only. O layout da linha
//! é superfície de compatibilidade — consumidores externos fazem
//! parsing do texto — e por isso é coberto por testes exatos.
//!
//! ## Layout das Linhas
//!
//! Sucesso:
//!
//! ```text
//! 07-08-2026 14:02:11 - TESTES | [Entradas => anedonia: 0.00, ..., seman_sint_present: 1.00] [Saída => Dep.: 1.29, Ans.: 1.29, TEA: 1.29][Regras Ativadas: [(1, "1.00"), (11, "1.00"), (15, "1.00")]]
//! ```
//!
//! Falha (combinação não-diagnosticável):
//!
//! ```text
//! 07-08-2026 14:02:11 - TESTES | [Entradas => ...] [Saída => REGRAS NÃO COMPUTADAS PARA AS ENTRADAS]
//! ```
//!
//! Todos os valores numéricos com duas casas decimais; as entradas na
//! ordem canônica do contrato. A gravação acontece **depois** do
//! cálculo puro, fora de qualquer seção crítica do motor.
//!
//! ## ⚠️ Falha de I/O
//!
//! Erro de escrita é propagado ao chamador sem retry nem camada de
//! resiliência — comportamento deliberadamente simples do trail.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use parking_lot::Mutex;

use crate::core::SymptomInputs;
use crate::engine::activation::format_activations;
use crate::engine::Diagnosis;

/// Formato do timestamp no prefixo de cada linha.
const TIMESTAMP_FMT: &str = "%d-%m-%Y %H:%M:%S";

/// Escritor append-only da trilha de auditoria.
///
/// O handle do arquivo fica aberto pela vida do processo, protegido
/// por `Mutex` para que requisições concorrentes não intercalem
/// linhas parciais.
pub struct AuditLog {
    /// Caminho do arquivo, para mensagens de erro.
    path: PathBuf,
    /// Handle aberto em modo append, com acesso exclusivo por linha.
    file: Mutex<File>,
}

impl AuditLog {
    /// Abre (ou cria) o arquivo da trilha em modo append.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Falha ao abrir a trilha de auditoria {}", path.display()))?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Registra uma avaliação bem-sucedida.
    pub fn record_success(&self, entradas: &SymptomInputs, diagnosis: &Diagnosis) -> Result<()> {
        self.append(&success_line(entradas, diagnosis))
    }

    /// Registra uma avaliação abortada por combinação de entradas
    /// não-diagnosticável.
    pub fn record_failure(&self, entradas: &SymptomInputs) -> Result<()> {
        self.append(&failure_line(entradas))
    }

    /// Acrescenta uma linha com o prefixo de timestamp local.
    fn append(&self, line: &str) -> Result<()> {
        let stamped = format!("{} - {}\n", Local::now().format(TIMESTAMP_FMT), line);
        let mut file = self.file.lock();
        file.write_all(stamped.as_bytes())
            .and_then(|_| file.flush())
            .with_context(|| {
                format!("Falha ao gravar na trilha de auditoria {}", self.path.display())
            })
    }
}

/// Linha de sucesso, sem o prefixo de timestamp.
pub(crate) fn success_line(entradas: &SymptomInputs, diagnosis: &Diagnosis) -> String {
    format!(
        "TESTES | [Entradas => {}] [Saída => Dep.: {:.2}, Ans.: {:.2}, TEA: {:.2}][Regras Ativadas: {}]",
        inputs_section(entradas),
        diagnosis.depressao,
        diagnosis.ansiedade,
        diagnosis.tea,
        format_activations(&diagnosis.activations),
    )
}

/// Linha de falha, sem o prefixo de timestamp.
pub(crate) fn failure_line(entradas: &SymptomInputs) -> String {
    format!(
        "TESTES | [Entradas => {}] [Saída => REGRAS NÃO COMPUTADAS PARA AS ENTRADAS]",
        inputs_section(entradas),
    )
}

/// Seção `k: v` das entradas, na ordem canônica, com duas casas.
fn inputs_section(entradas: &SymptomInputs) -> String {
    entradas
        .pairs()
        .iter()
        .map(|(chave, valor)| format!("{chave}: {valor:.2}"))
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Activation;

    fn entradas_base() -> SymptomInputs {
        let mut e = SymptomInputs::uniform(0.0);
        e.seman_sint_present = 1.0;
        e
    }

    /// Layout exato da linha de sucesso: entradas na ordem canônica,
    /// saídas abreviadas e lista de ativações, tudo com duas casas.
    #[test]
    fn test_linha_de_sucesso() {
        let d = Diagnosis {
            depressao: 9.0 / 7.0,
            ansiedade: 9.0 / 7.0,
            tea: 9.0 / 7.0,
            activations: vec![
                Activation {
                    rule_id: 1,
                    strength: 1.0,
                },
                Activation {
                    rule_id: 11,
                    strength: 1.0,
                },
            ],
        };
        let linha = success_line(&entradas_base(), &d);
        assert_eq!(
            linha,
            "TESTES | [Entradas => anedonia: 0.00, humor_deprimido: 0.00, \
             alteracao_sono: 0.00, morte: 0.00, rigidez_cog: 0.00, medo: 0.00, \
             preoc_exc: 0.00, comport_est: 0.00, dif_inte_soc: 0.00, \
             doenca_pre_existente: 0.00, sint_present_maior: 0.00, \
             seman_sint_present: 1.00] [Saída => Dep.: 1.29, Ans.: 1.29, TEA: 1.29]\
             [Regras Ativadas: [(1, \"1.00\"), (11, \"1.00\")]]"
        );
    }

    /// A linha de falha carrega o marcador "não computadas" e não tem
    /// lista de ativações.
    #[test]
    fn test_linha_de_falha() {
        let linha = failure_line(&entradas_base());
        assert!(linha.ends_with("[Saída => REGRAS NÃO COMPUTADAS PARA AS ENTRADAS]"));
        assert!(!linha.contains("Regras Ativadas"));
    }

    /// Gravação de ponta a ponta em arquivo temporário: uma linha por
    /// chamada, com prefixo de timestamp.
    #[test]
    fn test_gravacao_append_only() {
        let dir = std::env::temp_dir().join("fuzzy-diagnosis-test-audit");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("trilha-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let log = AuditLog::open(&path).unwrap();
        log.record_failure(&entradas_base()).unwrap();
        log.record_failure(&entradas_base()).unwrap();

        let conteudo = std::fs::read_to_string(&path).unwrap();
        let linhas: Vec<&str> = conteudo.lines().collect();
        assert_eq!(linhas.len(), 2);
        for linha in linhas {
            // prefixo "dd-mm-aaaa hh:mm:ss - "
            assert_eq!(linha.as_bytes()[2], b'-');
            assert!(linha.contains(" - TESTES | "));
        }
        std::fs::remove_file(&path).unwrap();
    }
}
