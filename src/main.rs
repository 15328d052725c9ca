#![allow(dead_code)]
#![allow(rustdoc::broken_intra_doc_links, rustdoc::invalid_html_tags)]
//! # Diagnóstico Fuzzy — Triagem de Transtornos Mentais
//!
//! **Ponto de entrada principal** da aplicação de triagem por lógica
//! fuzzy: doze notas de sintomas entram, três escores contínuos de
//! severidade saem (depressão, ansiedade, suspeita de TEA), junto com
//! o relatório de quais regras dispararam e com que força.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Constrói o FuzzyEngine (variáveis + 252 regras, validadas)
//!   │   └── ConfigError aqui é fatal: o processo não sobe
//!   ├── Abre a trilha de auditoria (append-only)
//!   ├── Monta AppState e Router
//!   └── Inicia o servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados
//! RUST_LOG=debug cargo run
//!
//! # Endereço e trilha configuráveis por ambiente
//! DIAGNOSTICO_ADDR=127.0.0.1:8080 DIAGNOSTICO_LOG=data/trilha.txt cargo run
//! ```
//!
//! ## Caso de Uso
//!
//! Um formulário externo coleta as notas dos sliders e o seletor de
//! período e chama `POST /diagnostico`; a resposta traz os três
//! escores em \[0, 10\] e a lista de regras ativadas, e cada avaliação
//! deixa uma linha na trilha de auditoria.

// Declaração dos módulos da aplicação.
// Cada módulo corresponde a uma camada da arquitetura:

/// Módulo `core` — tipos fundamentais: funções de pertinência,
/// variáveis linguísticas, regras e a bateria de entradas.
mod core;

/// Módulo `engine` — base de regras, inferência Mamdani e ativações.
mod engine;

/// Módulo `audit` — trilha de auditoria append-only.
mod audit;

/// Módulo `web` — servidor Axum e handlers HTTP.
mod web;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::audit::AuditLog;
use crate::engine::FuzzyEngine;
use crate::web::state::AppState;

/// Endereço de escuta padrão do servidor.
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Caminho padrão da trilha de auditoria.
const DEFAULT_LOG_PATH: &str = "logs.txt";

/// Função principal assíncrona do Diagnóstico Fuzzy.
///
/// A inicialização é de fase única: o motor constrói e valida a base
/// inteira em microssegundos, então o servidor só começa a aceitar
/// conexões com o motor pronto.
///
/// # Erros
///
/// Retorna erro se:
/// - A base de regras ou as funções de pertinência forem malformadas
///   (erro de configuração, fatal por contrato)
/// - Não conseguir abrir a trilha de auditoria
/// - Não conseguir fazer bind no endereço configurado
#[tokio::main]
async fn main() -> Result<()> {
    // Configura o sistema de logging/tracing.
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧠 Diagnóstico Fuzzy — Starting...");

    // Constrói o motor: variáveis, funções de pertinência e as 252
    // regras, tudo validado. Falha aqui impede a subida do processo.
    let engine = FuzzyEngine::new().context("Falha ao construir o motor de inferência")?;
    tracing::info!(regras = engine.rule_count(), "Base de regras carregada");

    // Abre a trilha de auditoria em modo append.
    let log_path =
        std::env::var("DIAGNOSTICO_LOG").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let audit = AuditLog::open(&log_path)
        .with_context(|| format!("Falha ao abrir a trilha de auditoria em {log_path}"))?;

    // Estado compartilhado — motor somente-leitura, trilha serializada.
    let state = AppState {
        engine: Arc::new(engine),
        audit: Arc::new(audit),
    };

    let app = web::create_router(state);

    let addr = std::env::var("DIAGNOSTICO_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Falha ao fazer bind em {addr}"))?;
    tracing::info!("🚀 Server running at http://{addr}");

    // Inicia o servidor axum — bloqueia até o processo ser encerrado.
    axum::serve(listener, app).await?;

    Ok(())
}
