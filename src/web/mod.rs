//! # Módulo Web — A Interface JSON do Diagnóstico
//!
//! Camada web da aplicação, construída com **Axum**. A interface é
//! deliberadamente pequena: o formulário de coleta, a exibição de
//! resultados e o visualizador de regras ativadas são colaboradores
//! externos — este serviço só expõe a avaliação e um resumo da base.
//!
//! ## Arquitetura Web
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ Formulário / visualizador externos (fora do escopo) │
//! ├─────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                           │
//! │  ├── POST /diagnostico → escores + regras ativadas  │
//! │  └── GET  /regras      → resumo da base             │
//! ├─────────────────────────────────────────────────────┤
//! │ FuzzyEngine (somente-leitura) + AuditLog (append)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |

pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// CORS permissivo: os colaboradores externos (formulário,
/// visualizador) podem ser servidos de qualquer origem.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/diagnostico", post(handlers::diagnose))
        .route("/regras", get(handlers::rules_summary))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
