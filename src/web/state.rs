//! # Estado da Aplicação Web
//!
//! Estado compartilhado entre todos os handlers Axum. O motor é
//! somente-leitura após a construção (leitores concorrentes ilimitados,
//! sem lock); a trilha de auditoria serializa a gravação internamente.

use std::sync::Arc;

use crate::audit::AuditLog;
use crate::engine::FuzzyEngine;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Motor de inferência, imutável após a inicialização.
    pub engine: Arc<FuzzyEngine>,
    /// Trilha de auditoria append-only.
    pub audit: Arc<AuditLog>,
}
