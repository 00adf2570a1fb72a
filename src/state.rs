//! Estado compartilhado da aplicação
//!
//! Este módulo define o estado que é passado através do router do Axum.
//! O pool é a única dependência de dados: cada operação do repositório
//! abre sua própria transação a partir dele, sem estado mutável
//! compartilhado entre requests.

use sqlx::PgPool;

use crate::config::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
