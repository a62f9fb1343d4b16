// src/state.rs
use crate::services::token_service::TokenService;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub tokens: TokenService,
    // Quando falso, todas as rotas ficam abertas
    pub auth_required: bool,
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
