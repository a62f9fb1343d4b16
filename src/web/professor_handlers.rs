// src/web/professor_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::account::{Account, AccountForm, AccountKind},
    services::account_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

const KIND: AccountKind = AccountKind::Professor;

// POST /professores
pub async fn handle_create(
    State(state): State<AppState>,
    AppJson(form): AppJson<AccountForm>,
) -> AppResult<(StatusCode, Json<Account>)> {
    let professor = account_service::register(&state.db_pool, KIND, form).await?;
    Ok((StatusCode::CREATED, Json(professor)))
}

// GET /professores
pub async fn handle_list(State(state): State<AppState>) -> AppResult<Json<Vec<Account>>> {
    Ok(Json(account_service::list_all(&state.db_pool, KIND).await?))
}

// GET /professores/{id}
pub async fn handle_get(State(state): State<AppState>, AppPath(id): AppPath<i64>) -> AppResult<Json<Account>> {
    account_service::find_by_id(&state.db_pool, KIND, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(KIND.not_found_message()))
}

// PUT /professores/{id}: só nome, email e masp
pub async fn handle_update(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(form): AppJson<AccountForm>,
) -> AppResult<Json<Account>> {
    let professor = account_service::update_profile(&state.db_pool, KIND, id, form).await?;
    Ok(Json(professor))
}

// DELETE /professores/{id}
pub async fn handle_delete(State(state): State<AppState>, AppPath(id): AppPath<i64>) -> AppResult<Json<Value>> {
    if account_service::delete_by_id(&state.db_pool, KIND, id).await? {
        Ok(Json(json!({ "message": "Professor removido" })))
    } else {
        Err(AppError::NotFound(KIND.not_found_message()))
    }
}
