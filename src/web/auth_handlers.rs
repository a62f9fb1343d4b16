// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::account::{Account, AccountForm, AccountKind, LoginForm, TokenResponse},
    services::{account_service, auth_service},
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

// POST /register e POST /register_adm
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(form): AppJson<AccountForm>,
) -> AppResult<(StatusCode, Json<Account>)> {
    let account = account_service::register(&state.db_pool, AccountKind::Usuario, form).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

// PUT /register_adm/{id}: substitui tudo, incluindo a senha
pub async fn handle_update_adm(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(form): AppJson<AccountForm>,
) -> AppResult<Json<Value>> {
    account_service::update_account(&state.db_pool, AccountKind::Usuario, id, form).await?;
    Ok(Json(json!({ "message": "Usuário atualizado com sucesso" })))
}

// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(form): AppJson<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    login(&state, AccountKind::Usuario, form).await
}

// POST /login_professor
pub async fn handle_login_professor(
    State(state): State<AppState>,
    AppJson(form): AppJson<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    login(&state, AccountKind::Professor, form).await
}

async fn login(state: &AppState, kind: AccountKind, form: LoginForm) -> AppResult<Json<TokenResponse>> {
    tracing::info!("Tentativa de login em '{}' para: {}", kind.table(), form.email);

    let Some(account) = account_service::find_by_email(&state.db_pool, kind, &form.email).await? else {
        tracing::warn!("Conta não encontrada: {}", form.email);
        return Err(AppError::InvalidCredentials);
    };

    if !auth_service::verify_password(&form.senha, &account.password_hash).await? {
        tracing::warn!("Senha incorreta para: {}", form.email);
        return Err(AppError::InvalidCredentials);
    }

    let token = state.tokens.issue(account.id, &account.email, kind.role())?;
    tracing::info!("✅ Login bem-sucedido para: {}", account.email);
    Ok(Json(TokenResponse { token }))
}
