// src/web/guia_handlers.rs
use crate::{
    error::AppResult,
    models::guia::{CamposGuia, GuiaEnsino},
    services::guia_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Map, Value};

// GET /guia_ensino
pub async fn handle_list(State(state): State<AppState>) -> AppResult<Json<Vec<GuiaEnsino>>> {
    Ok(Json(guia_service::find_all(&state.db_pool).await?))
}

// GET /guia_ensino/{id}
pub async fn handle_get(State(state): State<AppState>, AppPath(id): AppPath<i64>) -> AppResult<Json<GuiaEnsino>> {
    guia_service::find_by_id(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(guia_service::not_found)
}

// POST /guia_ensino
pub async fn handle_create(
    State(state): State<AppState>,
    AppJson(campos): AppJson<CamposGuia>,
) -> AppResult<(StatusCode, Json<GuiaEnsino>)> {
    let guia = guia_service::create(&state.db_pool, &campos).await?;
    Ok((StatusCode::CREATED, Json(guia)))
}

// PUT /guia_ensino/{id}
pub async fn handle_update(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(patch): AppJson<Map<String, Value>>,
) -> AppResult<Json<GuiaEnsino>> {
    Ok(Json(guia_service::update(&state.db_pool, id, patch).await?))
}

// DELETE /guia_ensino/{id}
pub async fn handle_delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Value>> {
    if guia_service::delete_by_id(&state.db_pool, id).await? {
        Ok(Json(json!({ "message": "Registro removido" })))
    } else {
        Err(guia_service::not_found())
    }
}
