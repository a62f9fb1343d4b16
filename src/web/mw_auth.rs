// src/web/mw_auth.rs
use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Middleware que exige `Authorization: Bearer <token>` válido.
/// Sem token responde 401; token inválido ou expirado responde 403.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Usa a segunda palavra do cabeçalho, seja qual for o esquema
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().nth(1))
        .map(str::to_owned);

    let Some(token) = token else {
        tracing::debug!("Autenticação MW: pedido sem token para {}", request.uri());
        return Err(AppError::Unauthenticated);
    };

    match state.tokens.verify(&token) {
        Ok(claims) => {
            tracing::debug!("Autenticação MW: conta {} ({}) autenticada.", claims.id, claims.email);
            // Os handlers protegidos podem ler as claims das extensões
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => {
            tracing::warn!("Autenticação MW: token inválido para {}", request.uri());
            Err(AppError::Forbidden)
        }
    }
}
