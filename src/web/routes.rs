// src/web/routes.rs
use crate::{
    state::AppState,
    web::{auth_handlers, guia_handlers, mw_auth, professor_handlers},
};
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    // Registo e login ficam sempre abertos
    let public_routes = Router::new()
        .route("/register", post(auth_handlers::handle_register))
        .route("/register_adm", post(auth_handlers::handle_register))
        .route("/login", post(auth_handlers::handle_login))
        .route("/login_professor", post(auth_handlers::handle_login_professor));

    // --- Rotas de Gestão ---
    let management_routes = Router::new()
        .route("/register_adm/{id}", put(auth_handlers::handle_update_adm))
        .route(
            "/professores",
            get(professor_handlers::handle_list).post(professor_handlers::handle_create),
        )
        .route(
            "/professores/{id}",
            get(professor_handlers::handle_get)
                .put(professor_handlers::handle_update)
                .delete(professor_handlers::handle_delete),
        )
        .route(
            "/guia_ensino",
            get(guia_handlers::handle_list).post(guia_handlers::handle_create),
        )
        .route(
            "/guia_ensino/{id}",
            get(guia_handlers::handle_get)
                .put(guia_handlers::handle_update)
                .delete(guia_handlers::handle_delete),
        );

    // Exigem bearer token, a menos que AUTH_REQUIRED=false
    let management_routes = if app_state.auth_required {
        management_routes.route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            mw_auth::require_auth,
        ))
    } else {
        tracing::warn!("⚠️ AUTH_REQUIRED=false: rotas de gestão sem autenticação!");
        management_routes
    };

    // --- Router Final ---
    Router::new()
        .merge(public_routes)
        .merge(management_routes)
        .with_state(app_state)
}
