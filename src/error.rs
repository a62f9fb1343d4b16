// src/error.rs
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Corpo em falta, campo obrigatório vazio ou JSON com tipo errado
    #[error("{0}")]
    Validation(String),

    #[error("Email já cadastrado")]
    DuplicateEmail,

    // A mensagem depende da entidade (utilizador, professor, registo)
    #[error("{0}")]
    NotFound(&'static str),

    #[error("Token não fornecido")]
    Unauthenticated,

    #[error("Token inválido")]
    Forbidden,

    #[error("Email ou senha inválidos")]
    InvalidCredentials,

    #[error("Erro na base de dados: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Erro ao processar password")]
    PasswordHashingError,

    #[error("Erro ao gerar token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro interno inesperado")]
    InternalServerError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DuplicateEmail => StatusCode::BAD_REQUEST,
            // Erros do driver seguem para o cliente tal como vieram
            AppError::Database(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthenticated | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Migration(_)
            | AppError::PasswordHashingError
            | AppError::TokenEncoding(_)
            | AppError::Config(_)
            | AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Rejeições do extractor JSON viram 400 em vez do 422 padrão do axum
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

// Id que não é número (ou rota mal formada) também vira 400 em JSON
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::warn!("Pedido rejeitado ({}): {}", status.as_u16(), self);
        }

        let message = match &self {
            AppError::Migration(_) | AppError::Config(_) => "Erro de configuração.".to_string(),
            AppError::PasswordHashingError | AppError::TokenEncoding(_) => {
                "Erro ao processar credenciais.".to_string()
            }
            AppError::InternalServerError => "Ocorreu um erro inesperado.".to_string(),
            AppError::Database(e) => e.to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
