// src/services/auth_service.rs
use crate::error::{AppError, AppResult};

/// Custo fixo do bcrypt para todas as contas.
pub const BCRYPT_COST: u32 = 10;

// O bcrypt é CPU-bound: corre fora das threads do runtime
async fn run_bcrypt<T, F>(operacao: &'static str, f: F) -> AppResult<T>
where
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            tracing::error!("Task bcrypt ({}) falhou: {:?}", operacao, e);
            AppError::InternalServerError
        })?
        .map_err(|e| {
            tracing::error!("Erro bcrypt em {}: {:?}", operacao, e);
            AppError::PasswordHashingError
        })
}

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let (password, stored_hash) = (password.to_owned(), stored_hash.to_owned());
    run_bcrypt("verify_password", move || bcrypt::verify(password, &stored_hash)).await
}

/// Gera um hash bcrypt (com sal aleatório) para uma senha.
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_owned();
    run_bcrypt("hash_password", move || bcrypt::hash(password, BCRYPT_COST)).await
}
