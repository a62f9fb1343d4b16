// src/services/account_service.rs
use crate::{
    error::{AppError, AppResult},
    models::account::{Account, AccountForm, AccountKind},
    services::auth_service,
};
use sqlx::SqlitePool;

const ACCOUNT_COLUMNS: &str = "id, nome, email, masp, senha";

// Dados de uma conta depois de validados
struct ValidAccount {
    nome: String,
    email: String,
    senha: String,
    masp: Option<String>,
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("Campo obrigatório: {}", field))),
    }
}

fn validate(form: AccountForm) -> AppResult<ValidAccount> {
    Ok(ValidAccount {
        nome: required(form.nome, "nome")?,
        email: required(form.email, "email")?,
        senha: required(form.senha, "senha")?,
        masp: form.masp.flatten(),
    })
}

// Violação de UNIQUE (email) vira DuplicateEmail, o resto segue como erro da DB
fn map_write_error(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::DuplicateEmail,
        _ => AppError::Database(e),
    }
}

/// Cria uma conta nova com a senha já convertida em hash.
pub async fn register(db_pool: &SqlitePool, kind: AccountKind, form: AccountForm) -> AppResult<Account> {
    let conta = validate(form)?;
    tracing::info!("Registando conta em '{}': {}", kind.table(), conta.email);

    let password_hash = auth_service::hash_password(&conta.senha).await?;

    let sql = format!(
        "INSERT INTO {} (nome, email, masp, senha) VALUES (?1, ?2, ?3, ?4) RETURNING {}",
        kind.table(),
        ACCOUNT_COLUMNS
    );
    let account = sqlx::query_as::<_, Account>(&sql)
        .bind(&conta.nome)
        .bind(&conta.email)
        .bind(&conta.masp)
        .bind(&password_hash)
        .fetch_one(db_pool)
        .await
        .map_err(map_write_error)?;

    tracing::info!("✅ Conta {} criada em '{}'.", account.id, kind.table());
    Ok(account)
}

/// Substitui nome, email, masp e senha. A senha é sempre refeita.
pub async fn update_account(
    db_pool: &SqlitePool,
    kind: AccountKind,
    id: i64,
    form: AccountForm,
) -> AppResult<Account> {
    let conta = validate(form)?;
    tracing::info!("Atualizando conta {} em '{}'", id, kind.table());

    let password_hash = auth_service::hash_password(&conta.senha).await?;

    let sql = format!(
        "UPDATE {} SET nome = ?1, email = ?2, masp = ?3, senha = ?4 WHERE id = ?5 RETURNING {}",
        kind.table(),
        ACCOUNT_COLUMNS
    );
    let updated = sqlx::query_as::<_, Account>(&sql)
        .bind(&conta.nome)
        .bind(&conta.email)
        .bind(&conta.masp)
        .bind(&password_hash)
        .bind(id)
        .fetch_optional(db_pool)
        .await
        .map_err(map_write_error)?;

    match updated {
        Some(account) => {
            tracing::info!("✅ Conta {} atualizada.", id);
            Ok(account)
        }
        None => {
            tracing::warn!("Falha ao atualizar: conta {} não encontrada.", id);
            Err(AppError::NotFound(kind.not_found_message()))
        }
    }
}

/// Atualiza só os campos de perfil presentes no formulário; a senha não muda.
/// `masp` explícito a `null` limpa o valor guardado.
pub async fn update_profile(
    db_pool: &SqlitePool,
    kind: AccountKind,
    id: i64,
    form: AccountForm,
) -> AppResult<Account> {
    for (field, value) in [("nome", &form.nome), ("email", &form.email)] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(AppError::Validation(format!("Campo obrigatório: {}", field)));
        }
    }

    let sql = format!(
        "UPDATE {} SET nome = COALESCE(?1, nome), email = COALESCE(?2, email), masp = CASE WHEN ?3 THEN ?4 ELSE masp END \
         WHERE id = ?5 RETURNING {}",
        kind.table(),
        ACCOUNT_COLUMNS
    );
    sqlx::query_as::<_, Account>(&sql)
        .bind(&form.nome)
        .bind(&form.email)
        .bind(form.masp.is_some())
        .bind(form.masp.flatten())
        .bind(id)
        .fetch_optional(db_pool)
        .await
        .map_err(map_write_error)?
        .ok_or(AppError::NotFound(kind.not_found_message()))
}

pub async fn find_by_email(db_pool: &SqlitePool, kind: AccountKind, email: &str) -> AppResult<Option<Account>> {
    tracing::debug!("Buscando conta por email em '{}'", kind.table());
    let sql = format!("SELECT {} FROM {} WHERE email = ?1", ACCOUNT_COLUMNS, kind.table());
    let account = sqlx::query_as::<_, Account>(&sql)
        .bind(email)
        .fetch_optional(db_pool)
        .await?;
    Ok(account)
}

pub async fn find_by_id(db_pool: &SqlitePool, kind: AccountKind, id: i64) -> AppResult<Option<Account>> {
    tracing::debug!("Buscando conta {} em '{}'", id, kind.table());
    let sql = format!("SELECT {} FROM {} WHERE id = ?1", ACCOUNT_COLUMNS, kind.table());
    let account = sqlx::query_as::<_, Account>(&sql)
        .bind(id)
        .fetch_optional(db_pool)
        .await?;
    Ok(account)
}

pub async fn list_all(db_pool: &SqlitePool, kind: AccountKind) -> AppResult<Vec<Account>> {
    let sql = format!("SELECT {} FROM {} ORDER BY id ASC", ACCOUNT_COLUMNS, kind.table());
    let accounts = sqlx::query_as::<_, Account>(&sql).fetch_all(db_pool).await?;
    tracing::debug!("Encontradas {} contas em '{}'.", accounts.len(), kind.table());
    Ok(accounts)
}

/// Devolve `true` se alguma linha foi apagada.
pub async fn delete_by_id(db_pool: &SqlitePool, kind: AccountKind, id: i64) -> AppResult<bool> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", kind.table());
    let rows_affected = sqlx::query(&sql).bind(id).execute(db_pool).await?.rows_affected();
    if rows_affected > 0 {
        tracing::info!("🗑️ Conta {} removida de '{}'.", id, kind.table());
    }
    Ok(rows_affected > 0)
}
