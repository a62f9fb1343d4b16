// src/config.rs
use crate::error::{AppError, AppResult};
use std::env;

const DEFAULT_DB_NAME: &str = "guia_ensino";
pub const DEFAULT_JWT_SECRET: &str = "segredo";
const DEFAULT_PORT: u16 = 4000;

/// Configuração do processo, lida uma vez no arranque e injetada nos
/// construtores (pool da DB, serviço de tokens, router).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    /// Liga o middleware de bearer token nas rotas de gestão.
    pub auth_required: bool,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Constrói a configuração a partir de uma função de leitura de variáveis.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let db_name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
                format!("sqlite://{}.db", db_name)
            }
        };

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("⚠️ JWT_SECRET não definida, usando o segredo padrão!");
            DEFAULT_JWT_SECRET.to_string()
        });

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT inválida '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let auth_required = match lookup("AUTH_REQUIRED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!("AUTH_REQUIRED inválida: '{}'", raw))
            })?,
            None => true,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            auth_required,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> AppResult<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite://guia_ensino.db");
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.port, 4000);
        assert!(config.auth_required);
    }

    #[test]
    fn db_name_feeds_default_url() {
        let config = config_with(&[("DB_NAME", "escola")]).unwrap();
        assert_eq!(config.database_url, "sqlite://escola.db");
    }

    #[test]
    fn reads_overrides() {
        let config = config_with(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "outro"),
            ("PORT", "8080"),
            ("AUTH_REQUIRED", "false"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.jwt_secret, "outro");
        assert_eq!(config.port, 8080);
        assert!(!config.auth_required);
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_with(&[("PORT", "quatro mil")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
