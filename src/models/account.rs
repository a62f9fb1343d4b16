// src/models/account.rs
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// As duas tabelas de contas têm a mesma forma; o tipo escolhe qual usar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Usuario,
    Professor,
}

impl AccountKind {
    pub fn table(self) -> &'static str {
        match self {
            AccountKind::Usuario => "users",
            AccountKind::Professor => "professores",
        }
    }

    /// Marca de papel gravada no token (`tipo`). Utilizadores comuns não têm.
    pub fn role(self) -> Option<&'static str> {
        match self {
            AccountKind::Usuario => None,
            AccountKind::Professor => Some("professor"),
        }
    }

    pub fn not_found_message(self) -> &'static str {
        match self {
            AccountKind::Usuario => "Usuário não encontrado",
            AccountKind::Professor => "Professor não encontrado",
        }
    }
}

// Representa uma conta lida de 'users' ou 'professores'
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Account {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub masp: Option<String>,
    // Hash bcrypt. Nunca sai nas respostas.
    #[sqlx(rename = "senha")]
    #[serde(skip_serializing)]
    pub password_hash: String,
}

// Corpo de /register, /register_adm, /professores
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountForm {
    #[serde(alias = "name")]
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    // `None`: campo ausente; `Some(None)`: `"masp": null` explícito
    #[serde(default, deserialize_with = "campo_presente")]
    pub masp: Option<Option<String>>,
}

fn campo_presente<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// Corpo de /login e /login_professor
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
