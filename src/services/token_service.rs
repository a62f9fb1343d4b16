// src/services/token_service.rs
use crate::error::AppResult;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Validade de um token de sessão, em segundos.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Identidade embutida no token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
#[error("token inválido ou expirado")]
pub struct InvalidToken;

/// Emite e valida tokens HS256. O segredo é fixo durante a vida do processo.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<str>,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self {
            secret: Arc::from(secret),
        }
    }

    pub fn issue(&self, id: i64, email: &str, tipo: Option<&str>) -> AppResult<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            id,
            email: email.to_string(),
            tipo: tipo.map(str::to_string),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Falha com assinatura errada, payload malformado ou `exp` no passado.
    pub fn verify(&self, token: &str) -> Result<Claims, InvalidToken> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Sem tolerância: o token morre exatamente em `exp`
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!("Token rejeitado: {:?}", e.kind());
            InvalidToken
        })
    }
}
