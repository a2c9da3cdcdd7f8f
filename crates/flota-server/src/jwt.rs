//! Session token issuing and parsing.
//!
//! Tokens are HS256 JWTs carrying the subject username and an admin
//! claim, valid for 60 minutes from issuance. The parser enforces both
//! signature integrity and expiry: a well-signed token past its `exp`
//! is an authentication failure like any other.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flota_core::AppError;

/// Session token lifetime.
pub const TOKEN_TTL_MINUTES: i64 = 60;

pub const MSG_TOKEN_EXPIRADO: &str = "El token ha expirado";
pub const MSG_TOKEN_INVALIDO: &str = "Token inválido";

/// JWT payload for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the authenticated username.
    pub sub: String,
    /// Admin claim, trusted for the token's lifetime. Revoking a user's
    /// admin status does not invalidate tokens already issued (accepted
    /// staleness window).
    pub administrador: bool,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiry (Unix timestamp).
    pub exp: i64,
    /// Token id.
    pub jti: String,
}

impl Claims {
    pub fn new(username: impl Into<String>, administrador: bool, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: username.into(),
            administrador,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(ttl_minutes)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Mint a signed session token for a verified user.
pub fn issue(username: &str, administrador: bool, secret: &str) -> Result<String, AppError> {
    let claims = Claims::new(username, administrador, TOKEN_TTL_MINUTES);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Generic(format!("Token encoding failed: {e}")))
}

/// Verify signature and expiry of an inbound token, yielding its claims.
///
/// Any failure — bad signature, malformed input, expired token — maps to
/// [`AppError::Authentication`].
pub fn parse(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Authentication(MSG_TOKEN_EXPIRADO.into())
        }
        _ => AppError::Authentication(MSG_TOKEN_INVALIDO.into()),
    })
}
