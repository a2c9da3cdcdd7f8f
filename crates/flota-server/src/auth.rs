//! Authorization gate for protected routes.
//!
//! The middleware authenticates the request (valid, unexpired bearer
//! token) and exposes the claims as a [`Session`] request extension.
//! Whether a specific operation additionally requires the admin claim is
//! decided by the handler itself — reads are open to any session,
//! mutations on users and vehiculos require admin.

use std::sync::Arc;

use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use flota_core::AppError;

use crate::error::ApiError;
use crate::jwt;
use crate::state::AppState;

pub const MSG_FALTA_TOKEN: &str = "Falta el token de autenticación";

/// Authenticated identity for the current request.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub administrador: bool,
}

/// Middleware that validates `Authorization: Bearer <token>` and inserts
/// a [`Session`] extension. The handler is not invoked on failure.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let bearer = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "));

    let claims = match bearer {
        Some(token) => jwt::parse(token, &state.jwt_secret),
        None => Err(AppError::Authentication(MSG_FALTA_TOKEN.into())),
    };

    match claims {
        Ok(claims) => {
            request.extensions_mut().insert(Session {
                username: claims.sub,
                administrador: claims.administrador,
            });
            next.run(request).await
        }
        Err(err) => ApiError(err).into_response(),
    }
}
