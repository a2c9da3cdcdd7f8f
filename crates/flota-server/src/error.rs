use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use flota_core::AppError;

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::Validation { message, detalles } => {
                let body = json!({ "error": message, "detalles": detalles });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            AppError::Authentication(mensaje) => {
                let body = json!({ "Mensaje": mensaje });
                (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
            }
            AppError::Authorization(mensaje) => {
                let body = json!({ "Mensaje": mensaje });
                (StatusCode::FORBIDDEN, axum::Json(body)).into_response()
            }
            AppError::NotFound(mensaje) => {
                let body = json!({ "error": mensaje });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            err @ AppError::Serialization(_) => {
                let body = ErrorResponse {
                    error: "serialization_error".to_string(),
                    message: err.to_string(),
                };
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            err => {
                let error_type = match &err {
                    AppError::Database(_) => "database_error",
                    AppError::Config(_) => "config_error",
                    _ => "internal_error",
                };
                let body = ErrorResponse {
                    error: error_type.to_string(),
                    message: err.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
