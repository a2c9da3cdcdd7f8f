use thiserror::Error;

use crate::validation::ValidationErrors;

/// Application-wide error types for the flota API.
///
/// User-facing messages are carried verbatim (in Spanish) so the HTTP
/// layer can surface them without rewording.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing, malformed, or expired credentials/token.
    #[error("{0}")]
    Authentication(String),

    /// Valid identity lacking the required role.
    #[error("{0}")]
    Authorization(String),

    /// One or more field-level violations.
    #[error("{message}")]
    Validation {
        message: String,
        detalles: ValidationErrors,
    },

    /// Referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Missing or invalid configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Build a validation error from an accumulated field/message map.
    pub fn validation(message: impl Into<String>, detalles: ValidationErrors) -> Self {
        AppError::Validation {
            message: message.into(),
            detalles,
        }
    }
}
