//! Unified error handling
//!
//! The application exposes a closed taxonomy of four failure kinds, each with
//! a stable machine-readable tag and an HTTP status:
//!
//! | Variant | Tag | Status |
//! |---------|-----|--------|
//! | `Validation` | `VALIDATION_ERROR` | 400 |
//! | `NotFound` | `NOT_FOUND_ERROR` | 404 |
//! | `Database` | `DATABASE_ERROR` | 500 |
//! | `Unauthorized` | `UNAUTHORIZED_ERROR` | 401 |
//!
//! Failures classified deeper in the call chain keep their classification all
//! the way to the response. Storage-layer details are logged and never exposed
//! to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error de validación: {0}")]
    Validation(String),

    #[error("No encontrado: {0}")]
    NotFound(String),

    #[error("Error de base de datos: {0}")]
    Database(String),

    // Reserved for future auth support, no current operation produces it
    #[error("No autorizado: {0}")]
    Unauthorized(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        AppError::Database(msg.into())
    }

    /// Stable machine-readable tag for the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

// Repository failures keep their classification end-to-end
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
            RepoError::Unauthorized(msg) => AppError::Unauthorized(msg),
        }
    }
}

/// Failure response body: `{ "error": <tag>, "message": <string> }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Database(detail) => {
                // Storage details stay in the log, not in the response
                error!(target: "database", error = %detail, "Fallo en la capa de almacenamiento");
                "Error en la base de datos".to_string()
            }
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg) => msg.clone(),
        };

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message,
        });

        (self.status(), body).into_response()
    }
}

/// Application-level Result type, used in HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

/// Success response envelope: `{ "success": true, "data": ..., "message": ... }`
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> AppResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: message.into(),
        })
    }
}

impl AppResponse<()> {
    /// Success envelope without a data payload
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            message: message.into(),
        })
    }
}
