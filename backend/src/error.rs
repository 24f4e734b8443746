//! Error handling for VCA Paspoort
//!
//! Provides consistent error responses in Dutch and English

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::InvalidCertificateError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_nl: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Invalid certificate: {0}")]
    InvalidCertificate(#[from] InvalidCertificateError),

    #[error("Unrecognized pass: {0}")]
    UnrecognizedPass(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_nl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message, message_nl } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_nl: message_nl.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_nl: format!("{} niet gevonden", resource),
                    field: None,
                },
            ),
            AppError::InvalidCertificate(err) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_CERTIFICATE".to_string(),
                    message_en: err.to_string(),
                    message_nl: match err {
                        InvalidCertificateError::MissingValidUntil => {
                            "Certificaat heeft geen einddatum".to_string()
                        }
                        InvalidCertificateError::MissingValidFrom => {
                            "Certificaat heeft geen begindatum".to_string()
                        }
                        InvalidCertificateError::UnparsableDate { value, .. } => {
                            format!("Ongeldige datum: {:?} (verwacht JJJJ-MM-DD)", value)
                        }
                        InvalidCertificateError::InvalidValidityWindow { .. } => {
                            "Einddatum moet na de begindatum liggen".to_string()
                        }
                    },
                    field: Some(
                        match err {
                            InvalidCertificateError::MissingValidFrom => "valid_from",
                            InvalidCertificateError::UnparsableDate { field, .. } => *field,
                            _ => "valid_until",
                        }
                        .to_string(),
                    ),
                },
            ),
            AppError::UnrecognizedPass(payload) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "UNRECOGNIZED_PASS".to_string(),
                    message_en: format!("Not a VCA pass QR code: {}", payload),
                    message_nl: "Dit is geen VCA Paspoort QR-code.".to_string(),
                    field: Some("payload".to_string()),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_nl: format!("Configuratiefout: {}", msg),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
