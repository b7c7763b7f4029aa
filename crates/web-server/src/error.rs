use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use core_types::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Message returned for any input the extractors could not parse.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data";
/// Message returned for every failure whose cause must stay server-side.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error has occurred";
pub const STORAGE_UNAVAILABLE_MESSAGE: &str = "Error connecting to the database";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(database::DbError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Unexpected failure")]
    Unexpected,
}

/// The JSON envelope of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Converts our custom `AppError` into an HTTP response.
///
/// This is the only place a failure category is mapped to a status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_MESSAGE.to_string())
            }
            AppError::StorageUnavailable(db_err) => {
                tracing::error!(error = ?db_err, "Storage liveness probe failed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    STORAGE_UNAVAILABLE_MESSAGE.to_string(),
                )
            }
            AppError::Io(io_err) => {
                tracing::error!(error = ?io_err, "I/O error.");
                (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_MESSAGE.to_string())
            }
            AppError::Unexpected => {
                (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_MESSAGE.to_string())
            }
            AppError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Request body too large".to_string(),
            ),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::Validation(err.to_string())
    }
}

// Extractor rejections carry field-level detail; it is logged, not returned.
// Oversized bodies keep their 413; everything else is a validation failure.
macro_rules! rejection_into_app_error {
    ($($rejection:ty),+ $(,)?) => {
        $(
            impl From<$rejection> for AppError {
                fn from(rejection: $rejection) -> Self {
                    tracing::debug!(detail = %rejection, "Rejected request input.");
                    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                        AppError::PayloadTooLarge
                    } else {
                        AppError::Validation(INVALID_INPUT_MESSAGE.to_string())
                    }
                }
            }
        )+
    };
}

rejection_into_app_error!(
    JsonRejection,
    QueryRejection,
    PathRejection,
    MultipartRejection,
    MultipartError,
);
