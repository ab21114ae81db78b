//! Typed errors and HTTP mapping.

use crate::service::FieldErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(String),
}

/// Failures from the data-access layer. Callers match on the variant to pick a response.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found")]
    RecordNotFound,
    #[error("edit conflict")]
    EditConflict,
    #[error("not implemented")]
    NotImplemented,
    #[error("sort key '{0}' is not in the safelist")]
    UnsafeSort(String),
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
    #[error("{operation} failed (id: {id:?}): {source}")]
    Query {
        operation: &'static str,
        id: Option<i64>,
        #[source]
        source: sqlx::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid input")]
    InvalidInput(FieldErrors),
    #[error("failed validation")]
    FailedValidation(FieldErrors),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

const NOT_FOUND_MESSAGE: &str = "the requested resource could not be found";
const INTERNAL_MESSAGE: &str = "the server encountered a problem and could not process your request";

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(e) => match e {
                StoreError::RecordNotFound => StatusCode::NOT_FOUND,
                StoreError::EditConflict => StatusCode::CONFLICT,
                StoreError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
                StoreError::UnsafeSort(_)
                | StoreError::Timeout { .. }
                | StoreError::Query { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::FailedValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::Store(StoreError::RecordNotFound) | AppError::NotFound(_) => {
                ("not_found", NOT_FOUND_MESSAGE.to_string(), None)
            }
            AppError::Store(StoreError::EditConflict) => (
                "edit_conflict",
                "unable to update the record due to an edit conflict, please try again".to_string(),
                None,
            ),
            AppError::Store(StoreError::NotImplemented) => (
                "not_implemented",
                "this resource is not implemented yet".to_string(),
                None,
            ),
            AppError::BadRequest(msg) => ("bad_request", msg, None),
            AppError::InvalidInput(errors) => (
                "bad_request",
                "invalid request payload".to_string(),
                serde_json::to_value(errors).ok(),
            ),
            AppError::FailedValidation(errors) => (
                "validation_error",
                "one or more fields failed validation".to_string(),
                serde_json::to_value(errors).ok(),
            ),
            other => {
                tracing::error!(error = %other, "request failed");
                ("internal_error", INTERNAL_MESSAGE.to_string(), None)
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}
