//! API errors and their HTTP status mapping

use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Error category; decides the HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No such task or route (404)
    NotFound,
    /// Malformed body or invalid field value (400)
    BadRequest,
    /// Persistence failed (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status code
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Error returned by every handler
#[derive(Debug, Clone, Error)]
#[error("{}: {message}", .code.as_str())]
pub struct ApiError {
    /// Category
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl ApiError {
    /// Unknown task id
    #[must_use]
    pub fn task_not_found(id: &str) -> Self {
        Self::not_found(format!("Task '{id}' not found"))
    }

    /// 404 with a custom message
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// 400 with a custom message
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    /// 500 with a custom message
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }

    /// HTTP status code
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        log::error!("store failure: {err}");
        Self::internal(err.to_string())
    }
}

/// Error body inside the response envelope
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Code string (`NOT_FOUND`, ...)
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str(),
            message: err.message.clone(),
        }
    }
}
