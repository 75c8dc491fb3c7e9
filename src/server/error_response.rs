//! Error responses of the dashboard API
//!
//! Selection problems stay inside the session: the state is left unchanged
//! and the client receives a structured 4xx body.

use crate::domain::config_types::MaxSessions;
use crate::domain::selection::InvalidSelectionError;
use crate::domain::session::SessionId;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Failures a handler can report
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    #[error("session limit of {0} reached")]
    SessionLimitReached(MaxSessions),

    #[error(transparent)]
    InvalidSelection(#[from] InvalidSelectionError),

    #[error("invalid session id: {0}")]
    InvalidSessionId(#[from] PathRejection),

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::SessionNotFound(_) => "SESSION_NOT_FOUND",
            ApiError::SessionLimitReached(_) => "SESSION_LIMIT_REACHED",
            ApiError::InvalidSelection(InvalidSelectionError::UnknownDisease(_)) => {
                "UNKNOWN_DISEASE"
            }
            ApiError::InvalidSelection(InvalidSelectionError::UnknownMetric(_)) => "UNKNOWN_METRIC",
            ApiError::InvalidSelection(InvalidSelectionError::MetricNotInDisease { .. }) => {
                "METRIC_NOT_IN_DISEASE"
            }
            ApiError::InvalidSessionId(_) => "INVALID_SESSION_ID",
            ApiError::InvalidBody(_) => "INVALID_REQUEST_BODY",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::SessionLimitReached(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InvalidSelection(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidSessionId(rejection) => rejection.status(),
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.code(), self.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_response())).into_response()
    }
}
