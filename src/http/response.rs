//! Response envelope and client-facing errors.
//!
//! # Responsibilities
//! - Wrap successful payloads as `{success: true, data, message?}`
//! - Map failures to `{success: false, error, code?}` with a 4xx status
//!
//! # Design Decisions
//! - Payloads are serialized inside the handler, so handlers can return
//!   data borrowed from the dataset without cloning
//! - Error codes are stable strings that clients match on

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Failure response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

/// Errors a handler can report to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("University not found")]
    UniversityNotFound,

    #[error("Faculty not found")]
    FacultyNotFound,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Invalid university type")]
    InvalidType,

    #[error("Invalid region")]
    InvalidRegion,

    /// Malformed search body; the detail is logged, not returned.
    #[error("Invalid request body")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UniversityNotFound | ApiError::FacultyNotFound | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::InvalidType | ApiError::InvalidRegion | ApiError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::UniversityNotFound | ApiError::FacultyNotFound | ApiError::RouteNotFound => {
                "NOT_FOUND"
            }
            ApiError::InvalidType => "INVALID_TYPE",
            ApiError::InvalidRegion => "INVALID_REGION",
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidRequest(detail) => {
                tracing::warn!(code = self.code(), detail = %detail, "Rejected request");
            }
            _ => tracing::debug!(code = self.code(), error = %self, "Request failed"),
        }

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
            code: Some(self.code()),
        };
        (self.status(), Json(body)).into_response()
    }
}
