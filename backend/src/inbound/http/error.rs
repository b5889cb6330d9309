//! HTTP adapter mapping for item failures.
//!
//! Purpose: keep [`ItemError`] transport agnostic while giving handlers one
//! error type that renders a consistent JSON body and a status fixed per
//! taxonomy variant.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ItemError;

/// Message returned in place of any 500 cause.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure raised while serving an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The path identifier is not a UUID.
    #[error("malformed item id `{raw}`")]
    MalformedId { raw: String },
    /// The request body is not a JSON object.
    #[error("request body must be a JSON object")]
    MalformedBody,
    /// The service resolved to a taxonomy failure.
    #[error(transparent)]
    Item(#[from] ItemError),
}

impl ApiError {
    /// Construct [`ApiError::MalformedId`].
    pub fn malformed_id(raw: impl Into<String>) -> Self {
        Self::MalformedId { raw: raw.into() }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedId { .. } => "malformed_id",
            Self::MalformedBody => "malformed_body",
            Self::Item(err) => err.code(),
        }
    }
}

/// JSON error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Stable error code, e.g. `item_not_found`.
    pub code: String,
    /// Human-readable description; redacted for server errors.
    pub message: String,
}

fn status_for(err: &ItemError) -> StatusCode {
    match err {
        ItemError::NoRowsUpdated { .. } | ItemError::Conflict { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        ItemError::Database { .. } | ItemError::Unhandled { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ItemError::NotFound { .. } => StatusCode::NOT_FOUND,
        ItemError::MissingRequiredField { .. } => StatusCode::BAD_REQUEST,
    }
}

fn body_for(err: &ApiError, status: StatusCode) -> ErrorBody {
    let message = if status.is_server_error() {
        error!(code = err.code(), error = %err, "request failed");
        REDACTED_MESSAGE.to_owned()
    } else {
        err.to_string()
    };
    ErrorBody {
        code: err.code().to_owned(),
        message,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedId { .. } | Self::MalformedBody => StatusCode::BAD_REQUEST,
            Self::Item(err) => status_for(err),
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(body_for(self, status))
    }
}

#[cfg(test)]
mod tests;
