//! REST API error types
//!
//! Every failure leaves the server as `{"error":{"code","message","field?"}}`.
//! Authentication failures are deliberately indistinguishable from one
//! another, and internal failures carry a fixed message; full details go to
//! the server log only.

use fg_auth::AuthError;
use fg_core::CoreError;
use fg_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const AUTHENTICATION_FAILED_MESSAGE: &str = "Face not recognized";
pub const INVALID_CREDENTIAL_MESSAGE: &str = "Invalid or expired credential";
pub const INTERNAL_FAILURE_MESSAGE: &str = "Internal failure";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name for validation errors and conflicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed request body or path (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Handle or email already taken (409)
    #[error("Conflict on '{field}' {location}")]
    Conflict {
        field: String,
        location: ErrorLocation,
    },

    /// Face login found nobody (401)
    #[error("Authentication failed: {reason} {location}")]
    AuthenticationFailed {
        /// Server-side only
        reason: String,
        location: ErrorLocation,
    },

    /// Missing, malformed or expired session credential (401)
    #[error("Invalid credential: {reason} {location}")]
    InvalidCredential {
        /// Server-side only
        reason: String,
        location: ErrorLocation,
    },

    /// Credential does not grant access to this identity (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Too many login attempts (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        /// Server-side only
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::AuthenticationFailed { .. } | Self::InvalidCredential { .. } => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ApiErrorBody {
        let (code, message, field) = match self {
            Self::Validation { message, field, .. } => ("VALIDATION_ERROR", message, field),
            Self::BadRequest { message, .. } => ("BAD_REQUEST", message, None),
            Self::Conflict { field, .. } => (
                "CONFLICT",
                format!("{} is already taken", field),
                Some(field),
            ),
            Self::AuthenticationFailed { .. } => (
                "AUTHENTICATION_FAILED",
                AUTHENTICATION_FAILED_MESSAGE.to_string(),
                None,
            ),
            Self::InvalidCredential { .. } => (
                "INVALID_CREDENTIAL",
                INVALID_CREDENTIAL_MESSAGE.to_string(),
                None,
            ),
            Self::Forbidden { message, .. } => ("FORBIDDEN", message, None),
            Self::NotFound { message, .. } => ("NOT_FOUND", message, None),
            Self::RateLimited { message, .. } => ("RATE_LIMITED", message, None),
            Self::Internal { .. } => (
                "INTERNAL_ERROR",
                INTERNAL_FAILURE_MESSAGE.to_string(),
                None,
            ),
        };

        ApiErrorBody {
            code: code.to_string(),
            message,
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Full detail with location stays in the server log
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = self.into_body();
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert core errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::Validation { field, message, .. } => ApiError::Validation {
                message,
                field: Some(field.to_string()),
                location,
            },
            CoreError::NoFaceDetected { .. } => ApiError::Validation {
                message: "no face detected".to_string(),
                field: Some("descriptor".to_string()),
                location,
            },
            e if e.is_authentication_failure() => ApiError::AuthenticationFailed {
                reason: e.to_string(),
                location,
            },
            e => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::Conflict { field, .. } => ApiError::Conflict {
                field: field.to_string(),
                location,
            },
            DbError::NotFound { .. } => ApiError::NotFound {
                message: "Identity not found".to_string(),
                location,
            },
            DbError::PointsUnderflow { .. } => ApiError::Validation {
                message: "points cannot go below zero".to_string(),
                field: Some("points".to_string()),
                location,
            },
            DbError::PointsOverflow { .. } => ApiError::Validation {
                message: "points balance is too large".to_string(),
                field: Some("points".to_string()),
                location,
            },
            DbError::Sqlx { .. }
            | DbError::Corrupt { .. }
            | DbError::Migration { .. }
            | DbError::Initialization { .. } => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!(
                    "Too many login attempts: at most {} per {}s",
                    limit, window_secs
                ),
                location,
            },
            e if e.is_credential_failure() => ApiError::InvalidCredential {
                reason: format!("{} ({})", e, e.error_code()),
                location,
            },
            e => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

/// Convert JSON body rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid identity id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
