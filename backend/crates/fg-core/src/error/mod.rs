use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("No enrolled identities to match against {location}")]
    NoEnrolledIdentities { location: ErrorLocation },

    #[error("No enrolled identity within the acceptance threshold {location}")]
    NoMatch { location: ErrorLocation },

    #[error("No face detected in capture {location}")]
    NoFaceDetected { location: ErrorLocation },

    #[error("Capture models unavailable: {message} {location}")]
    CaptureUnavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for the two matcher outcomes that must reach callers as one
    /// indistinguishable authentication failure.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            CoreError::NoEnrolledIdentities { .. } | CoreError::NoMatch { .. }
        )
    }
}

pub type Result<T> = StdResult<T, CoreError>;
