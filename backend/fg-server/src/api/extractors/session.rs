//! Axum extractor for bearer-authenticated requests

use crate::{ApiError, ApiResult, AppState};

use fg_auth::{Claims, extract_bearer};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// A verified session credential taken from `Authorization: Bearer <token>`.
///
/// Rejects with `INVALID_CREDENTIAL` when the header is missing, uses
/// another scheme, or the token fails verification.
pub struct Session {
    pub claims: Claims,
    pub identity_id: Uuid,
}

impl Session {
    /// Allow access only to the identity the credential was issued to
    #[track_caller]
    pub fn ensure_owner(&self, id: Uuid) -> ApiResult<()> {
        if self.identity_id != id {
            return Err(ApiError::Forbidden {
                message: "Credential does not grant access to this identity".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = extract_bearer(header)?;
            let claims = state.validator.validate(token)?;
            let identity_id = claims.subject_id()?;

            log::debug!("Authenticated request for identity {}", identity_id);

            Ok(Session {
                claims,
                identity_id,
            })
        }
    }
}
