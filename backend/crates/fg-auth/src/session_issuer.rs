use crate::{AuthError, Claims, Result as AuthErrorResult};

use fg_core::Identity;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

/// Lifetime of an issued session credential (24 hours)
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// A signed bearer credential and when it stops being accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs HS256 session credentials. Sessions are stateless; nothing is
/// persisted and there is no revocation.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
}

impl SessionIssuer {
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<SessionToken> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue with an explicit issue time
    #[track_caller]
    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> AuthErrorResult<SessionToken> {
        let iat = issued_at.timestamp();
        let exp = iat + SESSION_TTL_SECS;
        let claims = Claims {
            sub: identity.id.to_string(),
            handle: identity.handle.clone(),
            email: identity.email.clone(),
            iat,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let expires_at =
            DateTime::from_timestamp(exp, 0).ok_or_else(|| AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: format!("expiry {} out of range", exp),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(SessionToken { token, expires_at })
    }
}
