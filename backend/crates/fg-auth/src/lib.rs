pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod login_rate_limiter;
pub mod rate_limit_config;
pub mod session_issuer;

pub use bearer::extract_bearer;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use login_rate_limiter::LoginRateLimiter;
pub use rate_limit_config::RateLimitConfig;
pub use session_issuer::{SESSION_TTL_SECS, SessionIssuer, SessionToken};

#[cfg(test)]
mod tests;
