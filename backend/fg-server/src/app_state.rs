use crate::Metrics;

use fg_auth::{JwtValidator, LoginRateLimiter, SessionIssuer};
use fg_core::Matcher;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub matcher: Matcher,
    pub issuer: Arc<SessionIssuer>,
    pub validator: Arc<JwtValidator>,
    pub login_limiter: Arc<LoginRateLimiter>,
    pub metrics: Metrics,
}
