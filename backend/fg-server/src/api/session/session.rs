use crate::{ApiResult, Session, SessionResponse};

use axum::Json;

/// GET /api/session
///
/// Describe the presented credential
pub async fn current_session(session: Session) -> ApiResult<Json<SessionResponse>> {
    let claims = session.claims;

    Ok(Json(SessionResponse {
        id: session.identity_id.to_string(),
        handle: claims.handle,
        email: claims.email,
        issued_at: claims.iat,
        expires_at: claims.exp,
    }))
}
