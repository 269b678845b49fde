//! Face login REST API handler

use crate::{ApiResult, AppState, FaceLoginRequest, IdentityDto, LoginResponse};

use fg_core::{AUDIT_TARGET, Descriptor};
use fg_db::IdentityRepository;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

/// POST /api/login/face
///
/// Match a probe descriptor against every enrolled identity and issue a
/// session credential for the nearest one within the threshold.
pub async fn login_face(
    State(state): State<AppState>,
    payload: Result<Json<FaceLoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    state.login_limiter.check().inspect_err(|_| {
        state.metrics.login_throttled();
    })?;

    let Json(request) = payload?;

    // Reject malformed probes before reading the store
    Descriptor::check(&request.descriptor)?;

    let repo = IdentityRepository::new(state.pool.clone());
    let snapshot = repo.find_enrolled().await?;

    let identity = state
        .matcher
        .identify(&snapshot, &request.descriptor)
        .inspect_err(|_| state.metrics.login_rejected())?;

    let session = state.issuer.issue(identity)?;

    state.metrics.login_accepted();
    info!(target: AUDIT_TARGET, "Face login accepted for identity {}", identity.id);

    Ok(Json(LoginResponse {
        token: session.token,
        expires_at: session.expires_at.timestamp(),
        identity: IdentityDto::from(identity),
    }))
}
