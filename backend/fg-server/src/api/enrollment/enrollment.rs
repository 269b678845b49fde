//! Enrollment REST API handlers

use crate::{
    ApiError, ApiResult, AppState, FaceSignupRequest, SignupDetails, SignupResponse,
};

use fg_core::{DescriptorPolicy, EnrollmentRequest, Identity};
use fg_db::IdentityRepository;

use std::panic::Location;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use error_location::ErrorLocation;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/signup/face
///
/// Enroll a new identity together with its face descriptor
pub async fn signup_face(
    State(state): State<AppState>,
    payload: Result<Json<FaceSignupRequest>, JsonRejection>,
) -> ApiResult<Json<SignupResponse>> {
    let Json(request) = payload?;
    let enrollment = request.details.into_enrollment(request.descriptor);

    enroll(&state, enrollment, DescriptorPolicy::Required, "face").await
}

/// POST /api/signup/email
///
/// Enroll a new identity without a face descriptor
pub async fn signup_email(
    State(state): State<AppState>,
    payload: Result<Json<SignupDetails>, JsonRejection>,
) -> ApiResult<Json<SignupResponse>> {
    let Json(request) = payload?;
    let enrollment = request.into_enrollment(None);

    enroll(&state, enrollment, DescriptorPolicy::Optional, "email").await
}

// =============================================================================
// Helpers
// =============================================================================

/// Validate, check uniqueness, persist. Validation completes before any
/// store access; the store's unique constraints settle concurrent races.
async fn enroll(
    state: &AppState,
    request: EnrollmentRequest,
    policy: DescriptorPolicy,
    kind: &'static str,
) -> ApiResult<Json<SignupResponse>> {
    let new_identity = request.validate(policy).inspect_err(|_| {
        state.metrics.enrollment_rejected("validation");
    })?;

    let repo = IdentityRepository::new(state.pool.clone());

    if let Some(field) = repo
        .find_conflict(&new_identity.handle, &new_identity.email)
        .await?
    {
        state.metrics.enrollment_rejected("conflict");
        return Err(ApiError::Conflict {
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let identity = Identity::new(new_identity);
    repo.create(&identity).await.inspect_err(|e| {
        if matches!(e, fg_db::DbError::Conflict { .. }) {
            state.metrics.enrollment_rejected("conflict");
        }
    })?;

    state.metrics.enrollment_succeeded(kind);
    info!("Enrolled identity {} via {} signup", identity.id, kind);

    Ok(Json(SignupResponse {
        id: identity.id.to_string(),
        handle: identity.handle,
    }))
}
