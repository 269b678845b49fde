//! Profile REST API handlers
//!
//! Both require a session credential issued to the identity in the path.

use crate::{
    ApiError, ApiResult, AppState, ProfileResponse, Session, UpdateProfileRequest,
};

use fg_db::IdentityRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /api/profile/{id}
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let identity_id = Uuid::parse_str(&id)?;
    session.ensure_owner(identity_id)?;

    let repo = IdentityRepository::new(state.pool.clone());
    let identity = repo
        .find_by_id(identity_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Identity {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ProfileResponse {
        identity: identity.into(),
    }))
}

/// PUT /api/profile/{id}
///
/// Merge the supplied fields into the stored profile
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileResponse>> {
    let identity_id = Uuid::parse_str(&id)?;
    session.ensure_owner(identity_id)?;

    let Json(request) = payload?;
    let patch = request.into_patch()?;

    let repo = IdentityRepository::new(state.pool.clone());

    // Nothing to merge: answer with the stored record and keep updated_at
    let identity = if patch.is_empty() {
        repo.find_by_id(identity_id)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                message: format!("Identity {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            })?
    } else {
        repo.merge_profile(identity_id, &patch).await?
    };

    Ok(Json(ProfileResponse {
        identity: identity.into(),
    }))
}
