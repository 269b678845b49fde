//! Points ledger REST API handlers

use crate::{ApiResult, AppState, PointsRequest, PointsResponse, Session};

use fg_core::CoreError;
use fg_db::IdentityRepository;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

/// PUT /api/users/{id}/points
///
/// Replace the balance; negative balances are refused
pub async fn set_points(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<PointsRequest>, JsonRejection>,
) -> ApiResult<Json<PointsResponse>> {
    let identity_id = Uuid::parse_str(&id)?;
    session.ensure_owner(identity_id)?;

    let Json(request) = payload?;
    if request.points < 0 {
        return Err(CoreError::validation("points", "points cannot be negative").into());
    }

    let repo = IdentityRepository::new(state.pool.clone());
    let points = repo.set_points(identity_id, request.points).await?;

    Ok(Json(PointsResponse { id, points }))
}

/// POST /api/users/{id}/points/add
///
/// Atomically add a signed delta; a result below zero is refused
pub async fn add_points(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<PointsRequest>, JsonRejection>,
) -> ApiResult<Json<PointsResponse>> {
    let identity_id = Uuid::parse_str(&id)?;
    session.ensure_owner(identity_id)?;

    let Json(request) = payload?;

    let repo = IdentityRepository::new(state.pool.clone());
    let points = repo.add_points(identity_id, request.points).await?;

    Ok(Json(PointsResponse { id, points }))
}
