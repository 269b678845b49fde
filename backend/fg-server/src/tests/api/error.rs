use crate::ApiError;
use crate::api::error::{AUTHENTICATION_FAILED_MESSAGE, INTERNAL_FAILURE_MESSAGE};

use fg_auth::AuthError;
use fg_core::CoreError;
use fg_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(CoreError::validation("descriptor", "wrong length"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "descriptor");
    assert_eq!(json["error"]["message"], "wrong length");
}

#[tokio::test]
async fn test_no_match_and_empty_population_are_indistinguishable() {
    let no_match = ApiError::from(CoreError::NoMatch {
        location: location(),
    });
    let nobody = ApiError::from(CoreError::NoEnrolledIdentities {
        location: location(),
    });

    let (status_a, json_a) = body_json(no_match).await;
    let (status_b, json_b) = body_json(nobody).await;

    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_a, status_b);
    assert_eq!(json_a, json_b);
    assert_eq!(json_a["error"]["code"], "AUTHENTICATION_FAILED");
    assert_eq!(json_a["error"]["message"], AUTHENTICATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_capture_unavailable_and_no_face_map_apart() {
    let unavailable = ApiError::from(CoreError::CaptureUnavailable {
        message: "models missing".to_string(),
        location: location(),
    });
    let no_face = ApiError::from(CoreError::NoFaceDetected {
        location: location(),
    });

    let (status_a, json_a) = body_json(unavailable).await;
    let (status_b, json_b) = body_json(no_face).await;

    assert_eq!(status_a, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_a["error"]["message"], INTERNAL_FAILURE_MESSAGE);
    assert_eq!(status_b, StatusCode::BAD_REQUEST);
    assert_eq!(json_b["error"]["field"], "descriptor");
}

#[tokio::test]
async fn test_db_conflict_returns_409_naming_field() {
    let error = ApiError::from(DbError::Conflict {
        field: "email",
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_storage_failure_returns_fixed_internal_message() {
    let error = ApiError::from(DbError::Corrupt {
        message: "identity 42: bad age_group 'toddler'".to_string(),
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], INTERNAL_FAILURE_MESSAGE);
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_points_underflow_returns_400_on_points() {
    let error = ApiError::from(DbError::PointsUnderflow {
        id: "x".to_string(),
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "points");
}

#[tokio::test]
async fn test_points_overflow_returns_400_on_points() {
    let error = ApiError::from(DbError::PointsOverflow {
        id: "x".to_string(),
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "points");
}

#[tokio::test]
async fn test_auth_errors_return_invalid_credential_without_detail() {
    let expired = ApiError::from(AuthError::TokenExpired {
        location: location(),
    });
    let missing = ApiError::from(AuthError::MissingHeader {
        location: location(),
    });

    let (status_a, json_a) = body_json(expired).await;
    let (status_b, json_b) = body_json(missing).await;

    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_b, StatusCode::UNAUTHORIZED);
    assert_eq!(json_a, json_b);
    assert_eq!(json_a["error"]["code"], "INVALID_CREDENTIAL");
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let error = ApiError::from(AuthError::RateLimitExceeded {
        limit: 30,
        window_secs: 60,
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::Forbidden {
        message: "not yours".into(),
        location: location(),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[test]
fn test_uuid_error_converts_to_bad_request() {
    let uuid_error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();

    let api_error = ApiError::from(uuid_error);

    assert!(matches!(api_error, ApiError::BadRequest { .. }));
}
