use crate::{
    AppState, add_points, current_session, get_profile, health, login_face, set_points,
    signup_email, signup_face, update_profile,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Enrollment
        .route("/api/signup/face", post(signup_face))
        .route("/api/signup/email", post(signup_email))
        // Login and session
        .route("/api/login/face", post(login_face))
        .route("/api/session", get(current_session))
        // Profile and points (bearer credential required)
        .route("/api/profile/{id}", get(get_profile).put(update_profile))
        .route("/api/users/{id}/points", put(set_points))
        .route("/api/users/{id}/points/add", post(add_points))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
