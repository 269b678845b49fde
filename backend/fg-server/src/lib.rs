pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    enrollment::{
        enrollment::{signup_email, signup_face},
        signup_request::{FaceSignupRequest, SignupDetails},
        signup_response::SignupResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::session::Session,
    identity_dto::IdentityDto,
    login::{login::login_face, login_request::FaceLoginRequest, login_response::LoginResponse},
    points::{
        points::{add_points, set_points},
        points_request::PointsRequest,
        points_response::PointsResponse,
    },
    profile::{
        profile::{get_profile, update_profile},
        profile_response::ProfileResponse,
        update_profile_request::UpdateProfileRequest,
    },
    session::{session::current_session, session_response::SessionResponse},
};
pub use app_state::AppState;
pub use crate::metrics::Metrics;

pub use crate::routes::build_router;
