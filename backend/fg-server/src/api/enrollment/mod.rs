pub mod enrollment;
pub mod signup_request;
pub mod signup_response;
