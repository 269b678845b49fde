pub mod points;
pub mod points_request;
pub mod points_response;
