pub mod profile;
pub mod profile_response;
pub mod update_profile_request;
