mod error;
mod update_profile_request;
