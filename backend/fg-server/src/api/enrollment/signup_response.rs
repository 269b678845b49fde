use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: String,
    pub handle: String,
}
