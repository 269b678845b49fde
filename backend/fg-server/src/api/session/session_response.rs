use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub handle: String,
    pub email: String,
    pub issued_at: i64,
    pub expires_at: i64,
}
