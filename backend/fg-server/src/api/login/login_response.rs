use crate::IdentityDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Unix timestamp after which the token is rejected
    pub expires_at: i64,
    pub identity: IdentityDto,
}
