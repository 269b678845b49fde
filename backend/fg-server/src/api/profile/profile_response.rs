use crate::IdentityDto;

use serde::Serialize;

/// Single identity response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub identity: IdentityDto,
}
