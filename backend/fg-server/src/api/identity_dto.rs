use fg_core::Identity;

use serde::Serialize;

/// Public view of an identity. Descriptors are never serialized.
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub handle: String,
    pub email: String,
    pub display_name: String,
    pub avatar: String,
    pub pronouns: String,
    pub age_group: String,
    pub adhd_subtype: String,
    pub points: i64,
    pub face_enrolled: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&Identity> for IdentityDto {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            handle: identity.handle.clone(),
            email: identity.email.clone(),
            display_name: identity.profile.display_name.clone(),
            avatar: identity.profile.avatar.clone(),
            pronouns: identity.profile.pronouns.clone(),
            age_group: identity.profile.age_group.as_str().to_string(),
            adhd_subtype: identity.profile.adhd_subtype.as_str().to_string(),
            points: identity.points,
            face_enrolled: identity.is_enrolled(),
            created_at: identity.created_at.timestamp(),
            updated_at: identity.updated_at.timestamp(),
        }
    }
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self::from(&identity)
    }
}
