use fg_core::{
    AdhdSubtype, AgeGroup, ProfilePatch, Result as CoreErrorResult, normalize_email,
    normalize_handle,
};

use std::str::FromStr;

use serde::Deserialize;

/// PUT /api/profile/{id} body. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub pronouns: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub adhd_subtype: Option<String>,
}

impl UpdateProfileRequest {
    /// Normalize the supplied fields under the same rules as enrollment
    #[track_caller]
    pub fn into_patch(self) -> CoreErrorResult<ProfilePatch> {
        Ok(ProfilePatch {
            handle: self.handle.as_deref().map(normalize_handle).transpose()?,
            email: self.email.as_deref().map(normalize_email).transpose()?,
            display_name: self.display_name.map(|name| name.trim().to_string()),
            avatar: self.avatar,
            pronouns: self.pronouns,
            age_group: self
                .age_group
                .as_deref()
                .map(|value| AgeGroup::from_str(value.trim()))
                .transpose()?,
            adhd_subtype: self
                .adhd_subtype
                .as_deref()
                .map(|value| AdhdSubtype::from_str(value.trim()))
                .transpose()?,
        })
    }
}
