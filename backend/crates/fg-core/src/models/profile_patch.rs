use crate::{AdhdSubtype, AgeGroup};

/// Partial profile update. `None` fields are left untouched by the store;
/// the descriptor is not part of a patch.
///
/// Values are expected to be normalized already (see `normalize_handle`,
/// `normalize_email`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub handle: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub pronouns: Option<String>,
    pub age_group: Option<AgeGroup>,
    pub adhd_subtype: Option<AdhdSubtype>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.handle.is_none()
            && self.email.is_none()
            && self.display_name.is_none()
            && self.avatar.is_none()
            && self.pronouns.is_none()
            && self.age_group.is_none()
            && self.adhd_subtype.is_none()
    }
}
