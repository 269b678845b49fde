//! Enrollment validation.
//!
//! Checks run in a fixed order and stop at the first failure: handle,
//! email, descriptor shape, then profile tags. Nothing here touches the
//! store, so a malformed request never costs a database round trip.

use crate::{
    AdhdSubtype, AgeGroup, CoreError, Descriptor, NewIdentity, Profile,
    Result as CoreErrorResult,
};

use std::str::FromStr;

/// Whether an enrollment path demands a face descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorPolicy {
    /// Face signup: a descriptor must be supplied
    Required,
    /// Email signup: a descriptor may be attached but is not needed
    Optional,
}

/// Raw enrollment input as received from a collaborator.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentRequest {
    pub handle: String,
    pub email: String,
    pub descriptor: Option<Vec<f64>>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub pronouns: Option<String>,
    pub age_group: Option<String>,
    pub adhd_subtype: Option<String>,
}

impl EnrollmentRequest {
    #[track_caller]
    pub fn validate(self, policy: DescriptorPolicy) -> CoreErrorResult<NewIdentity> {
        let handle = normalize_handle(&self.handle)?;
        let email = normalize_email(&self.email)?;

        let descriptor = match (self.descriptor, policy) {
            (Some(values), _) => Some(Descriptor::new(values)?),
            (None, DescriptorPolicy::Required) => {
                return Err(CoreError::validation(
                    "descriptor",
                    "descriptor is required for face enrollment",
                ));
            }
            (None, DescriptorPolicy::Optional) => None,
        };

        let age_group = match non_blank(self.age_group) {
            Some(value) => AgeGroup::from_str(value.trim())?,
            None => AgeGroup::default(),
        };
        let adhd_subtype = match non_blank(self.adhd_subtype) {
            Some(value) => AdhdSubtype::from_str(value.trim())?,
            None => AdhdSubtype::default(),
        };

        let display_name = non_blank(self.display_name)
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|| handle.clone());

        Ok(NewIdentity {
            handle,
            email,
            descriptor,
            profile: Profile {
                display_name,
                avatar: self.avatar.unwrap_or_default(),
                pronouns: self.pronouns.unwrap_or_default(),
                age_group,
                adhd_subtype,
            },
        })
    }
}

/// Trim a handle and reject it when nothing is left.
#[track_caller]
pub fn normalize_handle(raw: &str) -> CoreErrorResult<String> {
    let handle = raw.trim();
    if handle.is_empty() {
        return Err(CoreError::validation("handle", "handle cannot be empty"));
    }
    Ok(handle.to_string())
}

/// Trim and lower-case an email; it must be non-empty and contain '@'.
#[track_caller]
pub fn normalize_email(raw: &str) -> CoreErrorResult<String> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(CoreError::validation("email", "email cannot be empty"));
    }
    if !email.contains('@') {
        return Err(CoreError::validation("email", "email must contain '@'"));
    }
    Ok(email.to_lowercase())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
