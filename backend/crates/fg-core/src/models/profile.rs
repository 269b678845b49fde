use crate::{AdhdSubtype, AgeGroup};

use serde::{Deserialize, Serialize};

/// Non-biometric profile attributes owned by collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    /// Avatar reference (URL or asset key), empty when unset
    pub avatar: String,
    pub pronouns: String,
    pub age_group: AgeGroup,
    pub adhd_subtype: AdhdSubtype,
}
