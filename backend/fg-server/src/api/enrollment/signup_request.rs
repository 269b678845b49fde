use fg_core::EnrollmentRequest;

use serde::Deserialize;

/// Fields shared by both signup paths. `handle` and `email` default to empty
/// so that a missing value is reported as a field validation error.
#[derive(Debug, Default, Deserialize)]
pub struct SignupDetails {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub email: String,
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

/// POST /api/signup/face body
#[derive(Debug, Deserialize)]
pub struct FaceSignupRequest {
    /// Exactly 128 numbers
    #[serde(default)]
    pub descriptor: Option<Vec<f64>>,
    #[serde(flatten)]
    pub details: SignupDetails,
}

impl SignupDetails {
    pub fn into_enrollment(self, descriptor: Option<Vec<f64>>) -> EnrollmentRequest {
        EnrollmentRequest {
            handle: self.handle,
            email: self.email,
            descriptor,
            display_name: self.display_name,
            avatar: self.avatar,
            pronouns: self.pronouns,
            age_group: self.age_group,
            adhd_subtype: self.adhd_subtype,
        }
    }
}
