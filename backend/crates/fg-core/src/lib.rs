pub mod capture;
pub mod enrollment;
pub mod error;
pub mod matcher;
pub mod models;

pub use capture::{Capture, CaptureReadiness, CaptureState, DescriptorSource, ModelLoader};
pub use enrollment::{DescriptorPolicy, EnrollmentRequest, normalize_email, normalize_handle};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use matcher::{Matcher, euclidean_distance, match_probe};
pub use models::adhd_subtype::AdhdSubtype;
pub use models::age_group::AgeGroup;
pub use models::descriptor::{DESCRIPTOR_LEN, Descriptor};
pub use models::identity::{Identity, NewIdentity};
pub use models::profile::Profile;
pub use models::profile_patch::ProfilePatch;

/// Log target for per-candidate match distances. Routed to the audit sink only.
pub const AUDIT_TARGET: &str = "facegate::audit";

/// Reference acceptance threshold for the Euclidean matcher.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.4;

#[cfg(test)]
mod tests;
