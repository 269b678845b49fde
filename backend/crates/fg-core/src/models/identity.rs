//! Identity record - the unit of enrollment and matching.

use crate::{Descriptor, Profile};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An enrolled identity.
///
/// `handle` and `email` are unique across all records; the store enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    /// Trimmed handle
    pub handle: String,
    /// Trimmed, lower-cased email
    pub email: String,
    /// Face embedding, absent for email-only signups
    #[serde(skip)]
    pub descriptor: Option<Descriptor>,
    pub profile: Profile,
    /// Gamification points, never negative
    pub points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated enrollment, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIdentity {
    pub handle: String,
    pub email: String,
    pub descriptor: Option<Descriptor>,
    pub profile: Profile,
}

impl Identity {
    /// Create a new identity with default values
    pub fn new(new: NewIdentity) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            handle: new.handle,
            email: new.email,
            descriptor: new.descriptor,
            profile: new.profile,
            points: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this identity can take part in face login
    pub fn is_enrolled(&self) -> bool {
        self.descriptor.is_some()
    }
}
