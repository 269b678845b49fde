//! Nearest-neighbour face matching.
//!
//! The matcher is a pure read-reduce over a snapshot of identities. It holds
//! no locks and never mutates, so concurrent logins can run it in parallel
//! against whatever snapshot each one read.
//!
//! Cost is O(N * D) per probe. There is no spatial index; large populations
//! need one, and a single global threshold also lets the false-accept rate
//! grow with N.

use crate::{AUDIT_TARGET, CoreError, Descriptor, Identity, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;

/// Euclidean distance between two embeddings.
///
/// Mismatched lengths yield `+inf` rather than an error.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }

    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    let distance = sum.sqrt();

    if distance.is_nan() {
        f64::INFINITY
    } else {
        distance
    }
}

/// Find the enrolled identity closest to `probe`.
///
/// Ties on distance go to the smallest identity id. A candidate is accepted
/// only when its distance is strictly below `threshold`. The returned value
/// carries no distance; per-candidate distances go to the audit target only.
#[track_caller]
pub fn match_probe<'a>(
    snapshot: &'a [Identity],
    probe: &[f64],
    threshold: f64,
) -> CoreErrorResult<&'a Identity> {
    Descriptor::check(probe)?;

    let mut best: Option<(&Identity, f64)> = None;

    for identity in snapshot {
        let Some(stored) = identity.descriptor.as_ref() else {
            continue;
        };

        let distance = if stored.is_well_formed() {
            euclidean_distance(probe, stored.as_slice())
        } else {
            f64::INFINITY
        };
        debug!(
            target: AUDIT_TARGET,
            "candidate={} distance={:.6}", identity.id, distance
        );

        best = match best {
            Some((current, current_distance))
                if current_distance < distance
                    || (current_distance == distance && current.id < identity.id) =>
            {
                Some((current, current_distance))
            }
            _ => Some((identity, distance)),
        };
    }

    let Some((identity, distance)) = best else {
        return Err(CoreError::NoEnrolledIdentities {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    if distance < threshold {
        debug!(
            target: AUDIT_TARGET,
            "accepted candidate={} distance={:.6} threshold={}", identity.id, distance, threshold
        );
        Ok(identity)
    } else {
        debug!(
            target: AUDIT_TARGET,
            "rejected nearest candidate={} distance={:.6} threshold={}",
            identity.id,
            distance,
            threshold
        );
        Err(CoreError::NoMatch {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Matcher bound to a configured acceptance threshold.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    threshold: f64,
}

impl Matcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[track_caller]
    pub fn identify<'a>(
        &self,
        snapshot: &'a [Identity],
        probe: &[f64],
    ) -> CoreErrorResult<&'a Identity> {
        match_probe(snapshot, probe, self.threshold)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(crate::DEFAULT_MATCH_THRESHOLD)
    }
}
