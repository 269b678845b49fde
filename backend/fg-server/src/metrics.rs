use metrics::counter;

/// Outcome counters. Never carries identities or distances.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "facegate" }
    }

    /// Record a persisted enrollment (`face` or `email`)
    pub fn enrollment_succeeded(&self, kind: &str) {
        counter!(format!("{}.enrollment.succeeded", self.prefix)).increment(1);
        counter!(format!("{}.enrollment.succeeded.{}", self.prefix, kind)).increment(1);
    }

    /// Record a refused enrollment (`validation` or `conflict`)
    pub fn enrollment_rejected(&self, reason: &str) {
        counter!(format!("{}.enrollment.rejected.{}", self.prefix, reason)).increment(1);
    }

    pub fn login_accepted(&self) {
        counter!(format!("{}.login.accepted", self.prefix)).increment(1);
    }

    pub fn login_rejected(&self) {
        counter!(format!("{}.login.rejected", self.prefix)).increment(1);
    }

    pub fn login_throttled(&self) {
        counter!(format!("{}.login.throttled", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
