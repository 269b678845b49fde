use crate::{ConfigError, ConfigErrorResult, DEFAULT_MATCH_THRESHOLD, MAX_MATCH_THRESHOLD};

use serde::Deserialize;

/// Face matching settings.
///
/// The threshold is global; the false-accept rate grows with the enrolled
/// population, so tune it for the expected deployment size.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Accept a candidate when its distance is strictly below this value
    pub threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.threshold.is_finite()
            || self.threshold <= 0.0
            || self.threshold > MAX_MATCH_THRESHOLD
        {
            return Err(ConfigError::matcher(format!(
                "matcher.threshold must be in (0, {}], got {}",
                MAX_MATCH_THRESHOLD, self.threshold
            )));
        }

        Ok(())
    }
}
