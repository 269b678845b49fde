use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;

/// Number of dimensions in a face embedding.
pub const DESCRIPTOR_LEN: usize = 128;

/// A face embedding of `DESCRIPTOR_LEN` finite doubles.
///
/// `Debug` prints only the length so descriptors never end up in logs.
#[derive(Clone, PartialEq)]
pub struct Descriptor(Vec<f64>);

impl Descriptor {
    /// Validate and wrap a freshly supplied embedding.
    #[track_caller]
    pub fn new(values: Vec<f64>) -> CoreErrorResult<Self> {
        Self::check(&values)?;
        Ok(Self(values))
    }

    /// Wrap values read back from storage. Length is not re-checked here;
    /// the matcher treats a malformed stored descriptor as infinitely far.
    pub fn from_stored(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Shape check shared by enrollment and login probes.
    #[track_caller]
    pub fn check(values: &[f64]) -> CoreErrorResult<()> {
        if values.len() != DESCRIPTOR_LEN {
            return Err(CoreError::validation(
                "descriptor",
                format!(
                    "descriptor must have exactly {} elements, got {}",
                    DESCRIPTOR_LEN,
                    values.len()
                ),
            ));
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(CoreError::validation(
                "descriptor",
                format!("descriptor element {} is not a finite number", index),
            ));
        }

        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_well_formed(&self) -> bool {
        Self::check(&self.0).is_ok()
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Descriptor(len={})", self.0.len())
    }
}
