use crate::{CaptureReadiness, CoreError, Descriptor, Result as CoreErrorResult};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Loads whatever the capture pipeline needs before it can produce embeddings.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    async fn load(&self) -> CoreErrorResult<()>;
}

/// Produces raw embeddings. `Ok(None)` means no face was found.
#[async_trait]
pub trait DescriptorSource: Send + Sync {
    async fn capture(&self) -> CoreErrorResult<Option<Vec<f64>>>;
}

/// A descriptor source gated on model readiness.
pub struct Capture<L, S> {
    readiness: CaptureReadiness<L>,
    source: S,
}

impl<L: ModelLoader, S: DescriptorSource> Capture<L, S> {
    pub fn new(loader: L, source: S) -> Self {
        Self {
            readiness: CaptureReadiness::new(loader),
            source,
        }
    }

    pub fn readiness(&self) -> &CaptureReadiness<L> {
        &self.readiness
    }

    /// Ensure models are loaded, capture once, and check the result shape.
    pub async fn capture(&self) -> CoreErrorResult<Descriptor> {
        self.readiness.ensure_ready().await?;

        let values = self
            .source
            .capture()
            .await?
            .ok_or_else(|| CoreError::NoFaceDetected {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Descriptor::new(values)
    }
}
