//! Descriptor capture backed by a JSON file.
//!
//! The file holds a JSON array of numbers. An empty array stands for a
//! capture in which no face was found.

use fg_core::{
    Capture, CoreError, Descriptor, DescriptorSource, ModelLoader, Result as CoreErrorResult,
};

use std::panic::Location;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Reads a descriptor from a JSON file on every capture.
///
/// As a model loader it is ready once the file exists; the contents are
/// read and parsed only by `capture`.
#[derive(Debug, Clone)]
pub struct FileDescriptorSource {
    path: PathBuf,
}

impl FileDescriptorSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_values(&self) -> CoreErrorResult<Vec<f64>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| unavailable(format!("cannot read {}: {}", self.path.display(), e)))?;

        serde_json::from_str(&contents).map_err(|e| {
            unavailable(format!(
                "{} is not a JSON array of numbers: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl ModelLoader for FileDescriptorSource {
    async fn load(&self) -> CoreErrorResult<()> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| unavailable(format!("cannot read {}: {}", self.path.display(), e)))?;

        if !metadata.is_file() {
            return Err(unavailable(format!(
                "{} is not a file",
                self.path.display()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl DescriptorSource for FileDescriptorSource {
    async fn capture(&self) -> CoreErrorResult<Option<Vec<f64>>> {
        let values = self.read_values().await?;
        Ok(if values.is_empty() { None } else { Some(values) })
    }
}

/// Capture one validated descriptor from `path`.
pub async fn read_descriptor_file(path: impl Into<PathBuf>) -> CoreErrorResult<Descriptor> {
    let source = FileDescriptorSource::new(path);
    Capture::new(source.clone(), source).capture().await
}

#[track_caller]
fn unavailable(message: String) -> CoreError {
    CoreError::CaptureUnavailable {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
