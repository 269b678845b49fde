//! Descriptor capture contract.
//!
//! Embedding extraction lives outside this crate. These traits describe what
//! the core consumes from it, and `CaptureReadiness` replaces a bare
//! "models loaded" flag with an explicit, awaitable state machine.

pub mod capture_state;
pub mod readiness;
pub mod source;

pub use capture_state::CaptureState;
pub use readiness::CaptureReadiness;
pub use source::{Capture, DescriptorSource, ModelLoader};
