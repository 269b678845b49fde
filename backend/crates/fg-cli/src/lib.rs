//! fg-cli library
//!
//! Exports the HTTP client and the file-backed descriptor source for use in
//! the `facegate` binary and in tests.

pub(crate) mod client;
pub(crate) mod file_descriptor_source;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, ProfileUpdate, SignupDetails};
pub use file_descriptor_source::{FileDescriptorSource, read_descriptor_file};
