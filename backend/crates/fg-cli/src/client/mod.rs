pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, ProfileUpdate, SignupDetails};
pub use error::{ClientError, Result as CliClientResult};
