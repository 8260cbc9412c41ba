//! Release gate - pre-deploy consistency checks for CI pipelines.

pub mod config;
pub mod error;
pub mod gate;
pub mod manifest;
pub mod outcome;

pub use error::{Error, Result};
pub use outcome::Outcome;
