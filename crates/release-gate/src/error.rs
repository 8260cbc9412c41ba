//! Error types for the release gate.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for gate operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't get project version from {}", path.display())]
    ManifestVersion { path: PathBuf },
}

/// Result type alias using the gate Error.
pub type Result<T> = std::result::Result<T, Error>;
