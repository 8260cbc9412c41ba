//! Version extraction from the package manifest.
//!
//! The manifest is pattern-matched, not parsed: the gate only needs the
//! first `version = "..."` line.

use crate::error::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Extract the first quoted `version = "..."` value from manifest text.
pub fn extract_version(contents: &str) -> Option<String> {
    let re = Regex::new(r#"version\s*=\s*"([^"]*)""#).expect("Failed to compile version regex");
    re.captures(contents)
        .map(|captures| captures[1].to_string())
}

/// Read the manifest at `path` and extract the project version.
pub fn project_version(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    extract_version(&contents).ok_or_else(|| Error::ManifestVersion {
        path: path.to_path_buf(),
    })
}
