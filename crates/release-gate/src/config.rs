//! Environment snapshot consumed by the gate.

use std::env;
use std::path::PathBuf;

/// Variable naming the operating system the build ran on.
pub const OS_NAME_VAR: &str = "TRAVIS_OS_NAME";

/// Variable naming the tag that triggered the build.
pub const TAG_VAR: &str = "TRAVIS_TAG";

/// Variable naming the toolchain channel the build used.
pub const RUST_VERSION_VAR: &str = "TRAVIS_RUST_VERSION";

/// Variable holding the deployment user credential.
pub const DEPLOY_USER_VAR: &str = "BINTRAY_USER";

/// Variable holding the deployment key credential.
pub const DEPLOY_KEY_VAR: &str = "BINTRAY_API_KEY";

/// Snapshot of the signals the gate inspects.
///
/// Captured once at startup so the checks themselves never read the
/// process environment. Absence is significant, so every signal is an
/// `Option`.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Operating system identifier of the build host.
    pub os_name: Option<String>,
    /// Tag that triggered the release build.
    pub tag: Option<String>,
    /// Toolchain channel (stable, beta, nightly, or a pinned version).
    pub rust_version: Option<String>,
    /// Deployment user credential. Presence-checked only, never logged.
    pub deploy_user: Option<String>,
    /// Deployment key credential. Presence-checked only, never logged.
    pub deploy_key: Option<String>,
    /// Package manifest to compare the tag against.
    pub manifest_path: PathBuf,
}

impl GateConfig {
    /// Capture the gate inputs from the process environment.
    pub fn from_env(manifest_path: PathBuf) -> Self {
        Self {
            os_name: env::var(OS_NAME_VAR).ok(),
            tag: env::var(TAG_VAR).ok(),
            rust_version: env::var(RUST_VERSION_VAR).ok(),
            deploy_user: env::var(DEPLOY_USER_VAR).ok(),
            deploy_key: env::var(DEPLOY_KEY_VAR).ok(),
            manifest_path,
        }
    }
}
