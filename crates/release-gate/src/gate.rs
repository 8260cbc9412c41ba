//! Ordered release checks.
//!
//! Checks run in a fixed order and the first failing check decides the
//! outcome. Missing configuration is a hard failure; building from a
//! non-stable toolchain or tagging something that isn't a version is an
//! intentional skip.

use crate::config::{
    GateConfig, DEPLOY_KEY_VAR, DEPLOY_USER_VAR, OS_NAME_VAR, RUST_VERSION_VAR, TAG_VAR,
};
use crate::manifest;
use crate::outcome::Outcome;
use regex::Regex;
use tracing::debug;

/// The only toolchain channel releases are deployed from.
const STABLE_CHANNEL: &str = "stable";

/// Check if a tag has a deployable version shape: `major.minor.patch`
/// with an optional `-` suffix (`1.2.3`, `1.2.3-rc1`).
pub fn is_deployable_tag(tag: &str) -> bool {
    let re = Regex::new(r"^\d+\.\d+\.\d+-?.*$").expect("Failed to compile tag regex");
    re.is_match(tag)
}

/// Run the gate checks against a captured configuration.
///
/// Never touches the process environment and never exits; the caller maps
/// the outcome to an exit code.
pub fn evaluate(config: &GateConfig) -> Outcome {
    let os_name = match &config.os_name {
        Some(value) => value,
        None => {
            return Outcome::Fail(format!(
                "Operating system is unknown ({} not set)",
                OS_NAME_VAR
            ))
        }
    };

    let tag = match &config.tag {
        Some(value) => value,
        None => return Outcome::Fail(format!("Tag version is unknown ({} not set)", TAG_VAR)),
    };

    let rust_version = match &config.rust_version {
        Some(value) => value,
        None => {
            return Outcome::Fail(format!(
                "Rust version is unknown ({} not set)",
                RUST_VERSION_VAR
            ))
        }
    };

    debug!("build environment: {} / {}", os_name, rust_version);

    if rust_version != STABLE_CHANNEL {
        return Outcome::Skip("Not deploying from non-stable Rust".to_string());
    }

    if config.deploy_user.is_none() {
        return Outcome::Fail(format!(
            "Deployment user is unknown ({} not set)",
            DEPLOY_USER_VAR
        ));
    }

    if config.deploy_key.is_none() {
        return Outcome::Fail(format!(
            "Deployment key is unknown ({} not set)",
            DEPLOY_KEY_VAR
        ));
    }

    if !is_deployable_tag(tag) {
        return Outcome::Skip(format!(
            "Ignoring tag '{}' as it isn't a deployable version",
            tag
        ));
    }

    let manifest_version = match manifest::project_version(&config.manifest_path) {
        Ok(version) => version,
        Err(error) => return Outcome::Fail(error.to_string()),
    };

    if *tag != manifest_version {
        return Outcome::Fail(format!(
            "Tag '{}' does not match the version in {} ('{}')",
            tag,
            config.manifest_path.display(),
            manifest_version
        ));
    }

    debug!("tag '{}' matches the manifest version", tag);
    Outcome::Pass
}
