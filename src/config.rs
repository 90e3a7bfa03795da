use crate::errors::PreflightError;

use semver::Version;
use std::env;

pub const DEFAULT_AZ_BIN: &str = "az";
pub const DEFAULT_MIN_AZ_VERSION: &str = "2.50.0";
pub const DEFAULT_LOG_FILE: &str = "resource_group_cleanup.log";

/// Log file path, read separately so logging is up before arguments are parsed.
pub fn log_file_from_env() -> String {
    env::var("RG_CLEANUP_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub az_bin: String,
    pub min_az_version: Version,
    pub log_file: String,
    pub subscription: Option<String>,
    pub dry_run: bool,
}

impl Settings {
    /// Resolve settings from the environment (after `.env` has been loaded).
    pub fn from_env(subscription: Option<String>, dry_run: bool) -> Result<Self, PreflightError> {
        let az_bin = env::var("RG_CLEANUP_AZ_BIN").unwrap_or_else(|_| DEFAULT_AZ_BIN.to_string());
        let log_file = log_file_from_env();
        let raw_version = env::var("RG_CLEANUP_MIN_AZ_VERSION")
            .unwrap_or_else(|_| DEFAULT_MIN_AZ_VERSION.to_string());
        Self::build(az_bin, &raw_version, log_file, subscription, dry_run)
    }

    pub fn build(
        az_bin: String,
        min_az_version: &str,
        log_file: String,
        subscription: Option<String>,
        dry_run: bool,
    ) -> Result<Self, PreflightError> {
        let min_az_version = match Version::parse(min_az_version.trim()) {
            Ok(version) => version,
            Err(e) => {
                return Err(PreflightError::Environment(format!(
                    "invalid minimum CLI version '{}': {}",
                    min_az_version, e
                )));
            }
        };

        Ok(Self {
            az_bin,
            min_az_version,
            log_file,
            subscription: subscription.filter(|value| !value.trim().is_empty()),
            dry_run,
        })
    }
}
