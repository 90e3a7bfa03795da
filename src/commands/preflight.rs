use crate::errors::PreflightError;
use crate::integrations::ResourceCatalog;

use semver::Version;
use tracing::info;

/// Validate everything a run depends on. No mutating call is made here.
pub async fn preflight<C: ResourceCatalog>(
    catalog: &C,
    resource_group: &str,
    min_version: &Version,
) -> Result<(), PreflightError> {
    if resource_group.trim().is_empty() {
        return Err(PreflightError::Usage(
            "a resource group name is required".to_string(),
        ));
    }

    match catalog.is_authenticated().await {
        Ok(true) => {}
        Ok(false) => {
            return Err(PreflightError::Environment(
                "Azure CLI is not authenticated, run 'az login' first".to_string(),
            ));
        }
        Err(e) => {
            return Err(PreflightError::Environment(format!(
                "unable to query the current Azure account: {:#}",
                e
            )));
        }
    }

    let raw_version = match catalog.client_version().await {
        Ok(version) => version,
        Err(e) => {
            return Err(PreflightError::Environment(format!(
                "unable to determine the Azure CLI version: {:#}",
                e
            )));
        }
    };
    let version = match Version::parse(raw_version.trim()) {
        Ok(version) => version,
        Err(e) => {
            return Err(PreflightError::Environment(format!(
                "unrecognised Azure CLI version '{}': {}",
                raw_version, e
            )));
        }
    };
    if version < *min_version {
        return Err(PreflightError::Environment(format!(
            "Azure CLI version {} is older than the required {}",
            version, min_version
        )));
    }
    info!("Azure CLI version {} detected", version);

    match catalog.group_exists(resource_group).await {
        Ok(true) => {
            info!("Resource group '{}' found", resource_group);
            Ok(())
        }
        Ok(false) => Err(PreflightError::NotFound(format!(
            "resource group '{}' does not exist",
            resource_group
        ))),
        Err(e) => Err(PreflightError::Environment(format!(
            "unable to check resource group '{}': {:#}",
            resource_group, e
        ))),
    }
}
