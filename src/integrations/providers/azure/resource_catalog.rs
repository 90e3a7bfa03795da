use super::interface::AzureInterface;
use crate::integrations::ResourceCatalog;
use crate::models::{NetworkInterface, ResourceDescriptor};

use anyhow::{Error, Result, bail};
use serde_json::Value as JsonValue;
use tracing::{error, info};

/// Extract the core client version from `az version` output.
pub fn parse_cli_version(raw: &str) -> Result<String> {
    let value: JsonValue = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            error!("{:?}", e);
            bail!("Failure parsing Azure CLI version output");
        }
    };

    match value.get("azure-cli").and_then(JsonValue::as_str) {
        Some(version) => Ok(version.to_string()),
        None => bail!("Azure CLI version output has no 'azure-cli' entry"),
    }
}

impl ResourceCatalog for AzureInterface {
    async fn client_version(&self) -> Result<String, Error> {
        let stdout = self.run(&["version", "--output", "json"], false).await?;
        parse_cli_version(&stdout)
    }

    async fn is_authenticated(&self) -> Result<bool, Error> {
        let output = self
            .execute(&["account", "show", "--output", "json"], true)
            .await?;
        if !output.status.success() {
            info!("{}", String::from_utf8_lossy(&output.stderr).trim());
        }
        Ok(output.status.success())
    }

    async fn group_exists(&self, resource_group: &str) -> Result<bool, Error> {
        let stdout = self
            .run(&["group", "exists", "--name", resource_group], true)
            .await?;
        match stdout.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => bail!("Unexpected 'az group exists' output: '{}'", other),
        }
    }

    async fn list_resources(
        &self,
        resource_group: &str,
        type_tag: Option<&str>,
    ) -> Result<Vec<ResourceDescriptor>, Error> {
        let mut args = vec!["resource", "list", "--resource-group", resource_group];
        if let Some(type_tag) = type_tag {
            args.extend(["--resource-type", type_tag]);
        }
        args.extend(["--output", "json"]);
        self.run_json(&args, true).await
    }

    async fn show_network_interface(&self, nic_id: &str) -> Result<NetworkInterface, Error> {
        self.run_json(
            &["network", "nic", "show", "--ids", nic_id, "--output", "json"],
            true,
        )
        .await
    }
}
