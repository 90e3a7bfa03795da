use super::interface::AzureInterface;
use crate::integrations::ResourceGroupManager;

use anyhow::{Error, Result};

impl ResourceGroupManager for AzureInterface {
    async fn detach_public_ip(
        &self,
        resource_group: &str,
        nic_name: &str,
        ip_configuration: &str,
    ) -> Result<(), Error> {
        self.run(
            &[
                "network",
                "nic",
                "ip-config",
                "update",
                "--resource-group",
                resource_group,
                "--nic-name",
                nic_name,
                "--name",
                ip_configuration,
                "--remove",
                "publicIpAddress",
                "--output",
                "none",
            ],
            true,
        )
        .await?;
        Ok(())
    }

    async fn delete_resource(&self, resource_id: &str) -> Result<(), Error> {
        self.run(&["resource", "delete", "--ids", resource_id], true)
            .await?;
        Ok(())
    }
}
