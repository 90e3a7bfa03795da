use crate::models::{NetworkInterface, ResourceDescriptor};

use anyhow::{Error, Result};

/// Read-side calls against the provider. None of these mutate anything.
pub trait ResourceCatalog {
    /// Version string reported by the installed client, e.g. "2.61.0".
    async fn client_version(&self) -> Result<String, Error>;

    async fn is_authenticated(&self) -> Result<bool, Error>;

    async fn group_exists(&self, resource_group: &str) -> Result<bool, Error>;

    /// Lists resources in the group, optionally filtered by type tag.
    async fn list_resources(
        &self,
        resource_group: &str,
        type_tag: Option<&str>,
    ) -> Result<Vec<ResourceDescriptor>, Error>;

    async fn show_network_interface(&self, nic_id: &str) -> Result<NetworkInterface, Error>;
}

/// Mutating calls. Each one is a single blocking round-trip to the provider.
pub trait ResourceGroupManager: ResourceCatalog {
    async fn detach_public_ip(
        &self,
        resource_group: &str,
        nic_name: &str,
        ip_configuration: &str,
    ) -> Result<(), Error>;

    async fn delete_resource(&self, resource_id: &str) -> Result<(), Error>;
}
