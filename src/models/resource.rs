use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource as reported by the provider's resource listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub location: String,
}

impl ResourceDescriptor {
    pub fn kind(&self) -> Option<ResourceKind> {
        ResourceKind::from_type_tag(&self.resource_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubResource {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpConfiguration {
    pub name: String,
    #[serde(rename = "publicIPAddress", default)]
    pub public_ip_address: Option<SubResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ip_configurations: Vec<IpConfiguration>,
}

impl NetworkInterface {
    pub fn primary_ip_configuration(&self) -> Option<&IpConfiguration> {
        self.ip_configurations.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    VirtualMachine,
    PublicIpAddress,
    NetworkInterface,
    Disk,
    NetworkSecurityGroup,
    LoadBalancer,
    VirtualNetwork,
    StorageAccount,
    KeyVault,
    WebSite,
    WebServerFarm,
    ServiceBusNamespace,
    ConfigurationStore,
    ManagedIdentity,
}

/// Types deleted by the ordered pass, dependents first. Anything not listed
/// here is left to the remainder sweep.
pub const DELETION_ORDER: [ResourceKind; 14] = [
    ResourceKind::VirtualMachine,
    ResourceKind::PublicIpAddress,
    ResourceKind::NetworkInterface,
    ResourceKind::Disk,
    ResourceKind::NetworkSecurityGroup,
    ResourceKind::LoadBalancer,
    ResourceKind::VirtualNetwork,
    ResourceKind::StorageAccount,
    ResourceKind::KeyVault,
    ResourceKind::WebSite,
    ResourceKind::WebServerFarm,
    ResourceKind::ServiceBusNamespace,
    ResourceKind::ConfigurationStore,
    ResourceKind::ManagedIdentity,
];

impl ResourceKind {
    pub fn type_tag(&self) -> &'static str {
        match self {
            ResourceKind::VirtualMachine => "Microsoft.Compute/virtualMachines",
            ResourceKind::PublicIpAddress => "Microsoft.Network/publicIPAddresses",
            ResourceKind::NetworkInterface => "Microsoft.Network/networkInterfaces",
            ResourceKind::Disk => "Microsoft.Compute/disks",
            ResourceKind::NetworkSecurityGroup => "Microsoft.Network/networkSecurityGroups",
            ResourceKind::LoadBalancer => "Microsoft.Network/loadBalancers",
            ResourceKind::VirtualNetwork => "Microsoft.Network/virtualNetworks",
            ResourceKind::StorageAccount => "Microsoft.Storage/storageAccounts",
            ResourceKind::KeyVault => "Microsoft.KeyVault/vaults",
            ResourceKind::WebSite => "Microsoft.Web/sites",
            ResourceKind::WebServerFarm => "Microsoft.Web/serverFarms",
            ResourceKind::ServiceBusNamespace => "Microsoft.ServiceBus/namespaces",
            ResourceKind::ConfigurationStore => "Microsoft.AppConfiguration/configurationStores",
            ResourceKind::ManagedIdentity => "Microsoft.ManagedIdentity/userAssignedIdentities",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::VirtualMachine => "Virtual Machines",
            ResourceKind::PublicIpAddress => "Public IP Addresses",
            ResourceKind::NetworkInterface => "Network Interfaces",
            ResourceKind::Disk => "Disks",
            ResourceKind::NetworkSecurityGroup => "Network Security Groups",
            ResourceKind::LoadBalancer => "Load Balancers",
            ResourceKind::VirtualNetwork => "Virtual Networks",
            ResourceKind::StorageAccount => "Storage Accounts",
            ResourceKind::KeyVault => "Key Vaults",
            ResourceKind::WebSite => "Web Sites",
            ResourceKind::WebServerFarm => "App Service Plans",
            ResourceKind::ServiceBusNamespace => "Service Bus Namespaces",
            ResourceKind::ConfigurationStore => "App Configuration Stores",
            ResourceKind::ManagedIdentity => "Managed Identities",
        }
    }

    /// Provider type tags are case-insensitive.
    pub fn matches(&self, type_tag: &str) -> bool {
        self.type_tag().eq_ignore_ascii_case(type_tag)
    }

    pub fn from_type_tag(type_tag: &str) -> Option<Self> {
        DELETION_ORDER.iter().copied().find(|kind| kind.matches(type_tag))
    }

    /// Position in the ordered deletion pass.
    pub fn priority(&self) -> usize {
        DELETION_ORDER
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(DELETION_ORDER.len())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_tag())
    }
}
