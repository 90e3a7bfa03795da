//! In-memory resource group used by the procedure's tests.
//!
//! Models the provider rules that make ordering matter: a public IP cannot be
//! deleted while an interface still references it, and a resource cannot be
//! deleted while something it is attached to still exists.

use crate::integrations::{ResourceCatalog, ResourceGroupManager};
use crate::models::{IpConfiguration, NetworkInterface, ResourceDescriptor, ResourceKind, SubResource};

use anyhow::{Error, Result, bail};
use std::cell::RefCell;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Version,
    Account,
    GroupExists(String),
    List(Option<String>),
    ShowNic(String),
    Detach(String),
    Delete(String),
}

struct FakeResource {
    descriptor: ResourceDescriptor,
    ip_configuration: Option<IpConfiguration>,
    attached_to: Vec<String>,
}

#[derive(Default)]
struct FakeState {
    resources: Vec<FakeResource>,
    calls: Vec<Call>,
    failing_deletes: HashSet<String>,
    failing_detaches: HashSet<String>,
    failing_listings: HashSet<String>,
}

pub struct FakeGroup {
    pub name: String,
    pub exists: bool,
    pub authenticated: bool,
    pub version: String,
    state: RefCell<FakeState>,
}

impl FakeGroup {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            exists: true,
            authenticated: true,
            version: "2.61.0".to_string(),
            state: RefCell::new(FakeState::default()),
        }
    }

    pub fn resource_id(&self, type_tag: &str, name: &str) -> String {
        format!(
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/{}/providers/{}/{}",
            self.name, type_tag, name
        )
    }

    pub fn add(&self, type_tag: &str, name: &str) -> String {
        let id = self.resource_id(type_tag, name);
        self.state.borrow_mut().resources.push(FakeResource {
            descriptor: ResourceDescriptor {
                id: id.clone(),
                name: name.to_string(),
                resource_type: type_tag.to_string(),
                location: "eastus".to_string(),
            },
            ip_configuration: None,
            attached_to: Vec::new(),
        });
        id
    }

    pub fn add_kind(&self, kind: ResourceKind, name: &str) -> String {
        self.add(kind.type_tag(), name)
    }

    /// Adds an interface with one IP configuration, optionally bound to a public IP.
    pub fn add_nic(&self, name: &str, public_ip_id: Option<&str>) -> String {
        let id = self.add_kind(ResourceKind::NetworkInterface, name);
        let mut state = self.state.borrow_mut();
        if let Some(resource) = state.resources.iter_mut().find(|r| r.descriptor.id == id) {
            resource.ip_configuration = Some(IpConfiguration {
                name: "ipconfig1".to_string(),
                public_ip_address: public_ip_id.map(|ip| SubResource { id: ip.to_string() }),
            });
        }
        id
    }

    /// `dependent` cannot be deleted while `owner` exists.
    pub fn attach(&self, dependent: &str, owner: &str) {
        let mut state = self.state.borrow_mut();
        if let Some(resource) = state.resources.iter_mut().find(|r| r.descriptor.id == dependent) {
            resource.attached_to.push(owner.to_string());
        }
    }

    pub fn fail_delete(&self, resource_id: &str) {
        self.state
            .borrow_mut()
            .failing_deletes
            .insert(resource_id.to_string());
    }

    pub fn fail_detach(&self, nic_name: &str) {
        self.state
            .borrow_mut()
            .failing_detaches
            .insert(nic_name.to_string());
    }

    pub fn fail_listing(&self, type_tag: &str) {
        self.state
            .borrow_mut()
            .failing_listings
            .insert(type_tag.to_lowercase());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn remaining_ids(&self) -> Vec<String> {
        self.state
            .borrow()
            .resources
            .iter()
            .map(|r| r.descriptor.id.clone())
            .collect()
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn mutating_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Detach(_) | Call::Delete(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl ResourceCatalog for FakeGroup {
    async fn client_version(&self) -> Result<String, Error> {
        self.record(Call::Version);
        Ok(self.version.clone())
    }

    async fn is_authenticated(&self) -> Result<bool, Error> {
        self.record(Call::Account);
        Ok(self.authenticated)
    }

    async fn group_exists(&self, resource_group: &str) -> Result<bool, Error> {
        self.record(Call::GroupExists(resource_group.to_string()));
        Ok(self.exists && resource_group == self.name)
    }

    async fn list_resources(
        &self,
        _resource_group: &str,
        type_tag: Option<&str>,
    ) -> Result<Vec<ResourceDescriptor>, Error> {
        self.record(Call::List(type_tag.map(str::to_string)));
        let state = self.state.borrow();
        if let Some(type_tag) = type_tag {
            if state.failing_listings.contains(&type_tag.to_lowercase()) {
                bail!("listing '{}' failed", type_tag);
            }
        }

        Ok(state
            .resources
            .iter()
            .filter(|r| match type_tag {
                Some(type_tag) => r.descriptor.resource_type.eq_ignore_ascii_case(type_tag),
                None => true,
            })
            .map(|r| r.descriptor.clone())
            .collect())
    }

    async fn show_network_interface(&self, nic_id: &str) -> Result<NetworkInterface, Error> {
        self.record(Call::ShowNic(nic_id.to_string()));
        let state = self.state.borrow();
        match state.resources.iter().find(|r| r.descriptor.id == nic_id) {
            Some(resource) => Ok(NetworkInterface {
                id: resource.descriptor.id.clone(),
                name: resource.descriptor.name.clone(),
                ip_configurations: resource.ip_configuration.clone().into_iter().collect(),
            }),
            None => bail!("network interface '{}' not found", nic_id),
        }
    }
}

impl ResourceGroupManager for FakeGroup {
    async fn detach_public_ip(
        &self,
        _resource_group: &str,
        nic_name: &str,
        ip_configuration: &str,
    ) -> Result<(), Error> {
        self.record(Call::Detach(nic_name.to_string()));
        let mut state = self.state.borrow_mut();
        if state.failing_detaches.contains(nic_name) {
            bail!("detaching public IP from '{}' failed", nic_name);
        }

        let nic = state.resources.iter_mut().find(|r| {
            r.descriptor.name == nic_name && r.descriptor.resource_type == ResourceKind::NetworkInterface.type_tag()
        });
        match nic.and_then(|r| r.ip_configuration.as_mut()) {
            Some(config) if config.name == ip_configuration => {
                config.public_ip_address = None;
                Ok(())
            }
            _ => bail!("IP configuration '{}' not found on '{}'", ip_configuration, nic_name),
        }
    }

    async fn delete_resource(&self, resource_id: &str) -> Result<(), Error> {
        self.record(Call::Delete(resource_id.to_string()));
        let mut state = self.state.borrow_mut();
        if state.failing_deletes.contains(resource_id) {
            bail!("deleting '{}' failed", resource_id);
        }

        let existing: HashSet<String> = state
            .resources
            .iter()
            .map(|r| r.descriptor.id.clone())
            .collect();
        let bound_ips: HashSet<String> = state
            .resources
            .iter()
            .filter_map(|r| r.ip_configuration.as_ref())
            .filter_map(|config| config.public_ip_address.as_ref())
            .map(|ip| ip.id.clone())
            .collect();

        let Some(position) = state.resources.iter().position(|r| r.descriptor.id == resource_id)
        else {
            bail!("resource '{}' not found", resource_id);
        };
        if bound_ips.contains(resource_id) {
            bail!("public IP '{}' is in use by a network interface", resource_id);
        }
        if let Some(owner) = state.resources[position]
            .attached_to
            .iter()
            .find(|owner| existing.contains(*owner))
        {
            bail!("'{}' is still attached to '{}'", resource_id, owner);
        }

        state.resources.remove(position);
        Ok(())
    }
}
