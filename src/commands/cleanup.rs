use crate::commands::preflight;
use crate::config::Settings;
use crate::integrations::ResourceGroupManager;
use crate::models::{CleanupReport, DELETION_ORDER, ExitStatus, ResourceKind};
use crate::utils;

use tracing::{error, info};

/// Remove every resource in `resource_group` and report what could not be removed.
pub async fn cleanup<M: ResourceGroupManager>(
    manager: &M,
    resource_group: &str,
    settings: &Settings,
) -> ExitStatus {
    if let Err(e) = preflight(manager, resource_group, &settings.min_az_version).await {
        error!("{}", e);
        return ExitStatus::Failure;
    }

    let status = match clean_resource_group(manager, resource_group, settings.dry_run).await {
        CleanupOutcome::NothingToClean => return ExitStatus::Success,
        CleanupOutcome::EnumerationFailed => ExitStatus::Failure,
        CleanupOutcome::Completed(report) if settings.dry_run => report.log_dry_run_summary(),
        CleanupOutcome::Completed(report) => report.log_summary(),
    };

    log_remaining_resources(manager, resource_group).await;
    status
}

#[derive(Debug)]
pub enum CleanupOutcome {
    NothingToClean,
    EnumerationFailed,
    Completed(CleanupReport),
}

/// Run the detach, ordered delete and remainder sweep steps.
pub async fn clean_resource_group<M: ResourceGroupManager>(
    manager: &M,
    resource_group: &str,
    dry_run: bool,
) -> CleanupOutcome {
    let resources = match manager.list_resources(resource_group, None).await {
        Ok(resources) => resources,
        Err(e) => {
            error!("Failed to list resources in '{}': {:#}", resource_group, e);
            return CleanupOutcome::EnumerationFailed;
        }
    };

    if resources.is_empty() {
        info!(
            "No resources found in resource group '{}', nothing to clean up",
            resource_group
        );
        return CleanupOutcome::NothingToClean;
    }

    info!(
        "Found {} resource(s) in resource group '{}':\n{}",
        resources.len(),
        resource_group,
        utils::resource_table(&resources)
    );

    let mut report = CleanupReport::new();

    detach_public_ips(manager, resource_group, dry_run, &mut report).await;

    for kind in DELETION_ORDER {
        delete_resources(manager, resource_group, Some(kind), dry_run, &mut report).await;
    }

    info!("Sweeping remaining resources...");
    delete_resources(manager, resource_group, None, dry_run, &mut report).await;

    CleanupOutcome::Completed(report)
}

async fn detach_public_ips<M: ResourceGroupManager>(
    manager: &M,
    resource_group: &str,
    dry_run: bool,
    report: &mut CleanupReport,
) {
    let type_tag = ResourceKind::NetworkInterface.type_tag();
    let nics = match manager.list_resources(resource_group, Some(type_tag)).await {
        Ok(nics) => nics,
        Err(e) => {
            error!("Failed to list network interfaces: {:#}", e);
            report.record_enumeration_failure(type_tag);
            return;
        }
    };

    for nic in nics {
        let interface = match manager.show_network_interface(&nic.id).await {
            Ok(interface) => interface,
            Err(e) => {
                error!("Failed to resolve network interface '{}': {:#}", nic.id, e);
                report.record_disassociation_failure(&nic.id);
                continue;
            }
        };

        let ip_configuration = match interface.primary_ip_configuration() {
            Some(ip_configuration) => ip_configuration,
            None => {
                info!("Network interface '{}' has no IP configuration", interface.name);
                continue;
            }
        };

        if ip_configuration.public_ip_address.is_none() {
            info!(
                "No public IP bound to network interface '{}' ({})",
                interface.name, ip_configuration.name
            );
            continue;
        }

        if dry_run {
            info!(
                "[dry-run] Would disassociate public IP from network interface '{}' ({})",
                interface.name, ip_configuration.name
            );
            continue;
        }

        info!(
            "Disassociating public IP from network interface '{}' ({})",
            interface.name, ip_configuration.name
        );
        match manager
            .detach_public_ip(resource_group, &interface.name, &ip_configuration.name)
            .await
        {
            Ok(()) => info!("Disassociated public IP from '{}'", interface.name),
            Err(e) => {
                error!(
                    "Failed to disassociate public IP from '{}': {:#}",
                    interface.name, e
                );
                report.record_disassociation_failure(&nic.id);
            }
        }
    }
}

/// Delete everything of one kind, or everything left when `kind` is `None`.
/// Identifiers already attempted in this run are skipped.
async fn delete_resources<M: ResourceGroupManager>(
    manager: &M,
    resource_group: &str,
    kind: Option<ResourceKind>,
    dry_run: bool,
    report: &mut CleanupReport,
) {
    let type_tag = kind.map(|kind| kind.type_tag());
    let label = kind.map_or("remaining resources", |kind| kind.label());

    let resources = match manager.list_resources(resource_group, type_tag).await {
        Ok(resources) => resources,
        Err(e) => {
            error!("Failed to list {}: {:#}", label, e);
            report.record_enumeration_failure(type_tag.unwrap_or("remaining resources"));
            return;
        }
    };

    // Marks each identifier as attempted; the sweep drops what the ordered pass tried.
    let pending: Vec<_> = resources
        .into_iter()
        .filter(|resource| report.begin_attempt(&resource.id))
        .collect();

    if pending.is_empty() {
        info!("No {} found in resource group '{}'", label, resource_group);
        return;
    }

    info!("Deleting {} {}...", pending.len(), label);
    for resource in pending {
        if dry_run {
            info!("[dry-run] Would delete resource: {}", resource.id);
            continue;
        }

        info!("Deleting resource: {}", resource.id);
        match manager.delete_resource(&resource.id).await {
            Ok(()) => {
                info!("Deleted '{}'", resource.name);
                report.record_deleted();
            }
            Err(e) => {
                error!("Failed to delete resource '{}': {:#}", resource.id, e);
                report.record_deletion_failure(&resource.id);
            }
        }
    }
}

/// Informational only; never changes the exit status.
async fn log_remaining_resources<M: ResourceGroupManager>(manager: &M, resource_group: &str) {
    match manager.list_resources(resource_group, None).await {
        Ok(resources) if resources.is_empty() => {
            info!("Resource group '{}' is now empty", resource_group);
        }
        Ok(resources) => {
            info!(
                "{} resource(s) remaining in '{}':\n{}",
                resources.len(),
                resource_group,
                utils::resource_table(&resources)
            );
        }
        Err(e) => error!("Failed to list remaining resources: {:#}", e),
    }
}
