use std::collections::HashSet;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Per-run accumulator for everything the provider rejected. Entries are only
/// appended after a negative result from a call that was actually issued.
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub disassociation_failures: Vec<String>,
    pub deletion_failures: Vec<String>,
    pub enumeration_failures: Vec<String>,
    attempted: HashSet<String>,
    deleted: usize,
}

impl CleanupReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an identifier as attempted. Returns false if it already was.
    pub fn begin_attempt(&mut self, resource_id: &str) -> bool {
        self.attempted.insert(resource_id.to_lowercase())
    }

    pub fn record_deleted(&mut self) {
        self.deleted += 1;
    }

    pub fn record_disassociation_failure(&mut self, nic_id: &str) {
        self.disassociation_failures.push(nic_id.to_string());
    }

    pub fn record_deletion_failure(&mut self, resource_id: &str) {
        self.deletion_failures.push(resource_id.to_string());
    }

    pub fn record_enumeration_failure(&mut self, scope: &str) {
        self.enumeration_failures.push(scope.to_string());
    }

    pub fn attempted_count(&self) -> usize {
        self.attempted.len()
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted
    }

    pub fn has_failures(&self) -> bool {
        !self.disassociation_failures.is_empty()
            || !self.deletion_failures.is_empty()
            || !self.enumeration_failures.is_empty()
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.has_failures() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }

    /// Logs the summary and every failed identifier grouped by category.
    pub fn log_summary(&self) -> ExitStatus {
        info!(
            "Attempted {} deletion(s): {} succeeded, {} failed",
            self.attempted_count(),
            self.deleted_count(),
            self.deletion_failures.len()
        );
        self.log_failures()
    }

    pub fn log_dry_run_summary(&self) -> ExitStatus {
        info!(
            "Dry run complete: {} resource(s) would be deleted",
            self.attempted_count()
        );
        self.log_failures()
    }

    fn log_failures(&self) -> ExitStatus {
        if !self.has_failures() {
            info!("All resources processed successfully");
        }

        if !self.disassociation_failures.is_empty() {
            error!("Failed to disassociate public IPs from the following network interfaces:");
            for nic_id in &self.disassociation_failures {
                error!("  {}", nic_id);
            }
        }
        if !self.deletion_failures.is_empty() {
            error!("Failed to delete the following resources:");
            for resource_id in &self.deletion_failures {
                error!("  {}", resource_id);
            }
        }
        if !self.enumeration_failures.is_empty() {
            error!("Failed to list resources for:");
            for scope in &self.enumeration_failures {
                error!("  {}", scope);
            }
        }

        self.exit_status()
    }
}
