use crate::config::Settings;
use crate::errors::PreflightError;

use anyhow::{Result, bail};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::process::Output;
use tokio::process::Command;
use tracing::{debug, error};

/// Provider access through the `az` command line client. Every call is a
/// separate process whose JSON output is parsed with serde.
pub struct AzureInterface {
    pub az_path: PathBuf,
    pub subscription: Option<String>,
}

impl AzureInterface {
    /// Locate the client binary on PATH.
    pub fn locate(settings: &Settings) -> Result<Self, PreflightError> {
        let az_path = match which::which(&settings.az_bin) {
            Ok(path) => path,
            Err(e) => {
                return Err(PreflightError::Environment(format!(
                    "Azure CLI '{}' is not installed: {}",
                    settings.az_bin, e
                )));
            }
        };
        debug!("Using Azure CLI at '{}'", az_path.display());

        Ok(Self {
            az_path,
            subscription: settings.subscription.clone(),
        })
    }

    fn command(&self, args: &[&str], scoped: bool) -> Command {
        let mut command = Command::new(&self.az_path);
        command.args(args).arg("--only-show-errors");
        if scoped {
            if let Some(subscription) = &self.subscription {
                command.args(["--subscription", subscription.as_str()]);
            }
        }
        command.kill_on_drop(true);
        command
    }

    /// Run a command and return its raw output; only spawn failures are errors.
    pub async fn execute(&self, args: &[&str], scoped: bool) -> Result<Output> {
        debug!("az {}", args.join(" "));
        match self.command(args, scoped).output().await {
            Ok(output) => Ok(output),
            Err(e) => {
                error!("{:?}", e);
                bail!("Failure executing '{}'", self.az_path.display());
            }
        }
    }

    /// Run a command and return its stdout, failing on a non-zero exit.
    pub async fn run(&self, args: &[&str], scoped: bool) -> Result<String> {
        let output = self.execute(args, scoped).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("{}", stderr.trim());
            bail!("'az {}' exited with {}", args.join(" "), output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub async fn run_json<T: DeserializeOwned>(&self, args: &[&str], scoped: bool) -> Result<T> {
        let stdout = self.run(args, scoped).await?;
        match serde_json::from_str(&stdout) {
            Ok(value) => Ok(value),
            Err(e) => {
                error!("{:?}", e);
                bail!("Failure parsing output of 'az {}'", args.join(" "));
            }
        }
    }
}
