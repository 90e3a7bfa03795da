use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

mod commands;
mod config;
mod errors;
mod integrations;
mod models;
mod utils;

use config::Settings;
use integrations::providers::azure::AzureInterface;

/// Delete every resource in an Azure resource group, detaching public IPs
/// and removing dependents before the resources they depend on.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name of the resource group to empty
    #[arg(value_name = "RESOURCE_GROUP")]
    resource_group: String,

    /// Subscription to operate on instead of the CLI's default
    #[arg(long, env = "AZURE_SUBSCRIPTION_ID")]
    subscription: Option<String>,

    /// Log what would be detached and deleted without changing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Read environment variables
    dotenvy::dotenv().ok();

    // Setup logging first so argument errors are logged too
    if let Err(e) = utils::init_logging(&config::log_file_from_env()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    // Usage errors exit with 1, help and version output with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            error!("Usage error: {}", e.to_string().trim_end());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let settings = match Settings::from_env(cli.subscription, cli.dry_run) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let azure = match AzureInterface::locate(&settings) {
        Ok(azure) => azure,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Starting cleanup of resource group '{}'{}",
        cli.resource_group,
        if settings.dry_run { " (dry run)" } else { "" }
    );

    commands::cleanup(&azure, &cli.resource_group, &settings)
        .await
        .into()
}
