//! NetBox provider binary
//!
//! - `schema`: print the provider, resource and data-source schemas as JSON
//! - `check`: configure from `NETBOX_HOST`/`NETBOX_TOKEN` and validate the
//!   connection and token against NetBox
//!
//! Logs go to stderr; stdout carries only command output.

use anyhow::Context;
use clap::{Parser, Subcommand};
use terraform_provider_netbox::{AttributeMap, NetBoxProvider};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "terraform-provider-netbox")]
#[command(about = "NetBox provider: manage NetBox objects as resources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every schema as JSON
    Schema {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Check connectivity and the API token
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let provider = NetBoxProvider::new();

    match cli.command {
        Commands::Schema { pretty } => {
            let schemas = provider.schemas();
            let output = if pretty {
                serde_json::to_string_pretty(&schemas)?
            } else {
                serde_json::to_string(&schemas)?
            };
            println!("{}", output);
        }
        Commands::Check => check(provider).await?,
    }

    Ok(())
}

/// Configure from the environment and hit the status endpoint
async fn check(mut provider: NetBoxProvider) -> anyhow::Result<()> {
    provider
        .configure(AttributeMap::new())
        .context("Provider configuration failed; set NETBOX_HOST (and NETBOX_TOKEN)")?;
    let client = provider.client()?;

    info!("Validating NetBox token and connectivity for {}", client.base_url());
    if let Err(e) = client.validate_token().await {
        error!("Failed to validate NetBox connection: {}", e);
        error!("Please check:");
        error!("  1. NetBox is reachable at {}", client.base_url());
        error!("  2. The API token is valid and has the required permissions");
        return Err(e).context("NetBox check failed");
    }
    info!("NetBox connection and token validated successfully");
    Ok(())
}
