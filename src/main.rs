// ./src/main.rs

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use node_preflight::logging::init_tracing;
use node_preflight::{
    measure_capacity, payout_network, validate, CapacityReport, LocalDisk, NodeConfig,
    ValidationError,
};
use serde::Serialize;
use tracing::debug;

/// Checks a storage node configuration before the node is started.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    /// Overrides `payment_address` from the file
    #[arg(long)]
    payment_address: Option<String>,

    /// Overrides `storage_path` from the file
    #[arg(long)]
    storage_path: Option<PathBuf>,

    /// Overrides `storage_allocation` from the file
    #[arg(long)]
    storage_allocation: Option<String>,

    /// Only run the format checks, without measuring the disk
    #[arg(long)]
    skip_allocation: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. "debug"; defaults to RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn node_config(&self) -> Result<NodeConfig> {
        let mut config = match (
            &self.payment_address,
            &self.storage_path,
            &self.storage_allocation,
        ) {
            (Some(address), Some(path), Some(allocation)) => {
                NodeConfig::new(address.clone(), path.clone(), allocation.clone())
            }
            _ => NodeConfig::load(&self.config)
                .with_context(|| format!("Cannot load {}", self.config.display()))?,
        };

        if let Some(address) = &self.payment_address {
            config.payment_address = address.clone();
        }
        if let Some(path) = &self.storage_path {
            config.storage_path = path.clone();
        }
        if let Some(allocation) = &self.storage_allocation {
            config.storage_allocation = allocation.clone();
        }
        Ok(config)
    }
}

#[derive(Serialize)]
struct Outcome {
    ok: bool,
    network: Option<String>,
    capacity: Option<CapacityReport>,
    error: Option<String>,
}

async fn check(
    config: &NodeConfig,
    skip_allocation: bool,
) -> (Option<CapacityReport>, Option<ValidationError>) {
    if let Err(e) = validate(config) {
        return (None, Some(e));
    }
    if skip_allocation {
        return (None, None);
    }

    match measure_capacity(config, &LocalDisk).await {
        Ok(report) if report.fits() => (Some(report), None),
        Ok(report) => (Some(report), Some(ValidationError::InsufficientCapacity)),
        Err(e) => (None, Some(e)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = cli.node_config()?;
    debug!(?config, "Loaded configuration");
    let (capacity, failure) = check(&config, cli.skip_allocation).await;

    let outcome = Outcome {
        ok: failure.is_none(),
        network: payout_network(&config.payment_address).map(|n| n.to_string()),
        capacity,
        error: failure.as_ref().map(ToString::to_string),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if let Some(report) = &outcome.capacity {
        println!(
            "requested {} bytes, free {} bytes, used {} bytes, available {} bytes",
            report.requested, report.free_space, report.used, report.available
        );
    }

    if let Some(e) = failure {
        debug!(config_error = e.is_config_error(), "Pre-flight check failed");
        if !cli.json {
            eprintln!("{}", e);
        }
        process::exit(if e.is_config_error() { 1 } else { 2 });
    }

    if !cli.json {
        println!("Configuration OK");
    }
    Ok(())
}
