//! Entry point for the grubdash API server.

use clap::Parser;
use grubdash::config::AppConfig;
use grubdash::server::ServerBuilder;
use std::path::PathBuf;

/// Command-line arguments for the grubdash server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt().with_env_filter(env_filter).with_target(true).init();

    let config = match &args.config {
        Some(path) => AppConfig::from_yaml_file(path)?,
        None => AppConfig::default_config(),
    };
    tracing::info!(
        dishes = config.seed.dishes.len(),
        orders = config.seed.orders.len(),
        "Loaded configuration"
    );

    let addr = config.bind_address();
    ServerBuilder::new().with_config(config).serve(&addr).await
}
