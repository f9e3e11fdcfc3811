// ABOUTME: Entry point for the syncserver binary.
// ABOUTME: Parses CLI arguments, loads configuration, mounts both services, and serves.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use syncserver_gateway::{GatewayBuilder, ServerConfig};
use syncserver_storage::StorageServer;
use syncserver_token::TokenServer;

const DEFAULT_CONFIG_FILE: &str = "/etc/syncserver.toml";

/// Self-hosted sync gateway: the token and storage services behind one listener.
#[derive(Debug, Parser)]
#[command(name = "syncserver", version)]
struct Args {
    /// Path to the gateway configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("syncserver=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args).await {
        tracing::error!("startup failed: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Startup sequence: configuration, mounting, then the listener. Strictly
/// sequential; the first failure aborts the process with nothing half-mounted.
async fn run(args: &Args) -> anyhow::Result<()> {
    let config = ServerConfig::load(&args.config)
        .with_context(|| format!("could not load {}", args.config.display()))?;

    tracing::info!(
        listen_address = %config.listen_address,
        listen_port = config.listen_port,
        public_hostname = %config.public_hostname,
        "configuration loaded"
    );

    let (builder, _token) = GatewayBuilder::new()
        .mount::<TokenServer>("/token", syncserver_token::Config::for_gateway(&config))?;
    let (builder, _storage) = builder
        .mount::<StorageServer>("/storage", syncserver_storage::Config::for_gateway(&config))?;

    let bound = builder
        .build()
        .bind(&config.listen_address, config.listen_port)
        .await?;
    bound.serve().await?;
    Ok(())
}
