//! Fleet service daemon.
//!
//! Runs the schema migration under the bounded retry schedule, registers
//! the token validation schemes, then opens the operational listener. An
//! exhausted schedule exits non-zero with nothing listening.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use gateway_core::config::loader;
use gateway_core::http::HttpServer;
use gateway_core::lifecycle::signals::spawn_signal_listener;
use gateway_core::lifecycle::{start_service, MigrationCommand, Shutdown};
use gateway_core::observability;

#[derive(Parser)]
#[command(name = "service-api")]
#[command(
    about = "Fleet service: migrates the schema, registers auth schemes, serves",
    long_about = None
)]
struct Args {
    /// Path to the TOML settings file.
    #[arg(short, long, default_value = "service.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = loader::load_settings(&args.config)?;
    observability::init(&settings.observability);

    tracing::info!(config = %args.config.display(), "Service starting");

    let command = MigrationCommand::from_settings(&settings.migration)?;
    let registry = start_service(&settings, || command.run()).await?;

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    let listener = TcpListener::bind(&settings.listener.bind_address).await?;
    let server = HttpServer::service(&settings.listener, Arc::new(registry));
    server.run(listener, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
