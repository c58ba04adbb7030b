//! Gateway daemon.
//!
//! Compiles the route table from configuration, installs it into the
//! engine's store, then opens the operational listener. Order is strict:
//! a compile or install failure exits non-zero before any socket binds.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use gateway_core::config::loader;
use gateway_core::http::HttpServer;
use gateway_core::lifecycle::signals::spawn_signal_listener;
use gateway_core::lifecycle::{install_routes, Shutdown};
use gateway_core::observability;
use gateway_core::routing::RouteStore;

#[derive(Parser)]
#[command(name = "gateway-core")]
#[command(about = "Fleet gateway: compiles and serves the route table", long_about = None)]
struct Args {
    /// Path to the TOML settings file.
    #[arg(short, long, default_value = "gateway.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = loader::load_settings(&args.config)?;
    observability::init(&settings.observability);

    tracing::info!(config = %args.config.display(), "Gateway starting");

    let store = Arc::new(RouteStore::new());
    install_routes(&settings, &store)?;

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    let listener = TcpListener::bind(&settings.listener.bind_address).await?;
    let server = HttpServer::gateway(&settings.listener, store);
    server.run(listener, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
