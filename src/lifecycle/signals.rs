//! OS signal handling.
//!
//! Translates SIGINT (Ctrl-C) and SIGTERM into a [`Shutdown`] trigger so
//! both daemons drain gracefully under an orchestrator's stop. SIGHUP is
//! deliberately not handled: configuration is bound once at startup and
//! never reloaded, so there is nothing for it to do.

use tracing::{error, info};

use crate::lifecycle::shutdown::Shutdown;

/// Spawn the background task that waits for a termination signal and
/// triggers shutdown. Called once per daemon, after a successful bootstrap.
pub fn spawn_signal_listener(shutdown: Shutdown) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(()) => info!("Termination signal received"),
            // A broken signal handler must not leave the process undrainable.
            Err(err) => error!(error = %err, "Signal handler failed"),
        }
        shutdown.trigger();
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = sigterm.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
