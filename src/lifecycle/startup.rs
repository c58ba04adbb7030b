//! Startup orchestration.
//!
//! Both daemons bootstrap fail-fast and strictly in order: configuration
//! first, then the component work (route compilation, schema migration),
//! listeners last. Any error here exits the process before a single
//! connection is accepted.

use std::future::Future;

use thiserror::Error;
use tracing::info;

use crate::auth::SchemeRegistry;
use crate::config::loader::ConfigError;
use crate::config::schema::AppSettings;
use crate::lifecycle::migrate::MigrationError;
use crate::resilience::{run_with_retry, RetriesExhausted, RetrySchedule};
use crate::routing::{compile, CompileError, InstallError, RouteDefaults, RouteStore};

/// Fatal bootstrap failure. Every variant terminates the process before a
/// listener binds.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("route table installation failed: {0}")]
    Install(#[from] InstallError),

    #[error("schema migration failed: {0}")]
    Migration(#[from] RetriesExhausted<MigrationError>),
}

/// Gateway bootstrap step: compile the route table from settings and
/// install it into the engine's store.
///
/// On a compile error nothing is installed; the gateway never serves with
/// a partial table.
pub fn install_routes(settings: &AppSettings, store: &RouteStore) -> Result<(), StartupError> {
    let defaults = RouteDefaults::new(&settings.gateway.default_downstream_scheme);
    let table = compile(
        &settings.gateway.static_routes,
        &settings.gateway.routes,
        &defaults,
    )?;

    let total = table.len();
    store.install(table)?;
    info!(
        base = settings.gateway.static_routes.len(),
        declared = settings.gateway.routes.len(),
        routes = total,
        "Route table installed"
    );
    Ok(())
}

/// Service bootstrap step: run the schema migration under the configured
/// retry schedule, then register the token validation schemes.
///
/// The migration action is re-invoked in full on every attempt, so it must
/// be idempotent. Waits happen inline on the startup task; nothing else of
/// the bootstrap proceeds during a wait.
pub async fn start_service<F, Fut>(
    settings: &AppSettings,
    migration: F,
) -> Result<SchemeRegistry, StartupError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), MigrationError>>,
{
    let schedule = RetrySchedule::from_settings(&settings.migration);
    run_with_retry("schema migration", &schedule, migration).await?;
    info!("Schema migration complete");

    let registry = SchemeRegistry::from_settings(&settings.auth);
    info!(
        default_scheme = %registry.default_scheme(),
        "Token validation schemes registered"
    );
    Ok(registry)
}
