//! Service bootstrap end-to-end: migration retries, then the auth surface.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use serde_json::Value;

use gateway_core::config::schema::AppSettings;
use gateway_core::http::HttpServer;
use gateway_core::lifecycle::{
    start_service, MigrationCommand, MigrationError, Shutdown, StartupError,
};

mod common;

fn service_settings(provider: &str) -> AppSettings {
    let mut settings = AppSettings::default();
    // Zero-length waits keep the tests fast; attempt counting is what the
    // assertions care about.
    settings.migration.retry_delays_secs = vec![0, 0];
    settings.auth.provider = provider.to_string();
    settings
}

#[tokio::test]
async fn flaky_migration_retries_then_serves() {
    let settings = service_settings("Standard");
    let calls = AtomicU32::new(0);

    let registry = start_service(&settings, || {
        let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if attempt < 3 {
                Err(MigrationError::CommandFailed {
                    program: "migrate".to_string(),
                    code: Some(1),
                })
            } else {
                Ok(())
            }
        }
    })
    .await
    .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 3);

    let shutdown = Shutdown::new();
    let addr = common::serve(
        HttpServer::service(&settings.listener, Arc::new(registry)),
        &shutdown,
    )
    .await;

    let res = common::client()
        .get(format!("http://{addr}/auth/schemes"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["default"], "Bearer");
    assert_eq!(body["registered"], serde_json::json!(["Bearer", "OpenIddict"]));

    shutdown.trigger();
}

#[tokio::test]
async fn exhausted_schedule_is_fatal_before_any_listener() {
    let settings = service_settings("Standard");
    let calls = AtomicU32::new(0);

    let err = start_service(&settings, || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err::<(), _>(MigrationError::NoCommand) }
    })
    .await
    .unwrap_err();

    // Initial attempt plus one retry per schedule entry.
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    match err {
        StartupError::Migration(exhausted) => assert_eq!(exhausted.attempts, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn openiddict_provider_is_reported_as_default() {
    let settings = service_settings("OpenIddict");
    let registry = start_service(&settings, || async { Ok(()) }).await.unwrap();

    let shutdown = Shutdown::new();
    let addr = common::serve(
        HttpServer::service(&settings.listener, Arc::new(registry)),
        &shutdown,
    )
    .await;

    let body: Value = common::client()
        .get(format!("http://{addr}/auth/schemes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["default"], "OpenIddict");
    assert_eq!(body["registered"], serde_json::json!(["Bearer", "OpenIddict"]));

    shutdown.trigger();
}

#[tokio::test]
async fn real_migration_command_runs_under_the_sequencer() {
    let mut settings = service_settings("Standard");
    settings.migration.command = vec!["true".to_string()];

    let command = MigrationCommand::from_settings(&settings.migration).unwrap();
    let registry = start_service(&settings, || command.run()).await.unwrap();

    assert_eq!(registry.default_scheme().as_str(), "Bearer");
}
