//! Shared fixtures for the bootstrap integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use gateway_core::config::schema::{AppSettings, RouteDeclaration};
use gateway_core::http::HttpServer;
use gateway_core::lifecycle::Shutdown;

/// Settings with the two-template ads declaration used across the gateway
/// tests.
#[allow(dead_code)]
pub fn ads_settings() -> AppSettings {
    let mut settings = AppSettings::default();
    settings.gateway.default_downstream_scheme = "http".to_string();
    settings.gateway.routes.push(RouteDeclaration {
        key: "ads".to_string(),
        downstream: "http://ads-host:8080".to_string(),
        upstream_path_templates: vec!["/ads/{id}".to_string(), "/ads".to_string()],
    });
    settings
}

/// Bind port 0 and serve in the background; returns the bound address.
pub async fn serve(server: HttpServer, shutdown: &Shutdown) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        let _ = server.run(listener, &shutdown).await;
    });

    addr
}

/// Non-pooled client so closed listeners surface as connection errors.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
