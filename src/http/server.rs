//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router for each daemon's operational surface
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on an already-bound listener with graceful shutdown
//!
//! The gateway surface exposes the installed route table; the service
//! surface exposes the registered token validation schemes. Neither
//! forwards traffic: proxying is the engine's job, not this core's.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::auth::SchemeRegistry;
use crate::config::schema::ListenerSettings;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::shutdown::Shutdown;
use crate::routing::RouteStore;

/// Operational HTTP server, built after a successful bootstrap.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Gateway surface: liveness plus a JSON view of the installed table.
    pub fn gateway(settings: &ListenerSettings, store: Arc<RouteStore>) -> Self {
        let router = Router::new()
            .route("/healthz", get(healthz))
            .route("/routes", get(installed_routes))
            .with_state(store);

        Self {
            router: with_layers(router, settings),
        }
    }

    /// Service surface: liveness plus the registered validation schemes.
    pub fn service(settings: &ListenerSettings, registry: Arc<SchemeRegistry>) -> Self {
        let router = Router::new()
            .route("/healthz", get(healthz))
            .route("/auth/schemes", get(registered_schemes))
            .with_state(registry);

        Self {
            router: with_layers(router, settings),
        }
    }

    /// Serve until the shutdown signal fires, then drain and return.
    pub async fn run(self, listener: TcpListener, shutdown: &Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let mut rx = shutdown.subscribe();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = rx.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Middleware stack shared by both surfaces. Outermost layer first at
/// runtime: set request ID, trace, propagate the ID to the response,
/// enforce the request timeout.
fn with_layers(router: Router, settings: &ListenerSettings) -> Router {
    router
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.request_timeout_secs,
        )))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn installed_routes(State(store): State<Arc<RouteStore>>) -> Response {
    match store.installed() {
        Some(table) => Json(table.as_ref().clone()).into_response(),
        // Unreachable once bootstrap ordering holds; answered anyway so the
        // handler stays total.
        None => (StatusCode::SERVICE_UNAVAILABLE, "no route table installed").into_response(),
    }
}

#[derive(Debug, Serialize)]
struct SchemesResponse {
    default: &'static str,
    registered: [&'static str; 2],
}

async fn registered_schemes(State(registry): State<Arc<SchemeRegistry>>) -> Json<SchemesResponse> {
    Json(SchemesResponse {
        default: registry.default_scheme().as_str(),
        registered: registry.scheme_names(),
    })
}
