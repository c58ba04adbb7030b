//! Startup core for a gateway-fronted microservice fleet.
//!
//! # Architecture Overview
//!
//! ```text
//! gateway process:
//!     config file (TOML)
//!         → config::loader (bind once, validate)
//!         → routing::compiler (declarations → compiled route table)
//!         → routing::store (installed exactly once)
//!         → http::HttpServer (listener opens, table is read-only)
//!
//! fleet service process:
//!     config file (TOML)
//!         → config::loader
//!         → resilience::retries (schema migration, bounded schedule)
//!         → auth::SchemeRegistry (default scheme selected, both kept)
//!         → http::HttpServer (listener opens)
//! ```
//!
//! Any failure before the listener opens aborts the process with a non-zero
//! exit status; no partial route table is ever installed and no traffic is
//! served against an un-migrated store.

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;

// Startup sequencing
pub mod auth;
pub mod lifecycle;
pub mod resilience;

// Cross-cutting concerns
pub mod observability;

pub use config::schema::AppSettings;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
