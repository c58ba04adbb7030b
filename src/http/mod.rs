//! Operational HTTP surface.
//!
//! # Data Flow
//! ```text
//! bootstrap succeeds
//!        |
//!        v
//! HttpServer::gateway / HttpServer::service
//!        |
//!        v
//! axum Router + middleware (request ID, trace, timeout)
//!        |
//!        v
//! axum::serve on a pre-bound TcpListener, draining on Shutdown
//! ```
//!
//! # Design Decisions
//! - Listeners bind in the binaries, not here, so a bootstrap failure can
//!   never race with an accepting socket and tests can bind port 0
//! - Read-only surface: the handlers expose bootstrap artifacts (route
//!   table, scheme registry) and never mutate them

pub mod request;
pub mod server;

pub use server::HttpServer;
