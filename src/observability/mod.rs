//! Observability subsystem.
//!
//! Structured logging only. Per-request traces come from `tower_http`'s
//! `TraceLayer` on the HTTP surface; metrics export belongs to an external
//! collaborator.

pub mod logging;

pub use logging::init;
