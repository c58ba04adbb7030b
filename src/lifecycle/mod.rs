//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Gateway startup (startup.rs):
//!     Load config → Compile route table → Install → Bind listener
//!
//! Service startup (startup.rs + migrate.rs):
//!     Load config → Migrate schema (retried) → Register auth schemes → Bind listener
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT → Trigger broadcast → Servers drain → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any bootstrap error is fatal, the process exits non-zero
//!   before accepting a connection
//! - Strictly ordered startup: component work completes before listeners
//!   bind, never concurrently with them
//! - No SIGHUP reload: configuration is bound once and immutable

pub mod migrate;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use migrate::{MigrationCommand, MigrationError};
pub use shutdown::Shutdown;
pub use startup::{install_routes, start_service, StartupError};
