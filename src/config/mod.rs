//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks, all errors reported)
//!     → AppSettings (validated, immutable)
//!     → passed by reference to every component that needs it
//! ```
//!
//! # Design Decisions
//! - Settings are bound exactly once at startup; there is no reload path
//! - All sections default so a minimal file configures only what it uses
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AppSettings;
pub use schema::AuthSettings;
pub use schema::MigrationSettings;
pub use schema::RouteDeclaration;
