//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     static base table + RouteDeclaration[]
//!     → compiler.rs (expand declarations, one route per upstream template)
//!     → defaulting pass (blank scheme ← global default,
//!                        blank downstream path ← own upstream template)
//!     → RouteTable (ordered, deterministic)
//!     → store.rs (installed exactly once, read-only afterwards)
//! ```
//!
//! # Design Decisions
//! - Compilation is pure; installation is an explicit, separate step
//! - Output order: base entries first, then declaration order, then
//!   template order
//! - No deduplication: overlapping upstream templates are kept and the
//!   engine's first-match-wins tie-break governs at runtime
//! - A parse failure in any downstream URI fails the whole compilation;
//!   partial tables are never produced

pub mod compiler;
pub mod store;
pub mod table;

pub use compiler::{compile, CompileError, RouteDefaults};
pub use store::{InstallError, RouteStore};
pub use table::{CompiledRoute, HostPort, RouteTable};
