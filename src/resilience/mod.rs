//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Fallible startup action (e.g. schema migration):
//!     → retries.rs (attempt, wait per schedule entry, re-attempt)
//!     → Ok(value)              on any successful attempt
//!     → Err(RetriesExhausted)  once the schedule runs out
//! ```
//!
//! # Design Decisions
//! - Schedules are fixed and finite; exhaustion is terminal
//! - The wrapped action must be idempotent: every retry re-runs it whole
//! - Uniform failure handling, no per-error classification

pub mod retries;
pub mod schedule;

pub use retries::{run_with_retry, RetriesExhausted};
pub use schedule::RetrySchedule;
