//! Bounded retry sequencing for startup actions.
//!
//! # Responsibilities
//! - Re-invoke a fallible, idempotent startup action from scratch on failure
//! - Wait the next schedule delay between attempts, sequentially
//! - Give up once the schedule is exhausted and surface the final error
//!
//! # Design Decisions
//! - Failure kinds are uniform: no retryable/fatal classification inside
//!   this component; the narrow startup actions it wraps do not need one
//! - Waits happen on the startup task itself; nothing else of the bootstrap
//!   proceeds during a wait and there is no cancellation path short of
//!   killing the process

use std::future::Future;

use thiserror::Error;

use crate::resilience::schedule::RetrySchedule;

/// Terminal failure of a retried action: the schedule was exhausted without
/// a successful attempt.
#[derive(Debug, Error)]
#[error("gave up after {attempts} attempts")]
pub struct RetriesExhausted<E: std::error::Error + 'static> {
    /// Total invocations performed (initial attempt plus retries).
    pub attempts: u32,

    /// The failure of the final attempt.
    #[source]
    pub source: E,
}

/// Run `action` until it succeeds or the schedule is exhausted.
///
/// Every retry re-invokes the whole action from scratch, so the action must
/// be idempotent. The first failure waits the first schedule delay, the
/// second failure the second, and so on; failing once more than there are
/// schedule entries is terminal.
pub async fn run_with_retry<F, Fut, T, E>(
    operation: &str,
    schedule: &RetrySchedule,
    mut action: F,
) -> Result<T, RetriesExhausted<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::error::Error + 'static,
{
    let mut attempt: u32 = 1;
    let mut delays = schedule.delays().iter();

    loop {
        match action().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!(operation, attempt, "Startup action succeeded after retry");
                }
                return Ok(value);
            }
            Err(error) => match delays.next() {
                Some(delay) => {
                    tracing::warn!(
                        operation,
                        attempt,
                        delay = ?delay,
                        error = %error,
                        "Startup action failed, retrying"
                    );
                    tokio::time::sleep(*delay).await;
                    attempt += 1;
                }
                None => {
                    tracing::error!(
                        operation,
                        attempts = attempt,
                        error = %error,
                        "Startup action failed, schedule exhausted"
                    );
                    return Err(RetriesExhausted {
                        attempts: attempt,
                        source: error,
                    });
                }
            },
        }
    }
}
