//! Fixed retry schedules.

use std::time::Duration;

use crate::config::schema::MigrationSettings;

/// An ordered, fixed sequence of wait durations consumed strictly in order.
/// Exhausting the schedule without a successful attempt is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrySchedule {
    delays: Vec<Duration>,
}

impl RetrySchedule {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    pub fn from_secs(secs: &[u64]) -> Self {
        Self {
            delays: secs.iter().map(|s| Duration::from_secs(*s)).collect(),
        }
    }

    pub fn from_settings(settings: &MigrationSettings) -> Self {
        Self::from_secs(&settings.retry_delays_secs)
    }

    /// The waits between attempts, in consumption order.
    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    /// Total invocations before giving up: the initial attempt plus one
    /// retry per schedule entry.
    pub fn max_attempts(&self) -> u32 {
        self.delays.len() as u32 + 1
    }
}

impl Default for RetrySchedule {
    /// The fleet's standard startup schedule: 10s, 20s, 30s.
    fn default() -> Self {
        Self::from_secs(&[10, 20, 30])
    }
}
