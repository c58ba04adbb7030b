//! Schema migration execution.
//!
//! The migrator itself is an external collaborator; this core only knows
//! how to invoke it as a child process and interpret the exit status. The
//! command must be idempotent because the startup sequencer re-runs it in
//! full on every retry attempt.

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::config::schema::MigrationSettings;

/// Failures of one migration attempt. All variants are treated uniformly
/// by the retry sequencer.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("no migration command configured")]
    NoCommand,

    #[error("failed to spawn migration command {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("migration command {program:?} exited with {}", exit_label(.code))]
    CommandFailed { program: String, code: Option<i32> },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// One configured migration invocation: program plus arguments, run as a
/// child process per attempt.
#[derive(Debug, Clone)]
pub struct MigrationCommand {
    program: String,
    args: Vec<String>,
}

impl MigrationCommand {
    /// Build the command from settings. A missing or blank program is a
    /// fatal configuration error for the service daemon.
    pub fn from_settings(settings: &MigrationSettings) -> Result<Self, MigrationError> {
        let mut parts = settings.command.iter();
        let program = parts
            .next()
            .filter(|program| !program.trim().is_empty())
            .ok_or(MigrationError::NoCommand)?
            .clone();

        Ok(Self {
            program,
            args: parts.cloned().collect(),
        })
    }

    /// Run one attempt to completion. Success is exit status zero.
    pub async fn run(&self) -> Result<(), MigrationError> {
        debug!(program = %self.program, "Running migration command");

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .map_err(|source| MigrationError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(MigrationError::CommandFailed {
                program: self.program.clone(),
                code: status.code(),
            })
        }
    }
}
