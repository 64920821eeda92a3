//! CommandRunner port - abstraction over spawning external programs
//!
//! Lets the deploy use case execute a plan without touching
//! `std::process` directly (system runner, recording mock).

use std::path::Path;

use crate::domain::entities::CommandSpec;

/// Outcome of a command that was started
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if terminated by a signal
    pub code: Option<i32>,
    /// Captured standard error (empty when stderr was inherited)
    pub stderr: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Error raised when a program cannot be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnError {
    pub program: String,
    pub message: String,
}

impl std::fmt::Display for SpawnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not run `{}`: {}", self.program, self.message)
    }
}

impl std::error::Error for SpawnError {}

/// Runs commands to completion, one at a time
pub trait CommandRunner {
    /// Run `command` with `workdir` as current directory, blocking until it exits
    fn run(&self, command: &CommandSpec, workdir: &Path) -> Result<CommandOutput, SpawnError>;

    /// Check whether `program` is installed and answers `--version`
    fn is_available(&self, program: &str) -> bool;
}
