//! Error types for redeploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::StepKind;

/// Result type alias for redeploy operations
pub type RedeployResult<T> = Result<T, DeployError>;

/// Main error type for redeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// A fatal command exited unsuccessfully
    #[error(
        "{step} failed: `{command}` exited with {status}{detail}",
        status = describe_code(.code),
        detail = describe_stderr(.stderr)
    )]
    CommandFailed {
        step: StepKind,
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A fatal command could not be started at all
    #[error("{step} failed: could not run `{program}`: {message}")]
    Spawn {
        step: StepKind,
        program: String,
        message: String,
    },

    /// None of the static files ended up in the destination
    #[error("no static files present in {directory} to set permissions on")]
    NoStaticFiles { directory: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Configuration parsed but holds an unusable value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidConfig { key: String, message: String },

    /// Permission mode is not a three-digit octal value
    #[error("invalid file mode '{0}' (expected octal like 644)")]
    InvalidMode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Exit code the process should terminate with for this error.
    ///
    /// A failed command propagates its own exit code; configuration
    /// problems exit with 2; anything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::CommandFailed { code: Some(code), .. } if *code != 0 => *code,
            DeployError::Config { .. }
            | DeployError::InvalidConfig { .. }
            | DeployError::InvalidMode(_) => 2,
            _ => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}
