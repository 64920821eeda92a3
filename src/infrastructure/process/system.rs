//! System Command Runner
//!
//! Spawns real processes with `std::process::Command`.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace, warn};

use crate::domain::entities::CommandSpec;
use crate::domain::ports::{CommandOutput, CommandRunner, SpawnError};

/// How child output reaches the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child stdout/stderr go straight to the terminal
    #[default]
    Inherit,
    /// Child stdout is discarded and stderr captured (JSON mode)
    Capture,
}

/// Runs commands on the local host
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    mode: OutputMode,
}

impl SystemCommandRunner {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandSpec, workdir: &Path) -> Result<CommandOutput, SpawnError> {
        debug!(command = %command, workdir = %workdir.display(), "spawning");

        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments())
            .current_dir(workdir)
            .stdin(Stdio::inherit()); // sudo may prompt for a password

        match self.mode {
            OutputMode::Inherit => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
            OutputMode::Capture => {
                cmd.stdout(Stdio::null()).stderr(Stdio::piped());
            }
        }

        let mut child = cmd.spawn().map_err(|e| SpawnError {
            program: command.program().to_string(),
            message: e.to_string(),
        })?;

        let mut raw = Vec::new();
        if let Some(mut pipe) = child.stderr.take() {
            // Read before wait so a chatty child cannot block on a full pipe
            if let Err(e) = pipe.read_to_end(&mut raw) {
                warn!(command = %command, error = %e, "failed to read stderr");
            }
        }
        let stderr = String::from_utf8_lossy(&raw).into_owned();

        let status = child.wait().map_err(|e| SpawnError {
            program: command.program().to_string(),
            message: e.to_string(),
        })?;

        trace!(command = %command, code = ?status.code(), "exited");

        Ok(CommandOutput {
            code: status.code(),
            stderr,
        })
    }

    fn is_available(&self, program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}
