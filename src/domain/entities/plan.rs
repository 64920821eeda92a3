//! DeployPlan entity - the ordered actions of one redeploy

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::command::CommandSpec;
use crate::domain::value_objects::{FileMode, Policy, StepKind};

/// A single unit of work inside a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Run an external command
    Run { command: CommandSpec, policy: Policy },

    /// Set the mode of whichever `files` are present in `directory`.
    ///
    /// Resolved at execution time because earlier copies may have been
    /// skipped.
    SetMode {
        directory: PathBuf,
        files: Vec<String>,
        mode: FileMode,
        /// Program prefix used to run `chmod` (e.g. `["sudo", "chmod"]`)
        program: Vec<String>,
    },
}

impl Action {
    pub fn run(command: CommandSpec) -> Self {
        Action::Run {
            command,
            policy: Policy::Fatal,
        }
    }

    pub fn tolerated(command: CommandSpec) -> Self {
        Action::Run {
            command,
            policy: Policy::Tolerated,
        }
    }

    pub fn policy(&self) -> Policy {
        match self {
            Action::Run { policy, .. } => *policy,
            Action::SetMode { .. } => Policy::Fatal,
        }
    }

    /// Build the concrete `chmod` invocation for the files found present
    pub fn set_mode_command(
        program: &[String],
        mode: FileMode,
        directory: &Path,
        present: &[String],
    ) -> Option<CommandSpec> {
        let (head, rest) = program.split_first()?;
        Some(
            CommandSpec::new(head.clone())
                .args(rest.iter().cloned())
                .arg(mode.as_chmod_arg())
                .args(
                    present
                        .iter()
                        .map(|f| directory.join(f).display().to_string()),
                ),
        )
    }

    /// Human-readable line describing this action in a plan listing
    pub fn describe(&self) -> String {
        match self {
            Action::Run { command, .. } => command.display_line(),
            Action::SetMode {
                directory,
                files,
                mode,
                program,
            } => Self::set_mode_command(program, *mode, directory, files)
                .map(|c| c.display_line())
                .unwrap_or_default(),
        }
    }
}

/// One stage of the plan with its actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    pub actions: Vec<Action>,
}

impl Step {
    pub fn new(kind: StepKind) -> Self {
        Self {
            kind,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

/// Ordered list of steps to execute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DeployPlan {
    pub steps: Vec<Step>,
}

impl DeployPlan {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn action_count(&self) -> usize {
        self.steps.iter().map(|s| s.actions.len()).sum()
    }
}
