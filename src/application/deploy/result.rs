//! Deploy Result
//!
//! Result types for deploy operations.

use crate::domain::value_objects::StepKind;

/// A tolerated command that failed without aborting the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToleratedFailure {
    pub step: StepKind,
    pub command: String,
    pub error: String,
}

/// Summary of one step that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub kind: StepKind,
    /// Commands executed in this step
    pub commands: usize,
    /// Of those, how many failed but were tolerated
    pub tolerated: usize,
}

/// Result of a successful deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployResult {
    /// Completed steps, in order
    pub steps: Vec<StepReport>,
    /// Total commands executed
    pub command_count: usize,
    /// Failures that were ignored
    pub tolerated: Vec<ToleratedFailure>,
}

impl DeployResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.tolerated.is_empty()
    }

    pub fn completed(&self, kind: StepKind) -> bool {
        self.steps.iter().any(|s| s.kind == kind)
    }
}
