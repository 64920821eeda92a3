//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::PathBuf;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Working copy; every command runs with this as current directory
    pub workdir: PathBuf,
}

impl DeployOptions {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
