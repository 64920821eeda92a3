//! Check Use Case
//!
//! Preflight for a redeploy: tools installed, working copy and env file
//! present, static sources and web root in place. Runs nothing that
//! changes the host.

use std::path::Path;

use crate::config::Config;
use crate::domain::ports::{CommandRunner, FileSystem};

/// Result of a single preflight check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    /// Area being checked (e.g., "tools", "service")
    pub category: String,
    /// Name of the check
    pub name: String,
    /// Status of the check
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warning => "warning",
            CheckStatus::Error => "error",
        }
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl CheckResult {
    /// Check if all checks passed (no errors)
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Check if all checks passed with no warnings
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }

    fn push(&mut self, category: &str, name: &str, status: CheckStatus, message: String) {
        match status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(CheckItem {
            category: category.to_string(),
            name: name.to_string(),
            status,
            message,
        });
    }
}

/// Check Use Case
pub struct CheckUseCase<R, F>
where
    R: CommandRunner,
    F: FileSystem,
{
    runner: R,
    file_system: F,
}

impl<R, F> CheckUseCase<R, F>
where
    R: CommandRunner,
    F: FileSystem,
{
    pub fn new(runner: R, file_system: F) -> Self {
        Self {
            runner,
            file_system,
        }
    }

    /// Execute the check operation
    pub fn execute(&self, config: &Config, workdir: &Path) -> CheckResult {
        self.execute_with_callback(config, workdir, |_| {})
    }

    /// Execute with a callback for each check (for streaming UI)
    pub fn execute_with_callback<C>(&self, config: &Config, workdir: &Path, mut on_check: C) -> CheckResult
    where
        C: FnMut(&CheckItem),
    {
        let mut result = CheckResult::default();
        let mut record = |result: &mut CheckResult,
                          category: &str,
                          name: &str,
                          status: CheckStatus,
                          message: String| {
            result.push(category, name, status, message);
            if let Some(item) = result.items.last() {
                on_check(item);
            }
        };

        match config.validate() {
            Ok(()) => record(
                &mut result,
                "config",
                "valid",
                CheckStatus::Pass,
                "configuration is valid".to_string(),
            ),
            Err(err) => record(&mut result, "config", "valid", CheckStatus::Error, err.to_string()),
        }

        let mut tools = vec![
            ("git", config.source.git.as_str()),
            ("runtime", config.service.runtime.as_str()),
            ("proxy manager", config.proxy.manager.as_str()),
        ];
        if config.privileges.sudo {
            tools.push(("privileges", config.privileges.program.as_str()));
        }
        for (name, program) in tools {
            if self.runner.is_available(program) {
                record(
                    &mut result,
                    "tools",
                    name,
                    CheckStatus::Pass,
                    format!("`{}` is installed", program),
                );
            } else {
                record(
                    &mut result,
                    "tools",
                    name,
                    CheckStatus::Error,
                    format!("`{}` not found or not runnable", program),
                );
            }
        }

        if self.file_system.is_dir(workdir) {
            record(
                &mut result,
                "source",
                "working copy",
                CheckStatus::Pass,
                format!("{} exists", workdir.display()),
            );
        } else {
            record(
                &mut result,
                "source",
                "working copy",
                CheckStatus::Error,
                format!("{} is not a directory", workdir.display()),
            );
        }

        let env_file = workdir.join(&config.service.env_file);
        if self.file_system.exists(&env_file) {
            record(
                &mut result,
                "service",
                "env file",
                CheckStatus::Pass,
                format!("{} exists", config.service.env_file.display()),
            );
        } else {
            record(
                &mut result,
                "service",
                "env file",
                CheckStatus::Error,
                format!(
                    "{} is missing; the container will not start",
                    config.service.env_file.display()
                ),
            );
        }

        for file in &config.static_assets.files {
            if self.file_system.exists(&workdir.join(file)) {
                record(
                    &mut result,
                    "static",
                    file.as_str(),
                    CheckStatus::Pass,
                    format!("{} exists", file),
                );
            } else {
                record(
                    &mut result,
                    "static",
                    file.as_str(),
                    CheckStatus::Warning,
                    format!("{} is missing and will be skipped", file),
                );
            }
        }

        let destination = &config.static_assets.destination;
        if self.file_system.is_dir(destination) {
            record(
                &mut result,
                "static",
                "destination",
                CheckStatus::Pass,
                format!("{} exists", destination.display()),
            );
        } else {
            record(
                &mut result,
                "static",
                "destination",
                CheckStatus::Warning,
                format!("{} does not exist; copies will fail", destination.display()),
            );
        }

        result
    }
}
