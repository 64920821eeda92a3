//! Deploy Use Case
//!
//! Executes a [`DeployPlan`] step by step:
//! 1. Source sync
//! 2. Service rebuild
//! 3. Static asset sync
//! 4. Proxy reload
//!
//! Each command blocks until it exits. A failing tolerated command is
//! recorded and skipped over; a failing fatal command aborts the run and
//! nothing after it executes.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::entities::{Action, CommandSpec, DeployPlan};
use crate::domain::ports::{
    CommandRunner, DeployEvent, DeployEventSink, FileSystem, NoopEventSink,
};
use crate::domain::services::Planner;
use crate::domain::value_objects::{Policy, StepKind};
use crate::error::{DeployError, RedeployResult};

use super::options::DeployOptions;
use super::result::{DeployResult, StepReport, ToleratedFailure};

/// Deploy use case - runs the plan against the host
///
/// Parameterized by its ports so tests can substitute a recording runner
/// and an in-memory file system.
pub struct DeployUseCase<R, F>
where
    R: CommandRunner,
    F: FileSystem,
{
    runner: R,
    file_system: F,
}

impl<R, F> DeployUseCase<R, F>
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

    /// Plan from configuration and execute silently
    pub fn execute_config(
        &self,
        config: &Config,
        options: &DeployOptions,
    ) -> RedeployResult<DeployResult> {
        let plan = Planner::new(config).plan()?;
        self.execute(&plan, options)
    }

    /// Execute a plan without event reporting
    pub fn execute(&self, plan: &DeployPlan, options: &DeployOptions) -> RedeployResult<DeployResult> {
        self.execute_with_events(plan, options, Arc::new(NoopEventSink))
    }

    /// Execute a plan, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        plan: &DeployPlan,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> RedeployResult<DeployResult> {
        let mut result = DeployResult::new();

        event_sink.on_event(DeployEvent::Started {
            workdir: options.workdir.clone(),
            step_count: plan.steps.len(),
        });

        for (index, step) in plan.steps.iter().enumerate() {
            info!(step = %step.kind, "step started");
            event_sink.on_event(DeployEvent::StepStarted {
                index,
                step: step.kind,
            });

            let mut report = StepReport {
                kind: step.kind,
                commands: 0,
                tolerated: 0,
            };

            for action in &step.actions {
                let (command, policy) = match self.resolve(action) {
                    Ok(resolved) => resolved,
                    Err(err) => return Err(Self::abort(&event_sink, index, step.kind, err)),
                };

                report.commands += 1;
                result.command_count += 1;

                match self.run_command(step.kind, &command, &options.workdir, &event_sink) {
                    Ok(()) => {}
                    Err(err) if policy.is_tolerated() => {
                        let reason = failure_reason(&err);
                        debug!(command = %command, error = %reason, "ignoring failure");
                        report.tolerated += 1;
                        event_sink.on_event(DeployEvent::CommandTolerated {
                            step: step.kind,
                            command: command.display_line(),
                            error: reason.clone(),
                        });
                        result.tolerated.push(ToleratedFailure {
                            step: step.kind,
                            command: command.display_line(),
                            error: reason,
                        });
                    }
                    Err(err) => return Err(Self::abort(&event_sink, index, step.kind, err)),
                }
            }

            event_sink.on_event(DeployEvent::StepCompleted {
                index,
                step: step.kind,
            });
            result.steps.push(report);
        }

        event_sink.on_event(DeployEvent::Completed {
            command_count: result.command_count,
            tolerated_count: result.tolerated.len(),
        });

        Ok(result)
    }

    /// Turn an action into the concrete command to run
    fn resolve(&self, action: &Action) -> RedeployResult<(CommandSpec, Policy)> {
        match action {
            Action::Run { command, policy } => Ok((command.clone(), *policy)),
            Action::SetMode {
                directory,
                files,
                mode,
                program,
            } => {
                let present: Vec<String> = files
                    .iter()
                    .filter(|f| self.file_system.exists(&directory.join(f)))
                    .cloned()
                    .collect();

                if present.is_empty() {
                    return Err(DeployError::NoStaticFiles {
                        directory: directory.clone(),
                    });
                }

                let command = Action::set_mode_command(program, *mode, directory, &present)
                    .ok_or_else(|| DeployError::InvalidConfig {
                        key: "static_assets.chmod".to_string(),
                        message: "must not be empty".to_string(),
                    })?;
                Ok((command, Policy::Fatal))
            }
        }
    }

    /// Run one command, mapping a non-zero exit or spawn failure to an error
    fn run_command(
        &self,
        step: StepKind,
        command: &CommandSpec,
        workdir: &Path,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> RedeployResult<()> {
        let line = command.display_line();
        event_sink.on_event(DeployEvent::CommandStarted {
            step,
            command: line.clone(),
        });

        match self.runner.run(command, workdir) {
            Ok(output) if output.is_success() => {
                event_sink.on_event(DeployEvent::CommandSucceeded {
                    step,
                    command: line,
                });
                Ok(())
            }
            Ok(output) => Err(DeployError::CommandFailed {
                step,
                command: line,
                code: output.code,
                stderr: output.stderr,
            }),
            Err(spawn) => Err(DeployError::Spawn {
                step,
                program: spawn.program,
                message: spawn.message,
            }),
        }
    }

    fn abort(
        event_sink: &Arc<dyn DeployEventSink>,
        index: usize,
        step: StepKind,
        err: DeployError,
    ) -> DeployError {
        event_sink.on_event(DeployEvent::StepFailed {
            index,
            step,
            error: err.to_string(),
        });
        err
    }
}

/// Short reason shown for an ignored failure
fn failure_reason(error: &DeployError) -> String {
    match error {
        DeployError::CommandFailed { code, stderr, .. } => {
            let status = match code {
                Some(code) => format!("exit status {}", code),
                None => "terminated by signal".to_string(),
            };
            let stderr = stderr.trim();
            if stderr.is_empty() {
                status
            } else {
                format!("{}: {}", status, stderr)
            }
        }
        DeployError::Spawn {
            program, message, ..
        } => format!("could not run `{}`: {}", program, message),
        other => other.to_string(),
    }
}
