//! Console Event Sink
//!
//! Human-readable progress for interactive runs.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::StepKind;
use crate::ui::icon::Icon;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme;

/// Event sink that prints step banners and command lines
///
/// Aborted steps go to the error writer so they survive a redirected stdout.
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    errors: Mutex<Box<dyn Write + Send>>,
    caps: TerminalCapabilities,
    step_count: Mutex<usize>,
}

impl ConsoleEventSink {
    pub fn stdio(caps: TerminalCapabilities) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), caps)
    }

    pub fn with_writers<W, E>(writer: W, errors: E, caps: TerminalCapabilities) -> Self
    where
        W: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            writer: Mutex::new(Box::new(writer)),
            errors: Mutex::new(Box::new(errors)),
            caps,
            step_count: Mutex::new(StepKind::ALL.len()),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.caps.supports_color, self.caps.supports_unicode)
    }

    fn dim(&self, text: &str) -> String {
        if self.caps.supports_color {
            format!("{}", text.with(theme::colors::DIM))
        } else {
            text.to_string()
        }
    }

    fn line(&self, text: String) {
        Self::write_to(&self.writer, text);
    }

    fn error_line(&self, text: String) {
        Self::write_to(&self.errors, text);
    }

    fn write_to(target: &Mutex<Box<dyn Write + Send>>, text: String) {
        if let Ok(mut writer) = target.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                workdir,
                step_count,
            } => {
                if let Ok(mut count) = self.step_count.lock() {
                    *count = step_count;
                }
                self.line(format!(
                    "{} Starting redeploy of {}",
                    self.icon(Icon::Start),
                    workdir.display()
                ));
            }

            DeployEvent::StepStarted { index, step } => {
                let total = self.step_count.lock().map(|c| *c).unwrap_or(index + 1);
                self.line(format!(
                    "\n{} [{}/{}] {}...",
                    self.icon(Icon::for_step(step)),
                    index + 1,
                    total,
                    step.banner()
                ));
            }

            DeployEvent::CommandStarted { command, .. } => {
                self.line(self.dim(&format!("  $ {}", command)));
            }

            DeployEvent::CommandSucceeded { .. } => {}

            DeployEvent::CommandTolerated { command, error, .. } => {
                self.line(format!(
                    "  {} ignored failure of `{}`: {}",
                    self.icon(Icon::Warning),
                    command,
                    error
                ));
            }

            DeployEvent::StepCompleted { step, .. } => {
                self.line(format!("{} {} done", self.icon(Icon::Success), step));
            }

            DeployEvent::StepFailed { step, error, .. } => {
                self.error_line(format!("{} {} aborted", self.icon(Icon::Error), step));
                self.error_line(format!("  {} {}", self.icon(Icon::Arrow), error));
            }

            DeployEvent::Completed {
                command_count,
                tolerated_count,
            } => {
                self.line(format!(
                    "\n{} Redeploy completed ({} commands, {} ignored failures)",
                    self.icon(Icon::Done),
                    command_count,
                    tolerated_count
                ));
            }
        }
    }
}
