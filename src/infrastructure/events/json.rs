//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(obj) = event.as_object_mut() {
            obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                workdir,
                step_count,
            } => serde_json::json!({
                "event": "start",
                "command": "run",
                "workdir": workdir.display().to_string(),
                "step_count": step_count,
            }),

            DeployEvent::StepStarted { index, step } => serde_json::json!({
                "event": "step_start",
                "index": index,
                "step": step.id(),
            }),

            DeployEvent::CommandStarted { step, command } => serde_json::json!({
                "event": "command_start",
                "step": step.id(),
                "cmd": command,
            }),

            DeployEvent::CommandSucceeded { step, command } => serde_json::json!({
                "event": "command_ok",
                "step": step.id(),
                "cmd": command,
            }),

            DeployEvent::CommandTolerated {
                step,
                command,
                error,
            } => serde_json::json!({
                "event": "command_tolerated",
                "step": step.id(),
                "cmd": command,
                "error": error,
            }),

            DeployEvent::StepCompleted { index, step } => serde_json::json!({
                "event": "step_complete",
                "index": index,
                "step": step.id(),
            }),

            DeployEvent::StepFailed { index, step, error } => serde_json::json!({
                "event": "step_failed",
                "index": index,
                "step": step.id(),
                "error": error,
            }),

            DeployEvent::Completed {
                command_count,
                tolerated_count,
            } => serde_json::json!({
                "event": "complete",
                "command": "run",
                "status": "success",
                "command_count": command_count,
                "tolerated_count": tolerated_count,
            }),
        };

        self.write_event(json);
    }
}
