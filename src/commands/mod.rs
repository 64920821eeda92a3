//! Subcommand implementations

pub mod check;
pub mod plan;
pub mod run;
mod workspace;

pub(crate) use workspace::Workspace;

/// Write one NDJSON line to stdout
pub(crate) fn write_json_line(value: &serde_json::Value) {
    use std::io::Write;

    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{}", value);
    let _ = out.flush();
}
