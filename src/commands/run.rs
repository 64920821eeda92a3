use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use redeploy::application::DeployOptions;
use redeploy::domain::ports::DeployEventSink;
use redeploy::domain::services::Planner;
use redeploy::infrastructure::JsonEventSink;
use redeploy::presentation::factory;
use redeploy::ui::terminal::detect_capabilities;
use redeploy::ui::ConsoleEventSink;

use super::Workspace;

pub fn cmd_run(
    dir: Option<&Path>,
    config_path: Option<&Path>,
    dry_run: bool,
    json: bool,
    no_color: bool,
) -> Result<()> {
    if dry_run {
        return super::plan::cmd_plan(dir, config_path, json, no_color);
    }

    let workspace = Workspace::load(dir, config_path)?;
    let plan = Planner::new(&workspace.config).plan()?;

    let event_sink: Arc<dyn DeployEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdio(detect_capabilities(no_color)))
    };

    let use_case = factory::create_deploy_use_case(json);
    let options = DeployOptions::new(&workspace.workdir);

    match use_case.execute_with_events(&plan, &options, event_sink) {
        Ok(result) => {
            tracing::info!(
                commands = result.command_count,
                ignored = result.tolerated.len(),
                "redeploy finished"
            );
            Ok(())
        }
        Err(err) => {
            // The sink has already reported the failed step.
            if json {
                super::write_json_line(&serde_json::json!({
                    "event": "error",
                    "command": "run",
                    "message": err.to_string(),
                    "exit_code": err.exit_code(),
                }));
            }
            std::process::exit(err.exit_code());
        }
    }
}
