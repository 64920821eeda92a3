use std::path::Path;

use anyhow::Result;

use redeploy::domain::services::Planner;
use redeploy::ui::render::{plan_json, render_plan};
use redeploy::ui::terminal::detect_capabilities;

use super::Workspace;

pub fn cmd_plan(
    dir: Option<&Path>,
    config_path: Option<&Path>,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let workspace = Workspace::load(dir, config_path)?;
    let plan = Planner::new(&workspace.config).plan()?;

    if json {
        let mut doc = plan_json(&plan);
        if let Some(obj) = doc.as_object_mut() {
            obj.insert(
                "workdir".to_string(),
                serde_json::Value::String(workspace.workdir.display().to_string()),
            );
        }
        super::write_json_line(&doc);
    } else {
        let caps = detect_capabilities(no_color);
        println!("Redeploy plan for {}\n", workspace.workdir.display());
        print!("{}", render_plan(&plan, caps));
    }

    Ok(())
}
