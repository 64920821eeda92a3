use std::path::Path;

use anyhow::Result;

use redeploy::presentation::factory;
use redeploy::ui::icon::Icon;
use redeploy::ui::render::{
    check_complete_json, check_item_json, render_check_report, render_check_summary,
};
use redeploy::ui::terminal::detect_capabilities;

use super::Workspace;

pub fn cmd_check(
    dir: Option<&Path>,
    config_path: Option<&Path>,
    strict_warnings: bool,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let workspace = Workspace::load(dir, config_path)?;
    let caps = detect_capabilities(no_color);

    if json {
        super::write_json_line(&serde_json::json!({
            "event": "start",
            "command": "check",
            "workdir": workspace.workdir.display().to_string(),
            "strict_warnings": strict_warnings,
        }));
    } else {
        println!(
            "{} Redeploy Check\nWorking copy: {}\n",
            Icon::Check.colored(caps.supports_color, caps.supports_unicode),
            workspace.workdir.display()
        );
    }

    let use_case = factory::create_check_use_case();
    let result = if json {
        use_case.execute_with_callback(&workspace.config, &workspace.workdir, |item| {
            super::write_json_line(&check_item_json(item));
        })
    } else {
        let result = use_case.execute(&workspace.config, &workspace.workdir);
        print!("{}", render_check_report(&result, caps));
        result
    };

    if json {
        super::write_json_line(&check_complete_json(&result));
    } else {
        print!("{}", render_check_summary(&result, caps));
    }

    let has_issues = if strict_warnings {
        !result.is_clean()
    } else {
        !result.is_success()
    };
    if has_issues {
        std::process::exit(1);
    }

    Ok(())
}
