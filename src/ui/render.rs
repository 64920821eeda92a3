//! Text and JSON renderings for `plan` and `check`

use crossterm::style::Stylize;

use crate::application::{CheckItem, CheckResult, CheckStatus};
use crate::domain::entities::DeployPlan;
use crate::ui::icon::Icon;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme;

fn dim(text: &str, caps: TerminalCapabilities) -> String {
    if caps.supports_color {
        format!("{}", text.with(theme::colors::DIM))
    } else {
        text.to_string()
    }
}

/// Numbered step banners with the command lines beneath each
pub fn render_plan(plan: &DeployPlan, caps: TerminalCapabilities) -> String {
    let mut out = String::new();
    let total = plan.steps.len();

    for (index, step) in plan.steps.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} [{}/{}] {}\n",
            Icon::for_step(step.kind).colored(caps.supports_color, caps.supports_unicode),
            index + 1,
            total,
            step.kind.banner()
        ));
        for action in &step.actions {
            let suffix = if action.policy().is_tolerated() {
                dim("  (failure ignored)", caps)
            } else {
                String::new()
            };
            out.push_str(&format!("  $ {}{}\n", action.describe(), suffix));
        }
    }

    out
}

/// Plan as a single JSON document
pub fn plan_json(plan: &DeployPlan) -> serde_json::Value {
    let steps: Vec<serde_json::Value> = plan
        .steps
        .iter()
        .map(|step| {
            let commands: Vec<serde_json::Value> = step
                .actions
                .iter()
                .map(|action| {
                    serde_json::json!({
                        "cmd": action.describe(),
                        "tolerated": action.policy().is_tolerated(),
                    })
                })
                .collect();
            serde_json::json!({
                "step": step.kind.id(),
                "title": step.kind.banner(),
                "commands": commands,
            })
        })
        .collect();

    serde_json::json!({
        "event": "plan",
        "command": "plan",
        "step_count": plan.steps.len(),
        "command_count": plan.action_count(),
        "steps": steps,
    })
}

pub fn render_check_item(item: &CheckItem, caps: TerminalCapabilities) -> String {
    let icon = match item.status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    };
    format!(
        "  {} {} - {}\n",
        icon.colored(caps.supports_color, caps.supports_unicode),
        item.name,
        item.message
    )
}

/// Items grouped under their category headings
pub fn render_check_report(result: &CheckResult, caps: TerminalCapabilities) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;

    for item in &result.items {
        if current != Some(item.category.as_str()) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(&item.category);
            out.push('\n');
            current = Some(item.category.as_str());
        }
        out.push_str(&render_check_item(item, caps));
    }

    out
}

pub fn render_check_summary(result: &CheckResult, caps: TerminalCapabilities) -> String {
    let (icon, title) = if !result.is_success() {
        (Icon::Error, "Check FAILED")
    } else if result.warnings > 0 {
        (Icon::Warning, "Check passed with warnings")
    } else {
        (Icon::Done, "All checks passed")
    };

    format!(
        "\n{} {}\nSummary: {} passed, {} warnings, {} errors\n",
        icon.colored(caps.supports_color, caps.supports_unicode),
        title,
        result.passed,
        result.warnings,
        result.errors
    )
}

pub fn check_item_json(item: &CheckItem) -> serde_json::Value {
    serde_json::json!({
        "event": "check",
        "command": "check",
        "category": item.category,
        "name": item.name,
        "status": item.status.as_str(),
        "message": item.message,
    })
}

pub fn check_complete_json(result: &CheckResult) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "check",
        "status": if result.is_success() { "success" } else { "failure" },
        "passed": result.passed,
        "warnings": result.warnings,
        "errors": result.errors,
    })
}
