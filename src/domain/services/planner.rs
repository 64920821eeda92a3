//! Planner - turns configuration into the ordered redeploy actions
//!
//! Pure function of the configuration; no file system or process access.

use crate::config::Config;
use crate::domain::entities::{Action, CommandSpec, DeployPlan, Step};
use crate::domain::value_objects::StepKind;
use crate::error::RedeployResult;

/// Builds a [`DeployPlan`] from a validated [`Config`]
pub struct Planner<'a> {
    config: &'a Config,
}

impl<'a> Planner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Validate the configuration and produce the four-step plan
    pub fn plan(&self) -> RedeployResult<DeployPlan> {
        self.config.validate()?;

        Ok(DeployPlan::new(vec![
            self.source_sync(),
            self.service_rebuild()?,
            self.static_asset_sync(),
            self.proxy_reload(),
        ]))
    }

    fn source_sync(&self) -> Step {
        let source = &self.config.source;
        Step::new(StepKind::SourceSync).with_action(Action::run(
            CommandSpec::new(&source.git).args(["pull", source.remote.as_str(), source.branch.as_str()]),
        ))
    }

    fn service_rebuild(&self) -> RedeployResult<Step> {
        let service = &self.config.service;
        let ports = self.config.port_mapping()?;
        let runtime = service.runtime.as_str();

        Ok(Step::new(StepKind::ServiceRebuild)
            .with_action(Action::tolerated(
                CommandSpec::new(runtime).args(["stop", service.container.as_str()]),
            ))
            .with_action(Action::tolerated(
                CommandSpec::new(runtime).args(["rm", "-f", service.container.as_str()]),
            ))
            .with_action(Action::run(
                CommandSpec::new(runtime).args(["build", "-t", service.image.as_str(), "."]),
            ))
            .with_action(Action::run(
                CommandSpec::new(runtime)
                    .args(["run", "-d", "-p"])
                    .arg(ports.as_publish_arg())
                    .arg("--env-file")
                    .arg(service.env_file.display().to_string())
                    .args(["--name", service.container.as_str(), service.image.as_str()]),
            )))
    }

    fn static_asset_sync(&self) -> Step {
        let assets = &self.config.static_assets;
        // Trailing slash so `cp` treats the destination as a directory
        let destination = format!("{}/", assets.destination.display());

        let mut step = Step::new(StepKind::StaticAssetSync);
        for file in &assets.files {
            step = step.with_action(Action::tolerated(
                self.elevated(CommandSpec::new(&assets.copy).args([file.as_str(), destination.as_str()])),
            ));
        }

        let chmod = self.elevated(CommandSpec::new(&assets.chmod));
        let program = std::iter::once(chmod.program().to_string())
            .chain(chmod.arguments().iter().cloned())
            .collect();

        step.with_action(Action::SetMode {
            directory: assets.destination.clone(),
            files: assets
                .files
                .iter()
                .map(|f| file_name(f))
                .collect(),
            mode: assets.mode,
            program,
        })
    }

    fn proxy_reload(&self) -> Step {
        let proxy = &self.config.proxy;
        Step::new(StepKind::ProxyReload).with_action(Action::run(
            self.elevated(CommandSpec::new(&proxy.manager).args(["restart", proxy.service.as_str()])),
        ))
    }

    fn elevated(&self, command: CommandSpec) -> CommandSpec {
        let privileges = &self.config.privileges;
        if privileges.sudo {
            command.elevated_with(&privileges.program)
        } else {
            command
        }
    }
}

/// Name the file has once copied flat into the destination
fn file_name(relative: &str) -> String {
    std::path::Path::new(relative)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| relative.to_string())
}
