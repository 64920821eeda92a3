//! Configuration type definitions
//!
//! Defaults reproduce the single-host setup the tool was written for:
//! `consultoc-api` image, `consultoc-app` container on port 8000, nginx in
//! front, static pages under `/var/www/consultoc-frontend`.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FileMode, PortMapping};
use crate::error::{DeployError, RedeployResult};

use super::loader::{self, ConfigWarning};

/// Source checkout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_git")]
    pub git: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            git: default_git(),
            remote: default_remote(),
            branch: default_branch(),
        }
    }
}

fn default_git() -> String {
    "git".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

/// Container build/run settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Container runtime CLI (`docker`, `podman`)
    #[serde(default = "default_runtime")]
    pub runtime: String,

    #[serde(default = "default_image")]
    pub image: String,

    #[serde(default = "default_container")]
    pub container: String,

    #[serde(default = "default_port")]
    pub host_port: u16,

    #[serde(default = "default_port")]
    pub container_port: u16,

    /// Environment file passed to `run --env-file`, relative to the working copy
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            runtime: default_runtime(),
            image: default_image(),
            container: default_container(),
            host_port: default_port(),
            container_port: default_port(),
            env_file: default_env_file(),
        }
    }
}

fn default_runtime() -> String {
    "docker".to_string()
}

fn default_image() -> String {
    "consultoc-api".to_string()
}

fn default_container() -> String {
    "consultoc-app".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env")
}

/// Static HTML copy settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticAssetsConfig {
    /// Files relative to the working copy
    #[serde(default = "default_static_files")]
    pub files: Vec<String>,

    /// Web-server directory the files are copied into
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    #[serde(default)]
    pub mode: FileMode,

    #[serde(default = "default_copy")]
    pub copy: String,

    #[serde(default = "default_chmod")]
    pub chmod: String,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self {
            files: default_static_files(),
            destination: default_destination(),
            mode: FileMode::default(),
            copy: default_copy(),
            chmod: default_chmod(),
        }
    }
}

fn default_static_files() -> Vec<String> {
    vec!["form.html".to_string(), "dashboard.html".to_string()]
}

fn default_destination() -> PathBuf {
    PathBuf::from("/var/www/consultoc-frontend")
}

fn default_copy() -> String {
    "cp".to_string()
}

fn default_chmod() -> String {
    "chmod".to_string()
}

/// Reverse proxy settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Service manager CLI
    #[serde(default = "default_manager")]
    pub manager: String,

    #[serde(default = "default_service")]
    pub service: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            manager: default_manager(),
            service: default_service(),
        }
    }
}

fn default_manager() -> String {
    "systemctl".to_string()
}

fn default_service() -> String {
    "nginx".to_string()
}

/// Privilege escalation for the web-root copy and the proxy restart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegesConfig {
    #[serde(default = "default_true")]
    pub sudo: bool,

    #[serde(default = "default_sudo_program")]
    pub program: String,
}

impl Default for PrivilegesConfig {
    fn default() -> Self {
        Self {
            sudo: true,
            program: default_sudo_program(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sudo_program() -> String {
    "sudo".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub static_assets: StaticAssetsConfig,

    #[serde(default)]
    pub proxy: ProxyConfig,

    #[serde(default)]
    pub privileges: PrivilegesConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> RedeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RedeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Port publication for the service instance
    pub fn port_mapping(&self) -> RedeployResult<PortMapping> {
        PortMapping::new(self.service.host_port, self.service.container_port)
    }

    /// Reject values that would produce a broken plan
    pub fn validate(&self) -> RedeployResult<()> {
        let required = [
            ("source.git", &self.source.git),
            ("source.remote", &self.source.remote),
            ("source.branch", &self.source.branch),
            ("service.runtime", &self.service.runtime),
            ("service.image", &self.service.image),
            ("service.container", &self.service.container),
            ("static_assets.copy", &self.static_assets.copy),
            ("static_assets.chmod", &self.static_assets.chmod),
            ("proxy.manager", &self.proxy.manager),
            ("proxy.service", &self.proxy.service),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(invalid(key, "must not be empty"));
            }
        }

        if self.privileges.sudo && self.privileges.program.trim().is_empty() {
            return Err(invalid("privileges.program", "must not be empty when sudo is on"));
        }

        self.port_mapping()?;

        if self.service.env_file.as_os_str().is_empty() {
            return Err(invalid("service.env_file", "must not be empty"));
        }

        if !self.static_assets.destination.is_absolute() {
            return Err(invalid(
                "static_assets.destination",
                &format!(
                    "'{}' must be an absolute path",
                    self.static_assets.destination.display()
                ),
            ));
        }

        if self.static_assets.files.is_empty() {
            return Err(invalid("static_assets.files", "must list at least one file"));
        }
        for file in &self.static_assets.files {
            if !is_contained_relative(Path::new(file)) {
                return Err(invalid(
                    "static_assets.files",
                    &format!("'{}' must be a relative path inside the working copy", file),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> DeployError {
    DeployError::InvalidConfig {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// Relative, non-empty, and never climbing out through `..`
fn is_contained_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
