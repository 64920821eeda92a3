//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{DeployError, RedeployResult};

use super::suggest::closest;
use super::types::Config;

/// File name looked up in the working copy
pub const PROJECT_CONFIG_FILE: &str = "redeploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration after layering, with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the settings were read from, `None` for built-in defaults
    pub origin: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RedeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration by priority:
/// 1. `explicit` path (must exist)
/// 2. `<workdir>/redeploy.toml`
/// 3. user config (`$XDG_CONFIG_HOME/redeploy/config.toml`)
/// 4. built-in defaults
///
/// Environment overrides are applied on top of whichever layer won.
pub fn resolve(explicit: Option<&Path>, workdir: &Path) -> RedeployResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(DeployError::Config {
                    file: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            Some(path.to_path_buf())
        }
        None => {
            let project = workdir.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let (config, warnings) = match &candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            load_with_warnings(path)?
        }
        None => {
            debug!("no configuration file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        origin: candidate,
        warnings,
    })
}

/// Apply environment variable overrides (REDEPLOY_* prefix)
fn with_env_overrides(mut config: Config) -> Config {
    // REDEPLOY_REMOTE
    if let Ok(remote) = std::env::var("REDEPLOY_REMOTE") {
        if !remote.trim().is_empty() {
            config.source.remote = remote.trim().to_string();
        }
    }

    // REDEPLOY_BRANCH
    if let Ok(branch) = std::env::var("REDEPLOY_BRANCH") {
        if !branch.trim().is_empty() {
            config.source.branch = branch.trim().to_string();
        }
    }

    // REDEPLOY_SUDO
    if let Ok(value) = std::env::var("REDEPLOY_SUDO") {
        match parse_bool(&value) {
            Some(sudo) => config.privileges.sudo = sudo,
            None => {
                let hint = closest(&value.trim().to_lowercase(), BOOL_VALUES)
                    .map(|s| format!(" (did you mean '{}'?)", s))
                    .unwrap_or_default();
                warn!(
                    "ignoring REDEPLOY_SUDO='{}'{}; expected one of {}",
                    value,
                    hint,
                    BOOL_VALUES.join(", ")
                );
            }
        }
    }

    config
}

const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Location of the per-user configuration file
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("redeploy").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "git",
        "remote",
        "branch",
        "service",
        "runtime",
        "image",
        "container",
        "host_port",
        "container_port",
        "env_file",
        "static_assets",
        "files",
        "destination",
        "mode",
        "copy",
        "chmod",
        "proxy",
        "manager",
        "privileges",
        "sudo",
        "program",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
