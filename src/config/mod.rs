//! Configuration module for redeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (REDEPLOY_*)
//! 3. `--config <path>` or `redeploy.toml` in the working copy
//! 4. User config (~/.config/redeploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod suggest;
mod types;

pub use loader::{
    resolve, user_config_path, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    Config, PrivilegesConfig, ProxyConfig, ServiceConfig, SourceConfig, StaticAssetsConfig,
};
