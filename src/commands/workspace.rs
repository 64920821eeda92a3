use std::path::{Path, PathBuf};

use anyhow::Result;

use redeploy::config::{self, Config};

/// Working copy and the configuration that applies to it
pub(crate) struct Workspace {
    pub workdir: PathBuf,
    pub config: Config,
}

impl Workspace {
    /// Resolve the working copy and layered configuration.
    ///
    /// Unknown config keys are printed to stderr and otherwise ignored.
    pub fn load(dir: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let workdir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };

        let loaded = config::resolve(config_path, &workdir)?;
        for warning in &loaded.warnings {
            eprintln!("warning: {}", warning);
        }
        if let Some(origin) = &loaded.origin {
            tracing::debug!(config = %origin.display(), "using configuration file");
        }

        Ok(Self {
            workdir,
            config: loaded.config,
        })
    }
}
