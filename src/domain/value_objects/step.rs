//! Step value objects - the fixed stages of a redeploy and how failures
//! inside them are treated.

use serde::{Deserialize, Serialize};

/// One of the four stages of a redeploy, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Pull the latest revision into the working copy
    SourceSync,
    /// Replace the running container with a freshly built one
    ServiceRebuild,
    /// Copy static HTML into the web root and fix permissions
    StaticAssetSync,
    /// Restart the reverse proxy
    ProxyReload,
}

impl StepKind {
    /// All steps in the order they run
    pub const ALL: [StepKind; 4] = [
        StepKind::SourceSync,
        StepKind::ServiceRebuild,
        StepKind::StaticAssetSync,
        StepKind::ProxyReload,
    ];

    /// Stable identifier used in JSON output
    pub fn id(&self) -> &'static str {
        match self {
            StepKind::SourceSync => "source_sync",
            StepKind::ServiceRebuild => "service_rebuild",
            StepKind::StaticAssetSync => "static_asset_sync",
            StepKind::ProxyReload => "proxy_reload",
        }
    }

    /// Operator-facing banner shown when the step starts
    pub fn banner(&self) -> &'static str {
        match self {
            StepKind::SourceSync => "Pulling latest source",
            StepKind::ServiceRebuild => "Updating the container",
            StepKind::StaticAssetSync => "Syncing static interface files",
            StepKind::ProxyReload => "Restarting the reverse proxy",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepKind::SourceSync => write!(f, "source sync"),
            StepKind::ServiceRebuild => write!(f, "service rebuild"),
            StepKind::StaticAssetSync => write!(f, "static asset sync"),
            StepKind::ProxyReload => write!(f, "proxy reload"),
        }
    }
}

/// What a failing command does to the rest of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Abort the remaining sequence
    #[default]
    Fatal,
    /// Record the failure and keep going
    Tolerated,
}

impl Policy {
    pub fn is_tolerated(&self) -> bool {
        matches!(self, Policy::Tolerated)
    }
}
