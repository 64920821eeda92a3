//! redeploy - refresh a single-host container deployment
//!
//! Pulls the working copy, rebuilds and restarts the application
//! container, publishes the static interface files to the web root and
//! restarts the reverse proxy.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{CheckUseCase, DeployOptions, DeployResult, DeployUseCase};
pub use config::Config;
pub use domain::entities::{Action, CommandSpec, DeployPlan, Step};
pub use domain::services::Planner;
pub use domain::value_objects::{FileMode, PortMapping, Policy, StepKind};
pub use error::{DeployError, RedeployResult};
