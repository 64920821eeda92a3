//! Application Layer
//!
//! Use cases that orchestrate a redeploy.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT spawn processes itself (that is Infrastructure)
//! - Reports progress through `DeployEventSink`
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Runs the plan step by step, stopping on a fatal failure
//! - `CheckUseCase` - Preflight checks that change nothing on the host

pub mod check;
pub mod deploy;

pub use check::{CheckItem, CheckResult, CheckStatus, CheckUseCase};
pub use deploy::{DeployOptions, DeployResult, DeployUseCase, StepReport, ToleratedFailure};
