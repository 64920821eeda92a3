//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CheckUseCase, DeployUseCase};
use crate::infrastructure::{LocalFs, OutputMode, SystemCommandRunner};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<SystemCommandRunner, LocalFs>;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<SystemCommandRunner, LocalFs>;

/// Output handling for child processes given the output format
pub fn output_mode(json: bool) -> OutputMode {
    if json {
        OutputMode::Capture
    } else {
        OutputMode::Inherit
    }
}

/// Create a deploy use case with all dependencies wired up
///
/// In JSON mode child output is captured so stdout stays valid NDJSON.
pub fn create_deploy_use_case(json: bool) -> ConcreteDeployUseCase {
    DeployUseCase::new(SystemCommandRunner::new(output_mode(json)), LocalFs::new())
}

/// Create a check use case with all dependencies wired up
pub fn create_check_use_case() -> ConcreteCheckUseCase {
    CheckUseCase::new(SystemCommandRunner::new(OutputMode::Capture), LocalFs::new())
}
