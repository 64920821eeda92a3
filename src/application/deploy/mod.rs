//! Deploy Module
//!
//! Orchestrates a redeploy run.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`, `StepReport`, `ToleratedFailure`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use redeploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(runner, fs);
//! let result = use_case.execute(&plan, &DeployOptions::new(workdir))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployResult, StepReport, ToleratedFailure};
pub use use_case::DeployUseCase;
