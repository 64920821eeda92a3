//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Diagnostic logging setup
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `logging` - `tracing` subscriber on stderr
//!
//! ## Usage
//!
//! ```ignore
//! use redeploy::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(false);
//! let result = use_case.execute_config(&config, &options)?;
//! ```

pub mod factory;
pub mod logging;

pub use factory::{create_check_use_case, create_deploy_use_case};
pub use logging::init_tracing;
