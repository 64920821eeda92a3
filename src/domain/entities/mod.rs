//! Domain Entities
//!
//! Core objects of a redeploy: the commands to run and the plan that
//! orders them.

mod command;
mod plan;

pub use command::CommandSpec;
pub use plan::{Action, DeployPlan, Step};
