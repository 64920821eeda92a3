//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_mode;
mod port_mapping;
mod step;

pub use file_mode::FileMode;
pub use port_mapping::PortMapping;
pub use step::{Policy, StepKind};
