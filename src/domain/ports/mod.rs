//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod deploy_events;
pub mod file_system;

pub use command_runner::{CommandOutput, CommandRunner, SpawnError};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::FileSystem;
