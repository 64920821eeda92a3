//! Process execution implementations

mod system;

pub use system::{OutputMode, SystemCommandRunner};
