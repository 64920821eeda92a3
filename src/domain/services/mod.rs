//! Domain Services
//!
//! Stateless logic operating on domain types.

mod planner;

pub use planner::Planner;
