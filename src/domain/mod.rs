//! Domain Layer
//!
//! The core of redeploy - plan construction without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Commands, actions, and the deploy plan
//! - `value_objects/` - Immutable value types (StepKind, Policy, FileMode, PortMapping)
//! - `services/` - Domain services (Planner)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the file system
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
