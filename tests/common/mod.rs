//! Common test utilities for redeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated sandbox with a working copy, web root and stub tools
//! - Fixtures: Stub scripts and file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
