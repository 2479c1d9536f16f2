//! Common test utilities for release assembly scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_released!`, `assert_not_released!`
//! - Fixtures: the OpenGML build tree used by most scenarios

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
