//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Wires `LocalFs` into the use case and merges CLI with config

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_assemble_use_case, resolve_layout, resolve_options};
