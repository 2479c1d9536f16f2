//! Configuration module for ogm-release
//!
//! Configuration hierarchy:
//! 1. CLI arguments (highest priority)
//! 2. Config file passed with `--config`
//! 3. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{load_or_default, load_with_warnings, parse_with_warnings, ConfigWarning};
pub use types::{ContentsConfig, ReleaseConfig};
