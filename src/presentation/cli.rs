//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - The three positionals keep the historical call shape:
//!   `assemble-release [SOURCE_ROOT] [DESTINATION] [BUILD_SUBDIR]`
//! - DESTINATION and BUILD_SUBDIR stay `None` when omitted so a config file
//!   can fill them before the built-in defaults apply

use std::path::PathBuf;

use crate::Platform;
use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Assemble a distributable OpenGML release folder from a build tree
#[derive(Parser, Debug)]
#[command(name = "assemble-release")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "The destination is deleted and recreated on every run. Use --dry-run to preview."
)]
pub struct Cli {
    /// Project root containing the build directory
    #[arg(value_name = "SOURCE_ROOT", default_value = ".")]
    pub source_root: PathBuf,

    /// Release folder to (re)create [default: ogm-release]
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Build directory, relative to SOURCE_ROOT [default: build]
    #[arg(value_name = "BUILD_SUBDIR")]
    pub build_subdir: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Name files for this platform instead of the host
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Release config file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dry run - show what would be done
    #[arg(long)]
    pub dry_run: bool,
}
