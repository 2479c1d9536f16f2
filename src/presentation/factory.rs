//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up and merges
//! command-line arguments with the release config.
//! Precedence: CLI > config file > built-in defaults.

use std::path::PathBuf;

use crate::application::{AssembleOptions, AssembleUseCase};
use crate::config::ReleaseConfig;
use crate::domain::value_objects::{
    Platform, ReleaseLayout, DEFAULT_BUILD_SUBDIR, DEFAULT_DESTINATION,
};
use crate::infrastructure::LocalFs;
use crate::presentation::cli::Cli;

/// Type alias for the concrete AssembleUseCase working on the local disk
pub type ConcreteAssembleUseCase = AssembleUseCase<LocalFs>;

/// Create an assemble use case backed by the real file system
pub fn create_assemble_use_case() -> ConcreteAssembleUseCase {
    AssembleUseCase::new(LocalFs::new())
}

/// Build the layout for one run
pub fn resolve_layout(cli: &Cli, config: &ReleaseConfig) -> ReleaseLayout {
    let destination = cli
        .destination
        .clone()
        .or_else(|| config.destination.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DESTINATION));
    let build_subdir = cli
        .build_subdir
        .clone()
        .or_else(|| config.build_subdir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_SUBDIR));

    let mut layout = ReleaseLayout::new(cli.source_root.clone(), destination, build_subdir);
    if let Some(libs) = &config.libs_subdir {
        layout = layout.with_libs_subdir(libs);
    }
    if let Some(root) = &config.asset_root {
        layout = layout.with_asset_root(root.clone());
    }
    layout
}

/// Build the full options for one run
pub fn resolve_options(cli: &Cli, config: &ReleaseConfig) -> AssembleOptions {
    let platform = cli
        .platform
        .or(config.platform)
        .unwrap_or_else(Platform::host);

    AssembleOptions::new(resolve_layout(cli, config))
        .with_contents(config.contents())
        .with_platform(platform)
        .with_dry_run(cli.dry_run)
}
