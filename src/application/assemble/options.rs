//! Assemble Options
//!
//! Configuration types for release assembly.

use crate::domain::entities::ReleaseContents;
use crate::domain::value_objects::{Platform, ReleaseLayout};

/// Options for the assemble use case
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Resolved directories
    pub layout: ReleaseLayout,
    /// What the release bundles
    pub contents: ReleaseContents,
    /// Platform whose suffixes are used
    pub platform: Platform,
    /// Report what would happen without writing
    pub dry_run: bool,
}

impl AssembleOptions {
    pub fn new(layout: ReleaseLayout) -> Self {
        Self {
            layout,
            contents: ReleaseContents::default(),
            platform: Platform::host(),
            dry_run: false,
        }
    }

    pub fn with_contents(mut self, contents: ReleaseContents) -> Self {
        self.contents = contents;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
