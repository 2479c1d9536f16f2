//! Assemble Result

use std::path::PathBuf;

use crate::domain::ports::SkipReason;
use crate::domain::value_objects::Platform;

/// Result of a successful assembly run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleResult {
    /// Release tree that was (re)created
    pub destination: PathBuf,
    /// Platform whose suffixes were used
    pub platform: Platform,
    /// Whether a previous destination was removed first
    pub replaced_existing: bool,
    /// Destination paths of every single-file copy, in order
    pub files: Vec<PathBuf>,
    /// Destination paths of copied trees
    pub trees: Vec<PathBuf>,
    /// Destination paths of secondary libraries
    pub libraries: Vec<PathBuf>,
    /// Discovered libraries that were not copied
    pub skipped: Vec<(PathBuf, SkipReason)>,
    /// Nothing was written
    pub dry_run: bool,
}

impl AssembleResult {
    pub fn new(destination: PathBuf, platform: Platform, dry_run: bool) -> Self {
        Self {
            destination,
            platform,
            replaced_existing: false,
            files: Vec::new(),
            trees: Vec::new(),
            libraries: Vec::new(),
            skipped: Vec::new(),
            dry_run,
        }
    }

    /// Whether the library scan bundled anything
    pub fn found_libraries(&self) -> bool {
        !self.libraries.is_empty()
    }
}
