//! Release Layout Value Object
//!
//! The resolved set of directories one assembly run reads from and writes to.

use std::path::{Path, PathBuf};

pub const DEFAULT_DESTINATION: &str = "ogm-release";
pub const DEFAULT_BUILD_SUBDIR: &str = "build";
pub const DEFAULT_LIBS_SUBDIR: &str = "libs";

/// Directories involved in an assembly run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLayout {
    /// Root of the build tree
    pub source_root: PathBuf,
    /// `source_root/<build_subdir>`: binaries, LICENSE, primary library
    pub build_dir: PathBuf,
    /// `source_root/<libs_subdir>`: optional secondary libraries
    pub libs_dir: PathBuf,
    /// Holds `etc/`, `demo/`, the project LICENSE and `external/`
    pub asset_root: PathBuf,
    /// Release tree to (re)create
    pub destination: PathBuf,
}

impl ReleaseLayout {
    pub fn new(
        source_root: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        build_subdir: impl AsRef<Path>,
    ) -> Self {
        let source_root = source_root.into();
        Self {
            build_dir: source_root.join(build_subdir),
            libs_dir: source_root.join(DEFAULT_LIBS_SUBDIR),
            source_root,
            asset_root: PathBuf::from("."),
            destination: destination.into(),
        }
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn with_libs_subdir(mut self, subdir: impl AsRef<Path>) -> Self {
        self.libs_dir = self.source_root.join(subdir);
        self
    }

    /// Path below the asset root
    pub fn asset(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.asset_root.join(relative)
    }

    /// Path below the build directory
    pub fn build(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.build_dir.join(relative)
    }

    /// Path below the destination
    pub fn dest(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.destination.join(relative)
    }
}

impl Default for ReleaseLayout {
    fn default() -> Self {
        Self::new(".", DEFAULT_DESTINATION, DEFAULT_BUILD_SUBDIR)
    }
}
