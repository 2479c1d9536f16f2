//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ReleaseContents, ThirdPartyLicense};
use crate::domain::value_objects::Platform;

/// Contents overrides (`[release]` table)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentsConfig {
    pub executables: Option<Vec<String>>,
    pub primary_library: Option<String>,
    pub image_dir: Option<PathBuf>,
    pub image_patterns: Option<Vec<String>>,
    pub demo_dir: Option<PathBuf>,
}

/// Release configuration file
///
/// Every key is optional; anything left out falls back to the built-in
/// OpenGML release layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Release tree to create
    pub destination: Option<PathBuf>,
    /// Build output directory, relative to the source root
    pub build_subdir: Option<PathBuf>,
    /// Secondary library directory, relative to the source root
    pub libs_subdir: Option<PathBuf>,
    /// Directory holding `etc/`, `demo/` and `external/`
    pub asset_root: Option<PathBuf>,
    /// Platform to assemble for (defaults to the host)
    pub platform: Option<Platform>,

    pub release: ContentsConfig,

    /// Replaces the built-in license list when non-empty
    #[serde(rename = "license")]
    pub licenses: Vec<ThirdPartyLicense>,
}

impl ReleaseConfig {
    /// Parse from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve bundled contents against the built-in defaults
    pub fn contents(&self) -> ReleaseContents {
        let defaults = ReleaseContents::default();
        let release = &self.release;

        ReleaseContents {
            executables: release
                .executables
                .clone()
                .unwrap_or(defaults.executables),
            primary_library: release
                .primary_library
                .clone()
                .unwrap_or(defaults.primary_library),
            image_dir: release.image_dir.clone().unwrap_or(defaults.image_dir),
            image_patterns: release
                .image_patterns
                .clone()
                .unwrap_or(defaults.image_patterns),
            demo_dir: release.demo_dir.clone().unwrap_or(defaults.demo_dir),
            licenses: if self.licenses.is_empty() {
                defaults.licenses
            } else {
                self.licenses.clone()
            },
        }
    }
}
