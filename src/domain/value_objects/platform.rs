//! Platform value object - selects executable and shared-library suffixes

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReleaseError;

/// Platform the release is assembled for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows (`.exe` / `.dll`)
    Windows,
    /// macOS (no executable suffix / `.dylib`)
    #[serde(alias = "darwin")]
    #[value(alias = "darwin")]
    Macos,
    /// Linux and everything else (no executable suffix / `.so`)
    #[default]
    #[serde(alias = "linux")]
    #[value(alias = "linux")]
    Other,
}

/// Filename suffixes for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSuffixes {
    /// Appended to executable names (`ogm` -> `ogm.exe`)
    pub executable: &'static str,
    /// Appended to shared library names (`gig` -> `gig.so`)
    pub library: &'static str,
}

impl Platform {
    /// Platform of the running process
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Macos
        } else {
            Platform::Other
        }
    }

    /// Suffix pair for this platform
    pub fn suffixes(&self) -> PlatformSuffixes {
        match self {
            Platform::Windows => PlatformSuffixes {
                executable: ".exe",
                library: ".dll",
            },
            Platform::Macos => PlatformSuffixes {
                executable: "",
                library: ".dylib",
            },
            Platform::Other => PlatformSuffixes {
                executable: "",
                library: ".so",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Macos => "macos",
            Platform::Other => "other",
        }
    }
}

impl PlatformSuffixes {
    /// `name` + executable suffix
    pub fn executable_name(&self, name: &str) -> String {
        format!("{}{}", name, self.executable)
    }

    /// `name` + library suffix
    pub fn library_name(&self, name: &str) -> String {
        format!("{}{}", name, self.library)
    }
}

impl FromStr for Platform {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win" | "nt" => Ok(Platform::Windows),
            "macos" | "darwin" | "osx" => Ok(Platform::Macos),
            "other" | "linux" => Ok(Platform::Other),
            _ => Err(ReleaseError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
