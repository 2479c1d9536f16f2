//! Error types for ogm-release
//!
//! Uses `thiserror` for library errors. The CLI maps each error onto an exit
//! status through [`ReleaseError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release operations
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Main error type for release assembly
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Source root is missing or not a directory
    #[error("source root '{path}' is not a directory")]
    SourceRootMissing { path: PathBuf },

    /// Build output directory is missing or not a directory
    #[error("build directory '{path}' is not a directory")]
    BuildDirMissing { path: PathBuf },

    /// Destination would delete an input of the run
    #[error("destination '{destination}' contains input '{input}'; refusing to delete it")]
    DestinationOverlapsInput {
        destination: PathBuf,
        input: PathBuf,
    },

    /// Configuration file could not be read or parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Unknown platform name
    #[error("unknown platform '{name}' (expected windows, macos or other)")]
    UnknownPlatform { name: String },

    /// Removing the previous destination failed
    #[error("failed to remove existing destination {path}")]
    RemoveDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating a directory failed
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying a single file failed
    #[error("failed to copy {from} -> {to}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying a directory tree failed
    #[error("failed to copy tree {from} -> {to}")]
    CopyTree {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Listing a directory failed
    #[error("failed to scan {path}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid glob pattern in the manifest
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Marking a binary executable failed
    #[error("failed to set permissions on {path}")]
    SetPermissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReleaseError {
    /// Errors raised by input validation, before anything is touched.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ReleaseError::SourceRootMissing { .. }
                | ReleaseError::BuildDirMissing { .. }
                | ReleaseError::DestinationOverlapsInput { .. }
                | ReleaseError::InvalidConfig { .. }
                | ReleaseError::UnknownPlatform { .. }
        )
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_invalid_input() {
            1
        } else {
            2
        }
    }

    /// Primary path the error refers to
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ReleaseError::SourceRootMissing { path }
            | ReleaseError::BuildDirMissing { path }
            | ReleaseError::RemoveDestination { path, .. }
            | ReleaseError::CreateDir { path, .. }
            | ReleaseError::Scan { path, .. }
            | ReleaseError::SetPermissions { path, .. } => Some(path),
            ReleaseError::InvalidConfig { file, .. } => Some(file),
            ReleaseError::DestinationOverlapsInput { destination, .. } => Some(destination),
            ReleaseError::Copy { from, .. } | ReleaseError::CopyTree { from, .. } => Some(from),
            ReleaseError::UnknownPlatform { .. } | ReleaseError::InvalidPattern { .. } => None,
        }
    }
}
