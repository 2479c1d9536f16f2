//! Assemble Event Port
//!
//! Provides an observable interface for release assembly.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::Platform;

/// Why a discovered library was not copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Filename starts with the primary library name
    PrimaryLibrary,
    /// File already lives inside the destination
    InsideDestination,
    /// Another library with the same filename was copied first
    Duplicate,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::PrimaryLibrary => "primary library",
            SkipReason::InsideDestination => "already in destination",
            SkipReason::Duplicate => "duplicate filename",
        }
    }
}

/// Event emitted during release assembly
#[derive(Debug, Clone)]
pub enum AssembleEvent {
    /// Assembly started
    Started {
        source_root: PathBuf,
        destination: PathBuf,
        platform: Platform,
        dry_run: bool,
    },

    /// Previous destination is being removed
    RemovingDestination { path: PathBuf },

    /// Destination directory created
    DestinationCreated { path: PathBuf },

    /// Single file copied
    FileCopied { from: PathBuf, to: PathBuf },

    /// Directory tree copied
    TreeCopied { from: PathBuf, to: PathBuf },

    /// Executable permissions applied
    PermissionsSet { path: PathBuf },

    /// Secondary library discovered in the library directory
    LibraryFound { path: PathBuf },

    /// Discovered library was not copied
    LibrarySkipped { path: PathBuf, reason: SkipReason },

    /// Library scan finished
    LibraryScanFinished {
        dir: PathBuf,
        dir_present: bool,
        found: usize,
    },

    /// Assembly completed
    Completed {
        files_copied: usize,
        trees_copied: usize,
        libraries_found: usize,
    },
}

/// Trait for receiving assemble events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait AssembleEventSink: Send + Sync {
    /// Handle an assemble event
    fn on_event(&self, event: AssembleEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl AssembleEventSink for NoopEventSink {
    fn on_event(&self, _event: AssembleEvent) {}
}
