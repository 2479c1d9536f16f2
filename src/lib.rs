//! ogm-release - release folder assembler for OpenGML builds
//!
//! Stages a self-contained distributable folder from a build tree: the
//! destination is recreated from scratch, then a fixed manifest of binaries,
//! shared libraries, demo assets and license files is copied into it with
//! platform-specific filename suffixes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AssembleOptions, AssembleResult, AssembleUseCase};
pub use config::{ConfigWarning, ReleaseConfig};
pub use domain::entities::{CopyStep, Manifest, ReleaseContents, ThirdPartyLicense};
pub use domain::ports::{AssembleEvent, AssembleEventSink, FileSystem, SkipReason};
pub use domain::value_objects::{Platform, PlatformSuffixes, ReleaseLayout};
pub use error::{ReleaseError, ReleaseResult};
pub use infrastructure::{ConsoleEventSink, DryRunFs, JsonEventSink, LocalFs, MemoryFs};
