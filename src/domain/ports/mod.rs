//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod assemble_events;
pub mod file_system;

pub use assemble_events::{AssembleEvent, AssembleEventSink, NoopEventSink, SkipReason};
pub use file_system::{FileSystem, FsError, FsResult};
