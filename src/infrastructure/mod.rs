//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory, DryRun)
//! - `events/` - Event sinks (Console, JSON)

pub mod events;
pub mod fs;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{DryRunFs, LocalFs, MemoryFs};
