//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod dry_run;
mod local;
mod memory;

pub use dry_run::DryRunFs;
pub use local::LocalFs;
pub use memory::MemoryFs;
