//! Domain Layer
//!
//! Pure release logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The manifest and what it bundles
//! - `value_objects/` - Platform suffixes and the resolved layout
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
