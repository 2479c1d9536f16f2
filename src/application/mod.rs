//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AssembleUseCase` - Validates inputs, recreates the destination and runs the manifest

pub mod assemble;

pub use assemble::{AssembleOptions, AssembleResult, AssembleUseCase};
