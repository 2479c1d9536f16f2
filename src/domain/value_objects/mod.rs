//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod layout;
mod platform;

pub use layout::{ReleaseLayout, DEFAULT_BUILD_SUBDIR, DEFAULT_DESTINATION, DEFAULT_LIBS_SUBDIR};
pub use platform::{Platform, PlatformSuffixes};
