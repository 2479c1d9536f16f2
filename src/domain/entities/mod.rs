//! Domain Entities
//!
//! - `Manifest` - ordered copy instructions for one release
//! - `ReleaseContents` - what a release bundles
//! - `ThirdPartyLicense` - a bundled license file

mod manifest;

pub use manifest::{default_licenses, CopyStep, Manifest, ReleaseContents, ThirdPartyLicense};
