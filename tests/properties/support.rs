//! In-memory build tree shared by the property tests.

use ogm_release::domain::entities::default_licenses;
use ogm_release::{AssembleOptions, MemoryFs, Platform, ReleaseLayout};

/// A complete Linux build tree below `/work`
pub fn seeded_fs() -> MemoryFs {
    let fs = MemoryFs::new();
    fs.add_file("etc/icon.png", "png")
        .add_file("etc/notes.txt", "txt")
        .add_file("demo/main.gml", "gml")
        .add_file("build_out/build/LICENSE", "MIT")
        .add_file("build_out/build/ogm", "ogm")
        .add_file("build_out/build/ogm-test", "ogm-test")
        .add_file("build_out/build/gig.so", "primary");
    for license in default_licenses() {
        fs.add_file(&license.source, license.name.as_str());
    }
    fs
}

pub fn linux_options() -> AssembleOptions {
    AssembleOptions::new(ReleaseLayout::new("build_out", "ogm-release", "build"))
        .with_platform(Platform::Other)
}
