//! Fixture trees shared by scenario tests.

use super::env::TestEnv;

/// License sources, relative to the asset root, with their release names
pub const LICENSE_FILES: &[(&str, &str)] = &[
    ("LICENSE", "LICENSE_opengml"),
    ("external/xbr/xbrjs.license", "LICENSE_xbrjs"),
    ("external/pugixml/LICENCE.md", "LICENSE_pugixml"),
    ("external/include/nlohmann/LICENCE.MIT", "LICENSE_nlohmann"),
    ("external/include/rectpack2D/LICENSE.md", "LICENSE_rectpack2d"),
    ("external/include/simpleini/LICENCE.txt", "LICENSE_simpleini"),
    ("external/include/ThreadPool_zlib_license.txt", "LICENSE_ThreadPool"),
    ("external/include/rapidcsv.license", "LICENSE_rapidcsv"),
    ("external/include/base64.license", "LICENSE_base64"),
    ("external/soloud/LICENSE", "LICENSE_soloud"),
    ("external/crossline/LICENSE", "LICENSE_crossline"),
];

/// Linux build of OpenGML: assets at the project root, binaries under
/// `build_out/build`, one secondary library under `build_out/libs`.
pub fn write_release_tree(env: &TestEnv) {
    env.write_file("etc/icon.png", "png");
    env.write_file("etc/spinner.gif", "gif");
    env.write_file("etc/ogm.ico", "ico");
    env.write_file("etc/notes.txt", "not an image");
    env.write_file("etc/sub/deep.png", "nested");
    env.write_file("etc/._icon.png", "resource fork");
    env.write_file("etc/.thumb.gif", "hidden");

    env.write_file("demo/main.gml", "show_message(\"hi\");");
    env.write_file("demo/sprites/player.png", "sprite");

    for (source, _) in LICENSE_FILES {
        env.write_file(source, &format!("license text of {}", source));
    }

    env.write_file("build_out/build/LICENSE", "MIT");
    env.write_file("build_out/build/ogm", "#!ogm");
    env.write_file("build_out/build/ogm-test", "#!ogm-test");
    env.write_file("build_out/build/gig.so", "gig library");

    env.write_file("build_out/libs/extra.so", "extra library");
}

/// Every file a Linux release of the fixture tree contains, sorted
pub fn expected_linux_release() -> Vec<String> {
    let mut files: Vec<String> = [
        "etc/icon.png",
        "etc/spinner.gif",
        "etc/ogm.ico",
        "demo/main.gml",
        "demo/sprites/player.png",
        "LICENSE",
        "ogm",
        "ogm-test",
        "gig.so",
        "extra.so",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    files.extend(LICENSE_FILES.iter().map(|(_, target)| target.to_string()));
    files.sort();
    files
}
