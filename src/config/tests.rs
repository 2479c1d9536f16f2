//! Tests for the config module

use super::*;
use crate::domain::entities::{default_licenses, ThirdPartyLicense};
use crate::domain::value_objects::Platform;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_config_default_contents() {
    let config = ReleaseConfig::default();
    let contents = config.contents();

    assert_eq!(contents.executables, vec!["ogm", "ogm-test"]);
    assert_eq!(contents.primary_library, "gig");
    assert_eq!(contents.image_patterns, vec!["*.png", "*.gif", "*.ico"]);
    assert_eq!(contents.licenses, default_licenses());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
destination = "dist/ogm"
build_subdir = "out/release"
platform = "windows"

[release]
executables = ["ogm"]
primary_library = "gig2"
"#;

    let config = ReleaseConfig::from_toml(toml).unwrap();
    assert_eq!(config.destination, Some(PathBuf::from("dist/ogm")));
    assert_eq!(config.build_subdir, Some(PathBuf::from("out/release")));
    assert_eq!(config.platform, Some(Platform::Windows));

    let contents = config.contents();
    assert_eq!(contents.executables, vec!["ogm"]);
    assert_eq!(contents.primary_library, "gig2");
    assert_eq!(contents.demo_dir, PathBuf::from("demo"));
}

#[test]
fn test_license_tables_replace_builtin_list() {
    let toml = r#"
[[license]]
name = "opengml"
source = "LICENSE"

[[license]]
name = "zlib"
source = "external/zlib/LICENSE"
"#;

    let config = ReleaseConfig::from_toml(toml).unwrap();
    let contents = config.contents();
    assert_eq!(
        contents.licenses,
        vec![
            ThirdPartyLicense::new("opengml", "LICENSE"),
            ThirdPartyLicense::new("zlib", "external/zlib/LICENSE"),
        ]
    );
}

#[test]
fn test_platform_alias_linux() {
    let config = ReleaseConfig::from_toml("platform = \"linux\"").unwrap();
    assert_eq!(config.platform, Some(Platform::Other));
}

#[test]
fn test_unknown_keys_become_warnings() {
    let toml = "destnation = \"out\"\n\n[release]\nprimary_libary = \"gig\"\n";
    let (config, warnings) = parse_with_warnings(toml, Path::new("release.toml")).unwrap();

    assert_eq!(config, ReleaseConfig::default());
    assert_eq!(warnings.len(), 2);

    assert_eq!(warnings[0].key, "destnation");
    assert_eq!(warnings[0].line, Some(1));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("destination"));

    assert_eq!(warnings[1].key, "primary_libary");
    assert_eq!(warnings[1].line, Some(4));
    assert_eq!(warnings[1].suggestion.as_deref(), Some("primary_library"));
}

#[test]
fn test_invalid_toml_is_invalid_config() {
    let err = parse_with_warnings("destination = [", Path::new("bad.toml")).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_load_with_warnings_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("release.toml");
    fs::write(&path, "libs_subdir = \"third_party\"\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();
    assert_eq!(config.libs_subdir, Some(PathBuf::from("third_party")));
    assert!(warnings.is_empty());
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempdir().unwrap();
    let err = load_with_warnings(&dir.path().join("missing.toml")).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_load_or_default_without_path() {
    let (config, warnings) = load_or_default(None).unwrap();
    assert_eq!(config, ReleaseConfig::default());
    assert!(warnings.is_empty());
}
