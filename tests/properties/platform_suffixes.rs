//! Property tests for the platform suffix table.

use proptest::prelude::*;

use ogm_release::Platform;

fn base_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,15}").unwrap()
}

fn platform() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::Windows),
        Just(Platform::Macos),
        Just(Platform::Other),
    ]
}

#[test]
fn suffix_table_values() {
    let windows = Platform::Windows.suffixes();
    assert_eq!((windows.executable, windows.library), (".exe", ".dll"));

    let macos = Platform::Macos.suffixes();
    assert_eq!((macos.executable, macos.library), ("", ".dylib"));

    let other = Platform::Other.suffixes();
    assert_eq!((other.executable, other.library), ("", ".so"));
}

proptest! {
    /// PROPERTY: suffixed names keep the base name as prefix.
    #[test]
    fn property_names_extend_base(name in base_name(), platform in platform()) {
        let suffixes = platform.suffixes();

        let exe = suffixes.executable_name(&name);
        let lib = suffixes.library_name(&name);

        prop_assert!(exe.starts_with(&name));
        prop_assert!(lib.starts_with(&name));
        prop_assert_eq!(exe.len(), name.len() + suffixes.executable.len());
        prop_assert!(lib.ends_with(suffixes.library));
    }

    /// PROPERTY: platform names parse back to the same platform.
    #[test]
    fn property_name_parses_back(platform in platform()) {
        let parsed: Platform = platform.name().parse().unwrap();
        prop_assert_eq!(parsed, platform);
    }

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,32}") {
        let _ = s.parse::<Platform>();
    }
}
