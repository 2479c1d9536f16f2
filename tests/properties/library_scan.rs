//! Property tests for the secondary library scan.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ogm_release::AssembleUseCase;

use crate::support::{linux_options, seeded_fs};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

/// Relative path below `libs/`: up to two directories and a file name
/// that may or may not carry the library suffix or the primary prefix.
fn lib_entry() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(segment(), 0..=2),
        prop_oneof![Just(""), Just("gig")],
        segment(),
        prop_oneof![Just(".so"), Just(".so.1"), Just(".txt"), Just(".dll")],
    )
        .prop_map(|(dirs, prefix, stem, ext)| {
            let mut parts = dirs;
            parts.push(format!("{}{}{}", prefix, stem, ext));
            parts.join("/")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the release holds exactly one copy of each eligible library
    /// name, the primary library is only ever the one from the build dir,
    /// and nothing without the exact suffix is picked up.
    #[test]
    fn property_libraries_are_flattened_and_filtered(
        entries in proptest::collection::vec(lib_entry(), 0..12)
    ) {
        let fs = seeded_fs();
        for entry in &entries {
            fs.add_file(format!("build_out/libs/{}", entry), entry.as_str());
        }

        let result = AssembleUseCase::new(&fs).execute(&linux_options()).unwrap();

        let expected: BTreeSet<String> = entries
            .iter()
            .filter_map(|e| e.rsplit('/').next())
            .filter(|name| name.ends_with(".so") && !name.starts_with("gig"))
            .map(str::to_string)
            .collect();
        let copied: BTreeSet<String> = result
            .libraries
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect();

        prop_assert_eq!(&copied, &expected);
        prop_assert_eq!(result.libraries.len(), expected.len());
        prop_assert_eq!(fs.read("ogm-release/gig.so"), Some(b"primary".to_vec()));

        let top_level: Vec<String> = fs
            .snapshot("ogm-release")
            .keys()
            .filter(|p| p.parent().map(|d| d.as_os_str().is_empty()).unwrap_or(false))
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        for name in top_level {
            prop_assert!(!name.ends_with(".so.1") && !name.ends_with(".txt") && !name.ends_with(".dll"));
        }
    }
}
