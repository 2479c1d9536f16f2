//! Property tests for whole-release invariants.

use std::path::Path;

use proptest::prelude::*;

use ogm_release::{AssembleUseCase, FileSystem, ReleaseError, ReleaseLayout};

use crate::support::{linux_options, seeded_fs};

fn junk_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9]{1,8}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: whatever the destination held before, the release afterwards
    /// is the same tree, and running twice changes nothing.
    #[test]
    fn property_release_is_independent_of_previous_destination(
        junk in proptest::collection::vec(junk_path(), 0..6)
    ) {
        let clean = seeded_fs();
        AssembleUseCase::new(&clean).execute(&linux_options()).unwrap();
        let expected = clean.snapshot("ogm-release");

        let dirty = seeded_fs();
        for path in &junk {
            dirty.add_file(format!("ogm-release/{}", path), "stale");
        }
        let use_case = AssembleUseCase::new(&dirty);
        use_case.execute(&linux_options()).unwrap();
        prop_assert_eq!(&dirty.snapshot("ogm-release"), &expected);

        use_case.execute(&linux_options()).unwrap();
        prop_assert_eq!(&dirty.snapshot("ogm-release"), &expected);
    }

    /// PROPERTY: a missing source root fails before anything is touched.
    #[test]
    fn property_missing_source_root_mutates_nothing(
        root in junk_path(),
        junk in proptest::collection::vec(junk_path(), 0..4)
    ) {
        let fs = seeded_fs();
        for path in &junk {
            fs.add_file(format!("ogm-release/{}", path), "keep");
        }
        let missing = format!("missing/{}", root);
        prop_assume!(!fs.exists(Path::new(&missing)));
        let before = fs.entries();

        let mut options = linux_options();
        options.layout = ReleaseLayout::new(missing, "ogm-release", "build");
        let err = AssembleUseCase::new(&fs).execute(&options).unwrap_err();

        let is_source_root_missing = matches!(err, ReleaseError::SourceRootMissing { .. });
        prop_assert!(is_source_root_missing);
        prop_assert_eq!(err.exit_code(), 1);
        prop_assert_eq!(fs.entries(), before);
    }
}
