//! Custom assertion macros for scenario tests.

use std::path::Path;

/// Files below `dir`, relative to it, `/`-separated and sorted
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry.path().strip_prefix(dir).ok().map(|rel| {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy().to_string())
                    .collect::<Vec<_>>()
                    .join("/")
            })
        })
        .collect();
    files.sort();
    files
}

/// Assert that a file exists in the release folder.
///
/// # Example
/// ```ignore
/// assert_released!(env, "ogm-release", "gig.so");
/// ```
#[macro_export]
macro_rules! assert_released {
    ($env:expr, $dest:expr, $path:expr) => {
        let full_path = $env.project_path($dest).join($path);
        assert!(
            full_path.is_file(),
            "Expected '{}' in release folder '{}'.\nFiles found:\n  {}",
            $path,
            $dest,
            $crate::common::list_all_files(&$env.project_path($dest)).join("\n  ")
        );
    };
}

/// Assert that a file is absent from the release folder.
#[macro_export]
macro_rules! assert_not_released {
    ($env:expr, $dest:expr, $path:expr) => {
        let full_path = $env.project_path($dest).join($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist in '{}', but it does.",
            $path,
            $dest
        );
    };
}
