//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, ReleaseResult};

use super::types::ReleaseConfig;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    /// The file it was found in
    pub file: PathBuf,
    /// 1-indexed line, if it could be located
    pub line: Option<usize>,
    /// Closest known key, if any is near enough
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ReleaseResult<(ReleaseConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ReleaseError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse already-read content; `path` is only used for diagnostics.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ReleaseResult<(ReleaseConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: ReleaseConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ReleaseError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the config file if one was given, otherwise return defaults.
pub fn load_or_default(path: Option<&Path>) -> ReleaseResult<(ReleaseConfig, Vec<ConfigWarning>)> {
    match path {
        Some(path) => load_with_warnings(path),
        None => Ok((ReleaseConfig::default(), Vec::new())),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "destination",
        "build_subdir",
        "libs_subdir",
        "asset_root",
        "platform",
        "release",
        "executables",
        "primary_library",
        "image_dir",
        "image_patterns",
        "demo_dir",
        "license",
        "name",
        "source",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
