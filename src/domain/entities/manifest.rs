//! Manifest entity - the ordered copy instructions that make up a release
//!
//! The sequence of a release is data: [`Manifest::build`] turns a layout,
//! the bundled contents and a suffix pair into a list of [`CopyStep`]s that
//! the assembler executes front to back.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{PlatformSuffixes, ReleaseLayout};

/// A bundled third-party license, shipped as `LICENSE_<name>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPartyLicense {
    /// Component name used in the target filename
    pub name: String,
    /// Path relative to the asset root
    pub source: PathBuf,
}

impl ThirdPartyLicense {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Filename inside the release tree
    pub fn target_name(&self) -> String {
        format!("LICENSE_{}", self.name)
    }
}

/// License files of every component bundled with the engine
pub fn default_licenses() -> Vec<ThirdPartyLicense> {
    [
        ("opengml", "LICENSE"),
        ("xbrjs", "external/xbr/xbrjs.license"),
        ("pugixml", "external/pugixml/LICENCE.md"),
        ("nlohmann", "external/include/nlohmann/LICENCE.MIT"),
        ("rectpack2d", "external/include/rectpack2D/LICENSE.md"),
        ("simpleini", "external/include/simpleini/LICENCE.txt"),
        ("ThreadPool", "external/include/ThreadPool_zlib_license.txt"),
        ("rapidcsv", "external/include/rapidcsv.license"),
        ("base64", "external/include/base64.license"),
        ("soloud", "external/soloud/LICENSE"),
        ("crossline", "external/crossline/LICENSE"),
    ]
    .into_iter()
    .map(|(name, source)| ThirdPartyLicense::new(name, source))
    .collect()
}

/// What goes into a release, independent of where it is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContents {
    /// Executable base names, copied from the build dir
    pub executables: Vec<String>,
    /// Base name of the library that is always bundled
    pub primary_library: String,
    /// Directory (under the asset root) holding image assets
    pub image_dir: PathBuf,
    /// Non-recursive patterns selecting image assets
    pub image_patterns: Vec<String>,
    /// Demo tree (under the asset root)
    pub demo_dir: PathBuf,
    /// Third-party licenses
    pub licenses: Vec<ThirdPartyLicense>,
}

impl Default for ReleaseContents {
    fn default() -> Self {
        Self {
            executables: vec!["ogm".to_string(), "ogm-test".to_string()],
            primary_library: "gig".to_string(),
            image_dir: PathBuf::from("etc"),
            image_patterns: vec!["*.png".into(), "*.gif".into(), "*.ico".into()],
            demo_dir: PathBuf::from("demo"),
            licenses: default_licenses(),
        }
    }
}

/// A single declarative copy instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStep {
    /// Copy files in `dir` matching any of `patterns` into `to_dir`
    Glob {
        dir: PathBuf,
        patterns: Vec<String>,
        to_dir: PathBuf,
    },
    /// Copy a whole directory tree
    Tree { from: PathBuf, to: PathBuf },
    /// Copy one file, optionally marking it executable afterwards
    File {
        from: PathBuf,
        to: PathBuf,
        executable: bool,
    },
    /// Flatten every `*<suffix>` file below `dir` into `to_dir`
    LibraryScan {
        dir: PathBuf,
        suffix: String,
        exclude_prefix: String,
        to_dir: PathBuf,
    },
}

impl fmt::Display for CopyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyStep::Glob {
                dir,
                patterns,
                to_dir,
            } => write!(
                f,
                "glob {} [{}] -> {}",
                dir.display(),
                patterns.join(", "),
                to_dir.display()
            ),
            CopyStep::Tree { from, to } => {
                write!(f, "copytree {} -> {}", from.display(), to.display())
            }
            CopyStep::File {
                from,
                to,
                executable,
            } => {
                write!(f, "copy {} -> {}", from.display(), to.display())?;
                if *executable {
                    write!(f, " (0o777)")?;
                }
                Ok(())
            }
            CopyStep::LibraryScan {
                dir,
                suffix,
                exclude_prefix,
                to_dir,
            } => write!(
                f,
                "scan {} for *{} (excluding {}*) -> {}",
                dir.display(),
                suffix,
                exclude_prefix,
                to_dir.display()
            ),
        }
    }
}

/// Ordered copy instructions for one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    steps: Vec<CopyStep>,
}

impl Manifest {
    /// Build the release manifest for `layout` using `suffixes`.
    pub fn build(
        layout: &ReleaseLayout,
        contents: &ReleaseContents,
        suffixes: PlatformSuffixes,
    ) -> Self {
        let mut steps = Vec::new();

        steps.push(CopyStep::Glob {
            dir: layout.asset(&contents.image_dir),
            patterns: contents.image_patterns.clone(),
            to_dir: layout.dest("etc"),
        });

        steps.push(CopyStep::Tree {
            from: layout.asset(&contents.demo_dir),
            to: layout.dest("demo"),
        });

        steps.push(CopyStep::File {
            from: layout.build("LICENSE"),
            to: layout.dest("LICENSE"),
            executable: false,
        });

        for exe in &contents.executables {
            let name = suffixes.executable_name(exe);
            steps.push(CopyStep::File {
                from: layout.build(&name),
                to: layout.dest(&name),
                executable: true,
            });
        }

        let primary = suffixes.library_name(&contents.primary_library);
        steps.push(CopyStep::File {
            from: layout.build(&primary),
            to: layout.dest(&primary),
            executable: false,
        });

        steps.push(CopyStep::LibraryScan {
            dir: layout.libs_dir.clone(),
            suffix: suffixes.library.to_string(),
            exclude_prefix: contents.primary_library.clone(),
            to_dir: layout.destination.clone(),
        });

        for license in &contents.licenses {
            steps.push(CopyStep::File {
                from: layout.asset(&license.source),
                to: layout.dest(license.target_name()),
                executable: false,
            });
        }

        Self { steps }
    }

    pub fn steps(&self) -> &[CopyStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every fixed source path the manifest reads (globs and scans excluded)
    pub fn required_sources(&self) -> Vec<&Path> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                CopyStep::Tree { from, .. } | CopyStep::File { from, .. } => Some(from.as_path()),
                _ => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a CopyStep;
    type IntoIter = std::slice::Iter<'a, CopyStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
