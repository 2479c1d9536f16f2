//! Assemble Use Case
//!
//! Orchestrates a release run:
//! 1. Validate the source root, build directory and destination
//! 2. Build the manifest for the selected platform
//! 3. Remove and recreate the destination
//! 4. Execute every copy step in order
//!
//! Any failure after validation aborts the run and may leave a partially
//! populated destination behind.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::entities::{CopyStep, Manifest};
use crate::domain::ports::{
    AssembleEvent, AssembleEventSink, FileSystem, FsError, NoopEventSink, SkipReason,
};
use crate::domain::value_objects::ReleaseLayout;
use crate::error::{ReleaseError, ReleaseResult};
use crate::infrastructure::fs::DryRunFs;

use super::options::AssembleOptions;
use super::result::AssembleResult;

/// Assemble use case - stages a release tree through a `FileSystem` port
pub struct AssembleUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> AssembleUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Check the preconditions; nothing is touched on failure.
    pub fn validate(&self, layout: &ReleaseLayout) -> ReleaseResult<()> {
        if !self.file_system.is_dir(&layout.source_root) {
            return Err(ReleaseError::SourceRootMissing {
                path: layout.source_root.clone(),
            });
        }
        if !self.file_system.is_dir(&layout.build_dir) {
            return Err(ReleaseError::BuildDirMissing {
                path: layout.build_dir.clone(),
            });
        }

        // The destination is wiped, so it must not be or contain an input.
        let destination = self.file_system.canonicalize(&layout.destination);
        for input in [&layout.source_root, &layout.build_dir, &layout.asset_root] {
            if self.file_system.canonicalize(input).starts_with(&destination) {
                return Err(ReleaseError::DestinationOverlapsInput {
                    destination: layout.destination.clone(),
                    input: input.clone(),
                });
            }
        }
        Ok(())
    }

    /// Manifest the options resolve to
    pub fn plan(&self, options: &AssembleOptions) -> Manifest {
        Manifest::build(
            &options.layout,
            &options.contents,
            options.platform.suffixes(),
        )
    }

    /// Execute the use case silently
    pub fn execute(&self, options: &AssembleOptions) -> ReleaseResult<AssembleResult> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute the use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &AssembleOptions,
        events: &dyn AssembleEventSink,
    ) -> ReleaseResult<AssembleResult> {
        self.validate(&options.layout)?;
        let manifest = self.plan(options);

        if options.dry_run {
            let fs = DryRunFs::new(&self.file_system);
            Run::new(&fs, options, events).execute(&manifest)
        } else {
            Run::new(&self.file_system, options, events).execute(&manifest)
        }
    }
}

/// State of a single run
struct Run<'a, F: FileSystem> {
    fs: &'a F,
    options: &'a AssembleOptions,
    events: &'a dyn AssembleEventSink,
    result: AssembleResult,
}

impl<'a, F: FileSystem> Run<'a, F> {
    fn new(fs: &'a F, options: &'a AssembleOptions, events: &'a dyn AssembleEventSink) -> Self {
        let result = AssembleResult::new(
            options.layout.destination.clone(),
            options.platform,
            options.dry_run,
        );
        Self {
            fs,
            options,
            events,
            result,
        }
    }

    fn execute(mut self, manifest: &Manifest) -> ReleaseResult<AssembleResult> {
        let destination = self.options.layout.destination.clone();

        self.events.on_event(AssembleEvent::Started {
            source_root: self.options.layout.source_root.clone(),
            destination: destination.clone(),
            platform: self.options.platform,
            dry_run: self.options.dry_run,
        });

        self.recreate_destination(&destination)?;

        for step in manifest {
            self.run_step(step)?;
        }

        self.events.on_event(AssembleEvent::Completed {
            files_copied: self.result.files.len(),
            trees_copied: self.result.trees.len(),
            libraries_found: self.result.libraries.len(),
        });

        Ok(self.result)
    }

    fn recreate_destination(&mut self, destination: &Path) -> ReleaseResult<()> {
        if self.fs.exists(destination) {
            self.events.on_event(AssembleEvent::RemovingDestination {
                path: destination.to_path_buf(),
            });
            self.fs
                .remove_dir_all(destination)
                .map_err(|e| ReleaseError::RemoveDestination {
                    path: destination.to_path_buf(),
                    source: e.into_io(),
                })?;
            self.result.replaced_existing = true;
        }

        self.create_dir(destination)?;
        self.events.on_event(AssembleEvent::DestinationCreated {
            path: destination.to_path_buf(),
        });
        Ok(())
    }

    fn run_step(&mut self, step: &CopyStep) -> ReleaseResult<()> {
        match step {
            CopyStep::Glob {
                dir,
                patterns,
                to_dir,
            } => self.copy_glob(dir, patterns, to_dir),
            CopyStep::Tree { from, to } => self.copy_tree(from, to),
            CopyStep::File {
                from,
                to,
                executable,
            } => {
                self.copy_file(from, to)?;
                if *executable {
                    self.make_executable(to)?;
                }
                Ok(())
            }
            CopyStep::LibraryScan {
                dir,
                suffix,
                exclude_prefix,
                to_dir,
            } => self.scan_libraries(dir, suffix, exclude_prefix, to_dir),
        }
    }

    fn create_dir(&self, path: &Path) -> ReleaseResult<()> {
        self.fs
            .create_dir_all(path)
            .map_err(|e| ReleaseError::CreateDir {
                path: path.to_path_buf(),
                source: e.into_io(),
            })
    }

    fn copy_glob(&mut self, dir: &Path, patterns: &[String], to_dir: &Path) -> ReleaseResult<()> {
        self.create_dir(to_dir)?;

        for pattern in patterns {
            let matches = self.fs.glob_files(dir, pattern).map_err(|e| match e {
                FsError::Pattern(message) => ReleaseError::InvalidPattern {
                    pattern: pattern.clone(),
                    message,
                },
                other => ReleaseError::Scan {
                    path: dir.to_path_buf(),
                    source: other.into_io(),
                },
            })?;

            for file in matches {
                let Some(name) = file.file_name() else {
                    continue;
                };
                let to = to_dir.join(name);
                self.copy_file(&file, &to)?;
            }
        }
        Ok(())
    }

    fn copy_tree(&mut self, from: &Path, to: &Path) -> ReleaseResult<()> {
        self.fs
            .copy_tree(from, to)
            .map_err(|e| ReleaseError::CopyTree {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source: e.into_io(),
            })?;
        self.events.on_event(AssembleEvent::TreeCopied {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        self.result.trees.push(to.to_path_buf());
        Ok(())
    }

    fn copy_file(&mut self, from: &Path, to: &Path) -> ReleaseResult<()> {
        self.fs
            .copy_file(from, to)
            .map_err(|e| ReleaseError::Copy {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source: e.into_io(),
            })?;
        self.events.on_event(AssembleEvent::FileCopied {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        self.result.files.push(to.to_path_buf());
        Ok(())
    }

    fn make_executable(&mut self, path: &Path) -> ReleaseResult<()> {
        self.fs
            .set_executable(path)
            .map_err(|e| ReleaseError::SetPermissions {
                path: path.to_path_buf(),
                source: e.into_io(),
            })?;
        self.events.on_event(AssembleEvent::PermissionsSet {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    fn scan_libraries(
        &mut self,
        dir: &Path,
        suffix: &str,
        exclude_prefix: &str,
        to_dir: &Path,
    ) -> ReleaseResult<()> {
        if !self.fs.is_dir(dir) {
            self.events.on_event(AssembleEvent::LibraryScanFinished {
                dir: dir.to_path_buf(),
                dir_present: false,
                found: 0,
            });
            return Ok(());
        }

        let candidates = self.fs.walk_files(dir).map_err(|e| ReleaseError::Scan {
            path: dir.to_path_buf(),
            source: e.into_io(),
        })?;
        let destination = self.fs.canonicalize(to_dir);
        let mut copied_names: HashSet<OsString> = HashSet::new();
        let mut found = 0;

        for path in candidates {
            let Some(name) = path.file_name().map(|n| n.to_os_string()) else {
                continue;
            };
            let name_str = name.to_string_lossy();
            if !name_str.ends_with(suffix) {
                continue;
            }

            let skip = if name_str.starts_with(exclude_prefix) {
                Some(SkipReason::PrimaryLibrary)
            } else if self.fs.canonicalize(&path).starts_with(&destination) {
                Some(SkipReason::InsideDestination)
            } else if copied_names.contains(&name) {
                Some(SkipReason::Duplicate)
            } else {
                None
            };

            if let Some(reason) = skip {
                self.events.on_event(AssembleEvent::LibrarySkipped {
                    path: path.clone(),
                    reason,
                });
                self.result.skipped.push((path, reason));
                continue;
            }

            self.events
                .on_event(AssembleEvent::LibraryFound { path: path.clone() });
            let to: PathBuf = to_dir.join(&name);
            self.copy_file(&path, &to)?;
            self.result.libraries.push(to);
            copied_names.insert(name);
            found += 1;
        }

        self.events.on_event(AssembleEvent::LibraryScanFinished {
            dir: dir.to_path_buf(),
            dir_present: true,
            found,
        });
        Ok(())
    }
}
