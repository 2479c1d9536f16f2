//! Dry-run File System
//!
//! Wraps another file system: reads pass through, writes only check that
//! their source exists. Running a manifest through it surfaces missing
//! artifacts without touching the destination.

use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Clone, Default)]
pub struct DryRunFs<F: FileSystem> {
    inner: F,
}

impl<F: FileSystem> DryRunFs<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: FileSystem> FileSystem for DryRunFs<F> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn remove_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }

    fn copy_file(&self, from: &Path, _to: &Path) -> FsResult<()> {
        if self.inner.exists(from) && !self.inner.is_dir(from) {
            Ok(())
        } else {
            Err(FsError::NotFound(from.to_path_buf()))
        }
    }

    fn copy_tree(&self, from: &Path, _to: &Path) -> FsResult<()> {
        if self.inner.is_dir(from) {
            Ok(())
        } else {
            Err(FsError::NotFound(from.to_path_buf()))
        }
    }

    fn glob_files(&self, dir: &Path, pattern: &str) -> FsResult<Vec<PathBuf>> {
        self.inner.glob_files(dir, pattern)
    }

    fn walk_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        self.inner.walk_files(dir)
    }

    fn set_executable(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        self.inner.canonicalize(path)
    }
}
