//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Attach `path` to the error kinds that carry one.
fn at(path: &Path) -> impl Fn(io::Error) -> FsError + '_ {
    move |err| fs_error(path, err)
}

fn fs_error(path: &Path, err: io::Error) -> FsError {
    match err.kind() {
        io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
        _ => FsError::Io(err),
    }
}

/// Hidden files only match patterns that start with a literal `.`
pub(crate) fn glob_options() -> glob::MatchOptions {
    glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    }
}

fn walk_error(err: walkdir::Error) -> FsError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    match err.into_io_error() {
        Some(io_err) => fs_error(&path, io_err),
        None => FsError::Io(io::Error::other(format!(
            "filesystem loop at {}",
            path.display()
        ))),
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(at(path))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(at(path))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        if !from.is_file() {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        std::fs::copy(from, to).map(|_| ()).map_err(at(to))
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> FsResult<()> {
        if !from.is_dir() {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        if to.exists() {
            return Err(FsError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            )));
        }

        for entry in WalkDir::new(from).follow_links(true) {
            let entry = entry.map_err(walk_error)?;
            let rel = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| FsError::Io(io::Error::other(e.to_string())))?;
            let target = to.join(rel);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target).map_err(at(&target))?;
            } else {
                std::fs::copy(entry.path(), &target).map_err(at(&target))?;
            }
        }

        Ok(())
    }

    fn glob_files(&self, dir: &Path, pattern: &str) -> FsResult<Vec<PathBuf>> {
        let full = format!(
            "{}/{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            pattern
        );
        let paths = glob::glob_with(&full, glob_options())
            .map_err(|e| FsError::Pattern(e.to_string()))?;

        let mut files = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                fs_error(&path, e.into())
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn walk_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(walk_error)?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &Path) -> FsResult<()> {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o777)).map_err(at(path))
    }

    #[cfg(not(unix))]
    fn set_executable(&self, path: &Path) -> FsResult<()> {
        let mut perms = std::fs::metadata(path).map_err(at(path))?.permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        std::fs::set_permissions(path, perms).map_err(at(path))
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        std::fs::canonicalize(path)
            .or_else(|_| std::path::absolute(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
