//! FileSystem port - abstraction over file I/O operations
//!
//! The assembler performs every mutation through this trait so the manifest
//! can run against the local disk or an in-memory fake.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Invalid glob pattern
    Pattern(String),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Convert into a plain `io::Error`, keeping the kind where one exists.
    pub fn into_io(self) -> std::io::Error {
        use std::io::{Error, ErrorKind};
        match self {
            FsError::NotFound(path) => Error::new(
                ErrorKind::NotFound,
                format!("not found: {}", path.display()),
            ),
            FsError::PermissionDenied(path) => Error::new(
                ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ),
            FsError::Pattern(msg) => Error::new(ErrorKind::InvalidInput, msg),
            FsError::Io(err) => err,
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Pattern(msg) => write!(f, "Invalid pattern: {}", msg),
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Check if a path exists (file or directory)
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy one file to an exact destination file path
    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Copy a directory tree; `to` must not exist yet
    fn copy_tree(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Files directly inside `dir` matching `pattern` (non-recursive, sorted)
    fn glob_files(&self, dir: &Path, pattern: &str) -> FsResult<Vec<PathBuf>>;

    /// All files below `dir` (recursive, sorted)
    fn walk_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Grant read/write/execute to owner, group and others
    fn set_executable(&self, path: &Path) -> FsResult<()>;

    /// Absolute, normalized form of `path` (falls back to `path` itself)
    fn canonicalize(&self, path: &Path) -> PathBuf;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_dir_all(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).copy_file(from, to)
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).copy_tree(from, to)
    }

    fn glob_files(&self, dir: &Path, pattern: &str) -> FsResult<Vec<PathBuf>> {
        (**self).glob_files(dir, pattern)
    }

    fn walk_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).walk_files(dir)
    }

    fn set_executable(&self, path: &Path) -> FsResult<()> {
        (**self).set_executable(path)
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        (**self).canonicalize(path)
    }
}
