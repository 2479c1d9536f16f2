//! In-memory File System
//!
//! A fake file system used to run manifests without touching the disk.
//! Paths are resolved against a virtual working directory (`/work` by
//! default) and normalized, so `./demo` and `/work/demo` are the same entry.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

const DEFAULT_FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File { content: Vec<u8>, mode: u32 },
}

/// In-memory file system
#[derive(Debug)]
pub struct MemoryFs {
    cwd: PathBuf,
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::with_cwd("/work")
    }

    /// Create with a specific virtual working directory (must be absolute)
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        let fs = Self {
            cwd: cwd.into(),
            nodes: RefCell::new(BTreeMap::new()),
        };
        let cwd = fs.cwd.clone();
        fs.insert_dirs(&cwd);
        fs
    }

    /// Add a file (and its parent directories)
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> &Self {
        let path = self.resolve(path.as_ref());
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes.borrow_mut().insert(
            path,
            Node::File {
                content: content.into(),
                mode: DEFAULT_FILE_MODE,
            },
        );
        self
    }

    /// Add an empty directory (and its parents)
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        let path = self.resolve(path.as_ref());
        self.insert_dirs(&path);
        self
    }

    /// Remove a single file; returns whether it existed
    pub fn remove_file(&self, path: impl AsRef<Path>) -> bool {
        let path = self.resolve(path.as_ref());
        let mut nodes = self.nodes.borrow_mut();
        if let Some(Node::File { .. }) = nodes.get(&path) {
            nodes.remove(&path);
            true
        } else {
            false
        }
    }

    /// Content of a file, if it exists
    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(&self.resolve(path.as_ref())) {
            Some(Node::File { content, .. }) => Some(content.clone()),
            _ => None,
        }
    }

    /// Permission bits of a file, if it exists
    pub fn mode(&self, path: impl AsRef<Path>) -> Option<u32> {
        match self.nodes.borrow().get(&self.resolve(path.as_ref())) {
            Some(Node::File { mode, .. }) => Some(*mode),
            _ => None,
        }
    }

    /// Files below `dir`, relative to it, with their content
    pub fn snapshot(&self, dir: impl AsRef<Path>) -> BTreeMap<PathBuf, Vec<u8>> {
        let dir = self.resolve(dir.as_ref());
        self.nodes
            .borrow()
            .iter()
            .filter_map(|(path, node)| match node {
                Node::File { content, .. } if path.starts_with(&dir) => path
                    .strip_prefix(&dir)
                    .ok()
                    .map(|rel| (rel.to_path_buf(), content.clone())),
                _ => None,
            })
            .collect()
    }

    /// Every entry (files and directories) in the whole file system
    pub fn entries(&self) -> Vec<PathBuf> {
        self.nodes.borrow().keys().cloned().collect()
    }

    /// Absolute, normalized path (`.` dropped, `..` applied)
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        };

        let mut out = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    out.pop();
                }
                other => out.push(other.as_os_str()),
            }
        }
        out
    }

    fn insert_dirs(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() || ancestor.parent().is_none() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn parent_is_dir(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if parent.parent().is_some() => {
                matches!(self.nodes.borrow().get(parent), Some(Node::Dir))
            }
            _ => true,
        }
    }
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

fn already_exists(path: &Path) -> FsError {
    FsError::Io(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("{} already exists", path.display()),
    ))
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        let path = self.resolve(path);
        path.parent().is_none() || self.nodes.borrow().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.resolve(path);
        path.parent().is_none() || matches!(self.nodes.borrow().get(&path), Some(Node::Dir))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        let path = self.resolve(path);
        if !self.is_dir(&path) {
            return Err(FsError::NotFound(path));
        }
        self.nodes
            .borrow_mut()
            .retain(|entry, _| !entry.starts_with(&path));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let path = self.resolve(path);
        for ancestor in path.ancestors() {
            if let Some(Node::File { .. }) = self.nodes.borrow().get(ancestor) {
                return Err(already_exists(ancestor));
            }
        }
        self.insert_dirs(&path);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        let from = self.resolve(from);
        let to = self.resolve(to);

        let node = match self.nodes.borrow().get(&from) {
            Some(node @ Node::File { .. }) => node.clone(),
            _ => return Err(FsError::NotFound(from)),
        };
        if !self.parent_is_dir(&to) {
            return Err(FsError::NotFound(to));
        }
        if let Some(Node::Dir) = self.nodes.borrow().get(&to) {
            return Err(already_exists(&to));
        }

        self.nodes.borrow_mut().insert(to, node);
        Ok(())
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> FsResult<()> {
        let from = self.resolve(from);
        let to = self.resolve(to);

        if !self.is_dir(&from) {
            return Err(FsError::NotFound(from));
        }
        if self.exists(&to) {
            return Err(already_exists(&to));
        }

        let copied: Vec<(PathBuf, Node)> = self
            .nodes
            .borrow()
            .iter()
            .filter(|(path, _)| path.starts_with(&from))
            .filter_map(|(path, node)| {
                path.strip_prefix(&from)
                    .ok()
                    .map(|rel| (to.join(rel), node.clone()))
            })
            .collect();

        self.insert_dirs(&to);
        self.nodes.borrow_mut().extend(copied);
        Ok(())
    }

    fn glob_files(&self, dir: &Path, pattern: &str) -> FsResult<Vec<PathBuf>> {
        let dir = self.resolve(dir);
        let pattern = glob::Pattern::new(pattern).map_err(|e| FsError::Pattern(e.to_string()))?;
        let options = super::local::glob_options();

        Ok(self
            .nodes
            .borrow()
            .iter()
            .filter(|(path, node)| {
                matches!(node, Node::File { .. }) && path.parent() == Some(dir.as_path())
            })
            .filter(|(path, _)| {
                path.file_name()
                    .map(|name| pattern.matches_with(&name.to_string_lossy(), options))
                    .unwrap_or(false)
            })
            .map(|(path, _)| path.clone())
            .collect())
    }

    fn walk_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let dir = self.resolve(dir);
        if !self.is_dir(&dir) {
            return Err(FsError::NotFound(dir));
        }

        Ok(self
            .nodes
            .borrow()
            .iter()
            .filter(|(path, node)| matches!(node, Node::File { .. }) && path.starts_with(&dir))
            .map(|(path, _)| path.clone())
            .collect())
    }

    fn set_executable(&self, path: &Path) -> FsResult<()> {
        let path = self.resolve(path);
        match self.nodes.borrow_mut().get_mut(&path) {
            Some(Node::File { mode, .. }) => {
                *mode = 0o777;
                Ok(())
            }
            _ => Err(FsError::NotFound(path)),
        }
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        self.resolve(path)
    }
}
