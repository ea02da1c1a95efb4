//! In-memory [`FileSystem`] holding files, directories and links in maps.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::filesystem::{FileSystem, ReadSeek};

#[derive(Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    links: BTreeMap<PathBuf, PathBuf>,
}

/// Map-backed filesystem whose clones share one tree.
///
/// Tests hold a clone, hand another to a [`ServiceContext`], run the
/// command under test and then inspect the tree through the accessor
/// methods.
///
/// [`ServiceContext`]: crate::context::ServiceContext
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryFileSystem {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the target a link at `link` points to, if one exists.
    #[must_use]
    pub fn link_target(&self, link: &Path) -> Option<PathBuf> {
        let inner = self.inner.lock().expect("filesystem state lock poisoned");
        inner.links.get(link).cloned()
    }

    /// Returns every link in the tree, keyed by link path.
    #[must_use]
    pub fn links(&self) -> BTreeMap<PathBuf, PathBuf> {
        let inner = self.inner.lock().expect("filesystem state lock poisoned");
        inner.links.clone()
    }

    /// Reports whether a directory exists at `path`.
    #[must_use]
    pub fn dir_exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("filesystem state lock poisoned");
        inner.dirs.contains(path)
    }

    /// Returns the contents of the file at `path`, if one exists.
    #[must_use]
    pub fn file_contents(&self, path: &Path) -> Option<String> {
        let inner = self.inner.lock().expect("filesystem state lock poisoned");
        inner.files.get(path).cloned()
    }
}

impl Inner {
    /// Records `path` and every ancestor as directories.
    ///
    /// Fails if any component is already occupied by a file or link.
    fn mkdirs(&mut self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if self.files.contains_key(&current) || self.links.contains_key(&current) {
                return Err(format!("Not a directory: {}", current.display()).into());
            }
            self.dirs.insert(current.clone());
        }
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn open(
        &self,
        path: &Path,
    ) -> Result<Box<dyn ReadSeek>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.lock().expect("filesystem state lock poisoned");
        if inner.dirs.contains(path) {
            return Err(format!("Is a directory: {}", path.display()).into());
        }
        let contents = inner
            .files
            .get(path)
            .ok_or_else(|| format!("No such file: {}", path.display()))?;
        Ok(Box::new(Cursor::new(contents.clone().into_bytes())))
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.lock().expect("filesystem state lock poisoned");
        if !inner.dirs.contains(path) {
            return Err(format!("No such directory: {}", path.display()).into());
        }
        let mut names: Vec<String> = inner
            .files
            .keys()
            .chain(inner.links.keys())
            .chain(inner.dirs.iter())
            .filter(|entry| entry.parent() == Some(path))
            .filter_map(|entry| entry.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn create_dir_all(
        &self,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().expect("filesystem state lock poisoned");
        inner.mkdirs(path)
    }

    fn symlink(
        &self,
        original: &Path,
        link: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().expect("filesystem state lock poisoned");
        if let Some(parent) = link.parent() {
            if !inner.dirs.contains(parent) {
                return Err(format!("No such directory: {}", parent.display()).into());
            }
        }
        if inner.files.contains_key(link)
            || inner.dirs.contains(link)
            || inner.links.contains_key(link)
        {
            return Err(format!("File exists: {}", link.display()).into());
        }
        inner.links.insert(link.to_path_buf(), original.to_path_buf());
        Ok(())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().expect("filesystem state lock poisoned");
        if inner.dirs.contains(path) {
            return Err(format!("Is a directory: {}", path.display()).into());
        }
        if let Some(parent) = path.parent() {
            inner.mkdirs(parent)?;
        }
        inner.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
