//! Filesystem port for directory scanning and link-tree construction.

use std::io::{Read, Seek};
use std::path::Path;

/// Byte-addressable read access to an opened file.
///
/// Combines [`Read`] and [`Seek`] so adapters can hand out real file
/// handles or in-memory buffers interchangeably.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// Provides filesystem access for scanning sources and building link trees.
///
/// Abstracting the filesystem allows deterministic testing without
/// touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Opens a file for seekable byte-level reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be opened
    /// for reading.
    fn open(&self, path: &Path)
        -> Result<Box<dyn ReadSeek>, Box<dyn std::error::Error + Send + Sync>>;

    /// Lists the entry names in a directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Creates a directory and any missing parents.
    ///
    /// Already-existing directories are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails (permissions, or a
    /// non-directory entry occupying the path).
    fn create_dir_all(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Creates a symbolic link at `link` pointing to `original`.
    ///
    /// Never overwrites: an existing entry at `link` is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if `link` already exists or its parent directory
    /// is missing.
    fn symlink(
        &self,
        original: &Path,
        link: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
