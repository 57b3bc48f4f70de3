//! Directory-backed store
//!
//! Lists the files of one directory on every call.

use super::types::{natural_cmp, EntrySource};
use crate::error::{Error, Result};
use crate::types::Entry;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Store over the direct children of a directory
///
/// Subdirectories are not entries. Symlinks are followed when reading sizes.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    /// Directory being listed
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store over the given directory
    ///
    /// The directory is not touched until the first listing.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the directory path
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn unavailable(&self, err: &std::io::Error) -> Error {
        Error::store_unavailable(self.describe(), err.to_string())
    }
}

impl EntrySource for DirectoryStore {
    fn list_all(&self) -> Result<Vec<Entry>> {
        let root = fs::canonicalize(&self.root).map_err(|e| self.unavailable(&e))?;
        let dir = fs::read_dir(&root).map_err(|e| self.unavailable(&e))?;

        let mut entries = Vec::new();
        for item in dir {
            let item = item.map_err(|e| self.unavailable(&e))?;
            let path = item.path();

            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                // Removed (or a dangling link) between read_dir and stat
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!("Skipping vanished entry {}", path.display());
                    continue;
                }
                Err(e) => return Err(self.unavailable(&e)),
            };
            if metadata.is_dir() {
                continue;
            }

            // A lossy name would no longer point at the file
            let file_name = item.file_name();
            let (Some(name), Some(absolute)) = (file_name.to_str(), path.to_str()) else {
                tracing::debug!("Skipping non-UTF-8 entry {}", path.display());
                continue;
            };

            entries.push(Entry::new(name, absolute, metadata.len()));
        }

        entries.sort_by(|a, b| natural_cmp(&a.display_name, &b.display_name));
        tracing::trace!("Listed {} entries from {}", entries.len(), root.display());

        Ok(entries)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
