//! On-disk cache of fetched tile bytes
//!
//! Tiles are stored as `{index}.png` under a single directory that is
//! created on first store. Presence of a file short-circuits the network
//! fetch on later runs; nothing else persists across runs.

use crate::io::error::{Result, StitchError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-per-tile byte cache keyed by tile index
pub struct DiskCache {
    directory: PathBuf,
}

impl DiskCache {
    /// Create a cache rooted at the given directory
    ///
    /// The directory itself is created lazily by the first store.
    pub const fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Directory holding the cached tiles
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the cache entry for a tile index
    pub fn tile_path(&self, index: u32) -> PathBuf {
        self.directory.join(format!("{index}.png"))
    }

    /// Whether a cache entry exists for the given index
    pub fn contains(&self, index: u32) -> bool {
        self.tile_path(index).is_file()
    }

    /// Read previously stored bytes for a tile, if present
    ///
    /// # Errors
    ///
    /// A missing entry is a miss, not an error; any other I/O failure
    /// propagates as a `FileSystem` error.
    pub fn load(&self, index: u32) -> Result<Option<Vec<u8>>> {
        let path = self.tile_path(index);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StitchError::FileSystem {
                path,
                operation: "read cached tile",
                source: e,
            }),
        }
    }

    /// Store fetched bytes for a tile, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error if the directory cannot be created
    /// or the entry cannot be written.
    pub fn store(&self, index: u32, bytes: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.directory).map_err(|e| StitchError::FileSystem {
            path: self.directory.clone(),
            operation: "create cache directory",
            source: e,
        })?;

        let path = self.tile_path(index);
        std::fs::write(&path, bytes).map_err(|e| StitchError::FileSystem {
            path,
            operation: "write cached tile",
            source: e,
        })
    }
}
