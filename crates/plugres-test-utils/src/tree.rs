// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temporary plugin file trees.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory populated with plugin files.
///
/// The directory is removed when the tree is dropped.
pub struct FixtureTree {
    dir: TempDir,
}

impl FixtureTree {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn file(&self, rel: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Builder-style variant of [`file`](Self::file).
    pub fn with_file(self, rel: &str, contents: &str) -> io::Result<Self> {
        self.file(rel, contents)?;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
