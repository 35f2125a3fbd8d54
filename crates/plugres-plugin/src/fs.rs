// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem loader with module-style lookup.
//!
//! Path-like names (`./x`, `../x`, `/x`) resolve against the base directory.
//! Bare names are looked up in `<dir>/<modules_dir>/<name>` for the base
//! directory and each of its ancestors, nearest first, and then in every
//! extra search path. Each candidate resolves as a file (exact, then with
//! each extension appended) and then as a directory (`plugin.toml` `main`,
//! then `index.<ext>`).

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use plugres_core::{Loader, PlugresError, ResolvedPlugin};
use tracing::{debug, trace};

use crate::manifest::{PACKAGE_MANIFEST, parse_descriptor, parse_package_manifest};

/// Default directory name searched for bare plugin names.
pub const DEFAULT_MODULES_DIR: &str = "plugins";

/// Default descriptor file extensions, in lookup order.
pub const DEFAULT_EXTENSIONS: &[&str] = &["toml", "json"];

/// Loads plugin descriptors from files on disk.
#[derive(Debug, Clone)]
pub struct FsLoader {
    base_dir: PathBuf,
    modules_dir: String,
    search_paths: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl FsLoader {
    /// Create a loader rooted at `base_dir` with default settings.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            modules_dir: DEFAULT_MODULES_DIR.to_string(),
            search_paths: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn with_modules_dir(mut self, modules_dir: impl Into<String>) -> Self {
        self.modules_dir = modules_dir.into();
        self
    }

    /// Extra directories searched for bare names after the ancestor walk.
    pub fn with_search_paths(mut self, search_paths: Vec<PathBuf>) -> Self {
        self.search_paths = search_paths;
        self
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Find the descriptor file `name` resolves to, without reading it.
    pub fn locate(&self, name: &str) -> Result<PathBuf, PlugresError> {
        let mut searched = Vec::new();

        for candidate in self.candidates(name)? {
            searched.push(candidate.display().to_string());
            if let Some(found) = self.resolve_candidate(&candidate)? {
                debug!(name, path = %found.display(), "located plugin file");
                return Ok(found);
            }
        }

        Err(PlugresError::ModuleNotFound {
            name: name.to_string(),
            searched,
        })
    }

    /// Candidate base paths for `name`, in lookup order.
    fn candidates(&self, name: &str) -> Result<Vec<PathBuf>, PlugresError> {
        let base = std::path::absolute(&self.base_dir).map_err(|source| PlugresError::Io {
            path: self.base_dir.clone(),
            source,
        })?;

        if is_path_like(name) {
            return Ok(vec![base.join(name)]);
        }

        let mut candidates: Vec<PathBuf> = base
            .ancestors()
            .map(|dir| dir.join(&self.modules_dir).join(name))
            .collect();
        candidates.extend(self.search_paths.iter().map(|p| p.join(name)));
        Ok(candidates)
    }

    fn resolve_candidate(&self, candidate: &Path) -> Result<Option<PathBuf>, PlugresError> {
        if let Some(file) = self.try_file(candidate) {
            return Ok(Some(file));
        }
        if candidate.is_dir() {
            return self.try_dir(candidate);
        }
        Ok(None)
    }

    fn try_file(&self, path: &Path) -> Option<PathBuf> {
        trace!(path = %path.display(), "trying plugin candidate");
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        self.extensions
            .iter()
            .map(|ext| with_extension_appended(path, ext))
            .find(|p| p.is_file())
    }

    fn try_dir(&self, dir: &Path) -> Result<Option<PathBuf>, PlugresError> {
        let manifest_path = dir.join(PACKAGE_MANIFEST);
        if manifest_path.is_file() {
            let content = read(&manifest_path)?;
            let manifest = parse_package_manifest(&manifest_path, &content)?;
            if let Some(main) = manifest.main {
                let target = dir.join(main);
                if let Some(found) = self.try_file(&target) {
                    return Ok(Some(found));
                }
                if let Some(found) = self.try_index(&target) {
                    return Ok(Some(found));
                }
                debug!(
                    package = %manifest.name,
                    main = %target.display(),
                    "package main not found, falling back to index"
                );
            }
        }
        Ok(self.try_index(dir))
    }

    fn try_index(&self, dir: &Path) -> Option<PathBuf> {
        self.extensions
            .iter()
            .map(|ext| dir.join(format!("index.{ext}")))
            .find(|p| p.is_file())
    }
}

impl Loader for FsLoader {
    fn resolve(&self, name: &str) -> Result<ResolvedPlugin, PlugresError> {
        let path = self.locate(name)?;
        let content = read(&path)?;
        let descriptor = parse_descriptor(&path, &content)?;
        Ok(ResolvedPlugin::Descriptor(descriptor))
    }
}

fn is_path_like(name: &str) -> bool {
    name == "."
        || name == ".."
        || name.starts_with("./")
        || name.starts_with("../")
        || Path::new(name).is_absolute()
}

fn with_extension_appended(path: &Path, ext: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

fn read(path: &Path) -> Result<String, PlugresError> {
    std::fs::read_to_string(path).map_err(|source| PlugresError::Io {
        path: path.to_path_buf(),
        source,
    })
}
