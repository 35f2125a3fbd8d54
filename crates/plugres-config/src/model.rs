// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so misspelled keys are
//! reported instead of silently ignored.

use std::path::PathBuf;

use plugres_core::NormalizeOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level plugres configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlugresConfig {
    /// Plugin items to normalize when none are given on the command line.
    /// Entries may be names, tables (descriptors), or `[name, options]` arrays.
    #[serde(default)]
    pub plugins: Vec<Value>,

    /// Normalization options.
    #[serde(default)]
    pub resolve: ResolveConfig,

    /// Filesystem loader settings.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Options applied to every normalization call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveConfig {
    /// Prepended verbatim to plugin names before lookup.
    #[serde(default)]
    pub prefix: String,

    /// First invocation argument for factories (usually a filename).
    #[serde(default)]
    pub first: Option<Value>,

    /// Argument list used for every factory, overriding `first` and
    /// per-item options when non-empty.
    #[serde(default)]
    pub args: Vec<Value>,
}

impl From<&ResolveConfig> for NormalizeOptions {
    fn from(config: &ResolveConfig) -> Self {
        NormalizeOptions {
            prefix: config.prefix.clone(),
            first: config.first.clone(),
            args: config.args.clone(),
        }
    }
}

impl ResolveConfig {
    pub fn to_options(&self) -> NormalizeOptions {
        self.into()
    }
}

/// Filesystem loader configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Directory relative names resolve against. Defaults to the working directory.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Directory name searched in the base directory and its ancestors.
    #[serde(default = "default_modules_dir")]
    pub modules_dir: String,

    /// Extra directories searched for bare names.
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,

    /// Descriptor file extensions, without the leading dot, in lookup order.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            modules_dir: default_modules_dir(),
            search_paths: Vec::new(),
            extensions: default_extensions(),
        }
    }
}

fn default_modules_dir() -> String {
    "plugins".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["toml".to_string(), "json".to_string()]
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
