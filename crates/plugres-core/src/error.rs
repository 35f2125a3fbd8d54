// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for plugin normalization and loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ItemKind;

/// Which position of the input held the malformed plugin item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidItemPosition {
    /// The first element of a tuple item.
    ArrayHead,
    /// A bare element of the plugins list.
    Item,
}

/// The primary error type used across plugres crates.
#[derive(Debug, Error)]
pub enum PlugresError {
    /// A plugin item (or tuple head) has a shape that cannot become a plugin.
    #[error("{}", invalid_item_message(*position, *found))]
    InvalidPluginItem {
        position: InvalidItemPosition,
        found: ItemKind,
    },

    /// No loader could map the name to a plugin.
    #[error("cannot find plugin `{name}`{}", format_searched(searched))]
    ModuleNotFound { name: String, searched: Vec<String> },

    /// A plugin file was found but its contents are not a descriptor.
    #[error("invalid plugin file {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// Filesystem errors while reading a plugin file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Errors raised by a plugin factory while building its descriptor.
    #[error("plugin error: {message}")]
    Plugin {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (invalid values, unparsable arguments).
    #[error("configuration error: {0}")]
    Config(String),
}

impl PlugresError {
    /// Shorthand for a factory failure without an underlying source.
    pub fn plugin(message: impl Into<String>) -> Self {
        PlugresError::Plugin {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true for lookup misses, which chained loaders skip past.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PlugresError::ModuleNotFound { .. })
    }
}

fn invalid_item_message(position: InvalidItemPosition, found: ItemKind) -> String {
    match position {
        InvalidItemPosition::ArrayHead => format!(
            "First item of array should always be function, string or object, got {found}"
        ),
        InvalidItemPosition::Item => format!(
            "Plugin item should be only function, string, object or array, got {found}"
        ),
    }
}

fn format_searched(searched: &[String]) -> String {
    if searched.is_empty() {
        String::new()
    } else {
        format!(" (searched: {})", searched.join(", "))
    }
}
