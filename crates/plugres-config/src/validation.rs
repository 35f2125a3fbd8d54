// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde cannot express: loader directory and
//! extension shapes, known log levels, and the shape of `plugins` entries.

use serde_json::Value;

use crate::diagnostic::ConfigError;
use crate::model::PlugresConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &PlugresConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let modules_dir = config.loader.modules_dir.trim();
    if modules_dir.is_empty() {
        errors.push(validation("loader.modules_dir must not be empty"));
    } else if modules_dir.contains(['/', '\\']) || modules_dir == "." || modules_dir == ".." {
        errors.push(validation(format!(
            "loader.modules_dir `{modules_dir}` must be a single directory name"
        )));
    }

    if config.loader.extensions.is_empty() {
        errors.push(validation("loader.extensions must list at least one extension"));
    }
    for (i, ext) in config.loader.extensions.iter().enumerate() {
        if ext.trim().is_empty() {
            errors.push(validation(format!("loader.extensions[{i}] must not be empty")));
        } else if ext.starts_with('.') {
            errors.push(validation(format!(
                "loader.extensions[{i}] `{ext}` must not start with a dot"
            )));
        }
    }

    if !LOG_LEVELS.contains(&config.log.level.to_ascii_lowercase().as_str()) {
        errors.push(validation(format!(
            "log.level `{}` is not one of: {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        )));
    }

    for (i, plugin) in config.plugins.iter().enumerate() {
        if let Some(kind) = unusable_plugin_kind(plugin) {
            errors.push(validation(format!(
                "plugins[{i}] must be a string, table or array, got {kind}"
            )));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Truthy scalars cannot become plugins; falsey ones are skipped later.
fn unusable_plugin_kind(plugin: &Value) -> Option<&'static str> {
    match plugin {
        Value::Bool(true) => Some("boolean"),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some("number"),
        _ => None,
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}
