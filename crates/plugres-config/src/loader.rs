// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./plugres.toml` > `~/.config/plugres/plugres.toml` > `/etc/plugres/plugres.toml`
//! with environment variable overrides via `PLUGRES_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PlugresConfig;

/// Config sections that env var keys are split on.
const SECTIONS: &[&str] = &["resolve", "loader", "log"];

/// System-wide config file.
pub const SYSTEM_CONFIG: &str = "/etc/plugres/plugres.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG: &str = "plugres.toml";

/// Per-user config file under the XDG config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("plugres/plugres.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/plugres/plugres.toml`
/// 3. `~/.config/plugres/plugres.toml`
/// 4. `./plugres.toml`
/// 5. `PLUGRES_*` environment variables
pub fn load_config() -> Result<PlugresConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<PlugresConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlugresConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PlugresConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlugresConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PlugresConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Environment provider mapping `PLUGRES_<SECTION>_<KEY>` to `section.key`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `PLUGRES_LOADER_MODULES_DIR` maps to `loader.modules_dir`.
fn env_provider() -> Env {
    Env::prefixed("PLUGRES_").map(|key| map_env_key(key.as_str()).into())
}

/// Figment hands over keys in their original case, so matching is done on
/// the lowercased key.
fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    SECTIONS
        .iter()
        .find_map(|section| {
            key.strip_prefix(section)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|rest| format!("{section}.{rest}"))
        })
        .unwrap_or(key)
}
