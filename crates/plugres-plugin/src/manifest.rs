// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of plugin files and `plugin.toml` package manifests.
//!
//! A plugin file holds a single descriptor object in TOML or JSON. A plugin
//! directory may carry a `plugin.toml` whose `main` key points at the
//! descriptor file to load instead of `index.<ext>`.

use std::path::Path;

use plugres_core::{PluginDescriptor, PlugresError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// File name of the package manifest inside a plugin directory.
pub const PACKAGE_MANIFEST: &str = "plugin.toml";

/// Parsed package manifest of a plugin directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Package name (e.g., "eslint-config-standard").
    pub name: String,
    /// Version string.
    pub version: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Descriptor file relative to the directory.
    pub main: Option<String>,
}

/// Intermediate TOML deserialization struct for `plugin.toml`.
#[derive(Debug, Deserialize)]
struct PackageManifestFile {
    plugin: PackageSection,
}

/// The `[plugin]` section of a `plugin.toml` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PackageSection {
    name: String,
    version: String,
    description: Option<String>,
    main: Option<String>,
}

/// Parse a package manifest from TOML content.
///
/// Name and version must be non-empty, and `main` must not be blank when
/// present.
pub fn parse_package_manifest(path: &Path, toml_content: &str) -> Result<PackageManifest, PlugresError> {
    let file: PackageManifestFile = toml::from_str(toml_content).map_err(|e| PlugresError::Manifest {
        path: path.to_path_buf(),
        message: format!("invalid package manifest: {e}"),
    })?;

    let section = file.plugin;

    if section.name.trim().is_empty() {
        return Err(manifest_error(path, "name must not be empty"));
    }

    if section.version.trim().is_empty() {
        return Err(manifest_error(path, "version must not be empty"));
    }

    if section.main.as_deref().is_some_and(|m| m.trim().is_empty()) {
        return Err(manifest_error(path, "main must not be empty when set"));
    }

    Ok(PackageManifest {
        name: section.name,
        version: section.version,
        description: section.description,
        main: section.main,
    })
}

/// Parse a descriptor file, choosing the format from the extension.
///
/// `.toml` and `.json` are parsed strictly; any other extension is tried as
/// JSON first, then TOML. The document root must be an object.
pub fn parse_descriptor(path: &Path, content: &str) -> Result<PluginDescriptor, PlugresError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

    let value: Value = match extension {
        "toml" => toml::from_str(content).map_err(|e| manifest_error(path, &format!("invalid TOML: {e}")))?,
        "json" => {
            serde_json::from_str(content).map_err(|e| manifest_error(path, &format!("invalid JSON: {e}")))?
        }
        _ => serde_json::from_str(content)
            .or_else(|_| toml::from_str(content))
            .map_err(|_| manifest_error(path, "contents are neither JSON nor TOML"))?,
    };

    PluginDescriptor::try_from(value).map_err(|other| {
        manifest_error(
            path,
            &format!("plugin file must contain an object, found {}", json_type(&other)),
        )
    })
}

fn manifest_error(path: &Path, message: &str) -> PlugresError {
    PlugresError::Manifest {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_valid_package_manifest() {
        let toml = r#"
[plugin]
name = "eslint-config-standard"
version = "1.0.0"
description = "Standard rules"
main = "config.json"
"#;
        let manifest = parse_package_manifest(Path::new("plugin.toml"), toml).unwrap();
        assert_eq!(manifest.name, "eslint-config-standard");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.main.as_deref(), Some("config.json"));
        assert_eq!(manifest.description.as_deref(), Some("Standard rules"));
    }

    #[test]
    fn parse_minimal_package_manifest() {
        let toml = r#"
[plugin]
name = "minimal"
version = "0.1.0"
"#;
        let manifest = parse_package_manifest(Path::new("plugin.toml"), toml).unwrap();
        assert!(manifest.main.is_none());
        assert!(manifest.description.is_none());
    }

    #[test]
    fn package_manifest_requires_name() {
        let toml = r#"
[plugin]
name = ""
version = "0.1.0"
"#;
        let err = parse_package_manifest(Path::new("plugin.toml"), toml)
            .unwrap_err()
            .to_string();
        assert!(err.contains("name must not be empty"));
    }

    #[test]
    fn package_manifest_rejects_blank_main() {
        let toml = r#"
[plugin]
name = "x"
version = "0.1.0"
main = "  "
"#;
        let err = parse_package_manifest(Path::new("plugin.toml"), toml)
            .unwrap_err()
            .to_string();
        assert!(err.contains("main must not be empty"));
    }

    #[test]
    fn package_manifest_rejects_unknown_keys() {
        let toml = r#"
[plugin]
name = "x"
version = "0.1.0"
mian = "index.json"
"#;
        let err = parse_package_manifest(Path::new("plugin.toml"), toml)
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid package manifest"));
    }

    #[test]
    fn parse_toml_descriptor() {
        let content = r#"
name = "quxie-foo"
boogie = "haha"
"#;
        let descriptor = parse_descriptor(Path::new("foo-qux.toml"), content).unwrap();
        assert_eq!(
            descriptor.into_value(),
            json!({"name": "quxie-foo", "boogie": "haha"})
        );
    }

    #[test]
    fn parse_json_descriptor() {
        let content = r#"{"name": "one", "rules": {"semi": "error"}}"#;
        let descriptor = parse_descriptor(Path::new("one.json"), content).unwrap();
        assert_eq!(descriptor.name(), Some("one"));
        assert_eq!(descriptor.get("rules"), Some(&json!({"semi": "error"})));
    }

    #[test]
    fn unknown_extension_falls_back_to_toml() {
        let descriptor = parse_descriptor(Path::new("eslintrc"), "name = \"x\"\n").unwrap();
        assert_eq!(descriptor.name(), Some("x"));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = parse_descriptor(Path::new("list.json"), "[1, 2]")
            .unwrap_err()
            .to_string();
        assert!(err.contains("must contain an object, found array"));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_descriptor(Path::new("noise"), "{{ nope")
            .unwrap_err()
            .to_string();
        assert!(err.contains("neither JSON nor TOML"));
    }
}
