// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the plugres configuration system.

use plugres_config::diagnostic::ConfigError;
use plugres_config::model::PlugresConfig;
use plugres_config::{
    load_and_validate_path, load_and_validate_str, load_config_from_path, load_config_from_str,
};
use plugres_core::NormalizeOptions;
use serde_json::json;
use serial_test::serial;

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_plugres_config() {
    let toml = r#"
plugins = ["standard", ["standard-jsx", { semi = false }], { name = "inline" }]

[resolve]
prefix = "eslint-config-"
first = "src/index.js"
args = []

[loader]
base_dir = "/srv/project"
modules_dir = "vendor"
search_paths = ["/usr/share/plugres"]
extensions = ["json"]

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.plugins.len(), 3);
    assert_eq!(config.plugins[1], json!(["standard-jsx", {"semi": false}]));
    assert_eq!(config.plugins[2], json!({"name": "inline"}));
    assert_eq!(config.resolve.prefix, "eslint-config-");
    assert_eq!(config.resolve.first, Some(json!("src/index.js")));
    assert!(config.resolve.args.is_empty());
    assert_eq!(
        config.loader.base_dir.as_deref(),
        Some(std::path::Path::new("/srv/project"))
    );
    assert_eq!(config.loader.modules_dir, "vendor");
    assert_eq!(config.loader.search_paths.len(), 1);
    assert_eq!(config.loader.extensions, vec!["json"]);
    assert_eq!(config.log.level, "debug");
}

/// Empty input yields compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should be valid");
    assert!(config.plugins.is_empty());
    assert_eq!(config.resolve.prefix, "");
    assert!(config.resolve.first.is_none());
    assert!(config.loader.base_dir.is_none());
    assert_eq!(config.loader.modules_dir, "plugins");
    assert_eq!(config.loader.extensions, vec!["toml", "json"]);
    assert_eq!(config.log.level, "info");
}

/// Unknown field in [resolve] produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_field_suggests_correction() {
    let toml = r#"
[resolve]
prefx = "x-"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "prefx");
            assert_eq!(suggestion.as_deref(), Some("prefix"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Unknown top-level section is rejected.
#[test]
fn unknown_section_is_rejected() {
    let err = load_config_from_str("[loaders]\nmodules_dir = \"x\"\n").expect_err("unknown section");
    let err_str = err.to_string();
    assert!(
        err_str.contains("unknown field") || err_str.contains("loaders"),
        "error should mention the bad key, got: {err_str}"
    );
}

/// Wrong value type produces an InvalidType diagnostic.
#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[log]\nlevel = 3\n").expect_err("level must be a string");
    assert!(matches!(errors[0], ConfigError::InvalidType { .. }));
}

/// Semantic validation runs after a successful extract.
#[test]
fn validation_errors_are_returned() {
    let errors = load_and_validate_str("plugins = [\"ok\", 42]\n[log]\nlevel = \"loud\"\n")
        .expect_err("should fail validation");
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| matches!(e, ConfigError::Validation { .. })));
}

/// The resolve section converts into normalizer options.
#[test]
fn resolve_section_converts_to_options() {
    let config = load_config_from_str(
        "[resolve]\nprefix = \"./fixtures/foo-plugin-\"\nargs = [\"haha\", { hello = \"world\" }]\n",
    )
    .unwrap();
    let options: NormalizeOptions = (&config.resolve).into();
    assert_eq!(options.prefix, "./fixtures/foo-plugin-");
    assert_eq!(options.args, vec![json!("haha"), json!({"hello": "world"})]);
    assert_eq!(config.resolve.to_options(), options);
}

/// Default config serializes to TOML that loads back to the same values.
#[test]
fn default_config_survives_toml_round_trip() {
    let rendered = toml::to_string(&PlugresConfig::default()).unwrap();
    let config = load_config_from_str(&rendered).unwrap();
    assert_eq!(config.loader.modules_dir, "plugins");
    assert_eq!(config.log.level, "info");
}

/// Missing explicit config file is a diagnostic, not a silent default.
#[test]
fn missing_config_path_is_an_error() {
    let errors = load_and_validate_path(std::path::Path::new("/definitely/not/here.toml"))
        .expect_err("missing file");
    assert!(errors[0].to_string().contains("does not exist"));
}

/// Environment variables override file values.
#[test]
#[serial]
fn env_overrides_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugres.toml");
    std::fs::write(&path, "[loader]\nmodules_dir = \"from-file\"\n[resolve]\nprefix = \"file-\"\n")
        .unwrap();

    // SAFETY: serialized with other env-mutating tests.
    unsafe {
        std::env::set_var("PLUGRES_LOADER_MODULES_DIR", "from-env");
    }
    let config = load_config_from_path(&path);
    unsafe {
        std::env::remove_var("PLUGRES_LOADER_MODULES_DIR");
    }

    let config = config.unwrap();
    assert_eq!(config.loader.modules_dir, "from-env");
    assert_eq!(config.resolve.prefix, "file-");
}

/// A log level set through the environment passes validation.
#[test]
#[serial]
fn env_log_level_is_a_known_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugres.toml");
    std::fs::write(&path, "[log]\nlevel = \"info\"\n").unwrap();

    // SAFETY: serialized with other env-mutating tests.
    unsafe {
        std::env::set_var("PLUGRES_LOG_LEVEL", "debug");
    }
    let config = load_and_validate_path(&path);
    unsafe {
        std::env::remove_var("PLUGRES_LOG_LEVEL");
    }

    let config = config.expect("env override should be accepted");
    assert_eq!(config.log.level, "debug");
}
