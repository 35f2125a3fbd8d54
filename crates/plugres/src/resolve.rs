// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plugres resolve`, `plugres which` and `plugres config` implementations.
//!
//! Command-line flags override the `[resolve]` section of the config; the
//! `[loader]` section configures the filesystem loader used for lookups.

use std::path::PathBuf;

use clap::Args;
use plugres_config::PlugresConfig;
use plugres_core::{NormalizeOptions, PluginItem, PluginsInput, PlugresError, normalize};
use plugres_plugin::FsLoader;
use serde_json::Value;
use tracing::{debug, info};

/// Arguments for `plugres resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Plugin items: names, or JSON arrays/objects such as '["one", {"a": "b"}]'.
    /// Defaults to the configured `plugins` list.
    pub plugins: Vec<String>,

    /// Prefix prepended to every plugin name.
    #[arg(long)]
    pub prefix: Option<String>,

    /// First invocation argument for factories (filename-first convention).
    #[arg(long)]
    pub first: Option<String>,

    /// Invocation argument used for every factory; repeatable. Parsed as JSON
    /// when possible, otherwise taken as a string.
    #[arg(long = "arg", value_name = "VALUE")]
    pub args: Vec<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for `plugres which`.
#[derive(Args, Debug)]
pub struct WhichArgs {
    /// Plugin name to locate.
    pub name: String,

    /// Prefix prepended to the name.
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Normalize the requested plugins and render them as a JSON array.
pub fn run_resolve(config: &PlugresConfig, args: &ResolveArgs) -> Result<String, PlugresError> {
    let loader = build_loader(config)?;
    let options = merge_options(config, args);

    let plugins = if args.plugins.is_empty() {
        PluginsInput::from_value(Value::Array(config.plugins.clone()))
    } else {
        PluginsInput::List(args.plugins.iter().map(|p| parse_item(p)).collect())
    };

    let descriptors = normalize(plugins, &loader, &options)?;
    info!(count = descriptors.len(), "plugins resolved");

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&descriptors)
    } else {
        serde_json::to_string(&descriptors)
    };
    rendered.map_err(|e| PlugresError::Config(format!("cannot render descriptors: {e}")))
}

/// Locate the file behind a plugin name.
pub fn run_which(config: &PlugresConfig, args: &WhichArgs) -> Result<String, PlugresError> {
    let loader = build_loader(config)?;
    let prefix = args.prefix.as_deref().unwrap_or(&config.resolve.prefix);
    let path = loader.locate(&format!("{prefix}{}", args.name))?;
    Ok(path.display().to_string())
}

/// Render the effective configuration as TOML.
pub fn render_config(config: &PlugresConfig) -> Result<String, PlugresError> {
    toml::to_string_pretty(config)
        .map_err(|e| PlugresError::Config(format!("cannot render configuration: {e}")))
}

fn build_loader(config: &PlugresConfig) -> Result<FsLoader, PlugresError> {
    let base_dir = match &config.loader.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(|source| PlugresError::Io {
            path: PathBuf::from("."),
            source,
        })?,
    };
    debug!(base_dir = %base_dir.display(), modules_dir = %config.loader.modules_dir, "building filesystem loader");

    Ok(FsLoader::new(base_dir)
        .with_modules_dir(config.loader.modules_dir.clone())
        .with_search_paths(config.loader.search_paths.clone())
        .with_extensions(config.loader.extensions.clone()))
}

fn merge_options(config: &PlugresConfig, args: &ResolveArgs) -> NormalizeOptions {
    let mut options = config.resolve.to_options();
    if let Some(prefix) = &args.prefix {
        options.prefix = prefix.clone();
    }
    if let Some(first) = &args.first {
        options.first = Some(Value::String(first.clone()));
    }
    if !args.args.is_empty() {
        options.args = args.args.iter().map(|a| parse_value(a)).collect();
    }
    options
}

/// JSON arrays and objects become tuple and descriptor items; anything else is a name.
fn parse_item(raw: &str) -> PluginItem {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Array(_) | Value::Object(_))) => PluginItem::from_value(value),
        _ => PluginItem::name(raw),
    }
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugres_core::ItemKind;
    use plugres_test_utils::FixtureTree;
    use serde_json::json;

    fn resolve_args(plugins: &[&str]) -> ResolveArgs {
        ResolveArgs {
            plugins: plugins.iter().map(|p| p.to_string()).collect(),
            prefix: None,
            first: None,
            args: vec![],
            pretty: false,
        }
    }

    fn config_for(tree: &FixtureTree) -> PlugresConfig {
        let mut config = PlugresConfig::default();
        config.loader.base_dir = Some(tree.path().to_path_buf());
        config
    }

    #[test]
    fn parse_item_shapes() {
        assert_eq!(parse_item("foo").kind(), ItemKind::Name);
        assert_eq!(parse_item(r#"["one", {"a": "b"}]"#).kind(), ItemKind::Tuple);
        assert_eq!(parse_item(r#"{"name": "bar"}"#).kind(), ItemKind::Object);
        // Scalars that happen to be valid JSON are still names.
        assert_eq!(parse_item("123").kind(), ItemKind::Name);
    }

    #[test]
    fn parse_value_falls_back_to_string() {
        assert_eq!(parse_value(r#"{"a": 1}"#), json!({"a": 1}));
        assert_eq!(parse_value("path/x.js"), json!("path/x.js"));
        assert_eq!(parse_value("\"quoted\""), json!("quoted"));
    }

    #[test]
    fn cli_flags_override_config() {
        let mut config = PlugresConfig::default();
        config.resolve.prefix = "cfg-".to_string();
        config.resolve.args = vec![json!("from-config")];

        let mut args = resolve_args(&[]);
        assert_eq!(merge_options(&config, &args).prefix, "cfg-");

        args.prefix = Some("cli-".to_string());
        args.first = Some("x.js".to_string());
        args.args = vec!["haha".to_string(), r#"{"hello":"world"}"#.to_string()];
        let options = merge_options(&config, &args);
        assert_eq!(options.prefix, "cli-");
        assert_eq!(options.first, Some(json!("x.js")));
        assert_eq!(options.args, vec![json!("haha"), json!({"hello": "world"})]);
    }

    #[test]
    fn resolve_reads_descriptor_files() {
        let tree = FixtureTree::new()
            .unwrap()
            .with_file("plugins/eslint-config-standard.json", r#"{"rules": {"semi": "error"}}"#)
            .unwrap()
            .with_file("fixtures/foo-qux.toml", "name = \"quxie-foo\"\nboogie = \"haha\"\n")
            .unwrap();
        let config = config_for(&tree);

        let mut args = resolve_args(&["standard"]);
        args.prefix = Some("eslint-config-".to_string());
        let out = run_resolve(&config, &args).unwrap();
        assert_eq!(out, r#"[{"rules":{"semi":"error"}}]"#);

        let out = run_resolve(&config, &resolve_args(&["./fixtures/foo-qux"])).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!([{"name": "quxie-foo", "boogie": "haha"}]));
    }

    #[test]
    fn resolve_falls_back_to_configured_plugins() {
        let tree = FixtureTree::new()
            .unwrap()
            .with_file("plugins/a.toml", "name = \"a\"\n")
            .unwrap();
        let mut config = config_for(&tree);
        config.plugins = vec![json!("a"), json!(false), json!({"name": "inline"})];

        let out = run_resolve(&config, &resolve_args(&[])).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!([{"name": "a"}, {"name": "inline"}]));
    }

    #[test]
    fn resolve_reports_missing_plugins() {
        let tree = FixtureTree::new().unwrap();
        let err = run_resolve(&config_for(&tree), &resolve_args(&["nope"])).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn which_prints_located_path() {
        let tree = FixtureTree::new()
            .unwrap()
            .with_file("plugins/eslint-config-standard/index.toml", "name = \"std\"\n")
            .unwrap();
        let args = WhichArgs {
            name: "standard".to_string(),
            prefix: Some("eslint-config-".to_string()),
        };
        let out = run_which(&config_for(&tree), &args).unwrap();
        assert!(out.ends_with("index.toml"));
    }

    #[test]
    fn config_renders_as_toml() {
        let out = render_config(&PlugresConfig::default()).unwrap();
        assert!(out.contains("[loader]"));
        assert!(out.contains("modules_dir = \"plugins\""));
    }
}
