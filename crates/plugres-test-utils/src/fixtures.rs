// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `foo-plugin-*` fixture plugins.
//!
//! Factories echo the filename and options they were invoked with, following
//! the filename-first convention, so tests can observe argument passing.

use std::sync::Arc;

use plugres_core::{PluginDescriptor, PluginFactory, PlugresError};
use plugres_plugin::RegistryLoader;
use serde_json::{Value, json};

/// Directory prefix the fixture names are registered under.
pub const FIXTURE_DIR: &str = "./fixtures/";

fn echoing(
    name: &'static str,
    body: Option<&'static str>,
) -> Arc<dyn PluginFactory> {
    Arc::new(move |args: &[Value]| -> Result<PluginDescriptor, PlugresError> {
        let mut descriptor = PluginDescriptor::named(name);
        if let Some(body) = body {
            descriptor.insert("body", json!(body));
        }
        Ok(descriptor.echo_invocation(args))
    })
}

/// Factory producing `{ name: "one", body: "abc" }`.
pub fn foo_plugin_one() -> Arc<dyn PluginFactory> {
    echoing("one", Some("abc"))
}

/// Factory producing `{ name: "two", body: "foo bar" }`.
pub fn foo_plugin_two() -> Arc<dyn PluginFactory> {
    echoing("two", Some("foo bar"))
}

/// Factory producing `{ name: "quxie" }`.
pub fn foo_plugin_quxie() -> Arc<dyn PluginFactory> {
    echoing("quxie", None)
}

/// Plain descriptor `{ name: "quxie-foo", boogie: "haha" }`.
pub fn foo_qux() -> PluginDescriptor {
    PluginDescriptor::named("quxie-foo").with("boogie", json!("haha"))
}

/// Registry serving every fixture under `./fixtures/<name>`.
pub fn fixture_loader() -> RegistryLoader {
    let mut registry = RegistryLoader::new();
    registry.register_shared(format!("{FIXTURE_DIR}foo-plugin-one"), foo_plugin_one());
    registry.register_shared(format!("{FIXTURE_DIR}foo-plugin-two"), foo_plugin_two());
    registry.register_shared(format!("{FIXTURE_DIR}foo-plugin-quxie"), foo_plugin_quxie());
    registry.register_descriptor(format!("{FIXTURE_DIR}foo-qux"), foo_qux());
    registry
}
