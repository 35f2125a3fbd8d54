// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory plugin registry.
//!
//! The `RegistryLoader` stores compiled-in plugins keyed by the exact name
//! the normalizer will ask for (prefix included). Entries are either
//! factories or ready-made descriptors.

use std::collections::HashMap;
use std::sync::Arc;

use plugres_core::{Loader, PluginDescriptor, PluginFactory, PlugresError, ResolvedPlugin};
use serde_json::Value;
use tracing::debug;

/// Registry of named plugins, usable as a [`Loader`].
#[derive(Debug, Clone, Default)]
pub struct RegistryLoader {
    entries: HashMap<String, ResolvedPlugin>,
}

impl RegistryLoader {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a resolved plugin, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, plugin: ResolvedPlugin) {
        let name = name.into();
        debug!(name = %name, "registering plugin");
        self.entries.insert(name, plugin);
    }

    /// Register a factory closure.
    pub fn register_factory<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&[Value]) -> Result<PluginDescriptor, PlugresError> + Send + Sync + 'static,
    {
        self.register(name, ResolvedPlugin::factory(factory));
    }

    /// Register a shared factory object.
    pub fn register_shared(&mut self, name: impl Into<String>, factory: Arc<dyn PluginFactory>) {
        self.register(name, ResolvedPlugin::Factory(factory));
    }

    /// Register a descriptor returned as is.
    pub fn register_descriptor(&mut self, name: impl Into<String>, descriptor: PluginDescriptor) {
        self.register(name, ResolvedPlugin::Descriptor(descriptor));
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, plugin: ResolvedPlugin) -> Self {
        self.register(name, plugin);
        self
    }

    /// Remove an entry, returning it if present.
    pub fn unregister(&mut self, name: &str) -> Option<ResolvedPlugin> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedPlugin> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Loader for RegistryLoader {
    fn resolve(&self, name: &str) -> Result<ResolvedPlugin, PlugresError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| PlugresError::ModuleNotFound {
                name: name.to_string(),
                searched: vec![format!("registry:{name}")],
            })
    }
}
