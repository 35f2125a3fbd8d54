// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The plugin normalizer.
//!
//! Turns a heterogeneous plugins input into an ordered list of descriptors:
//! falsey items are filtered out first, then every remaining item is
//! resolved (through the loader for names) and, when the resolved plugin is
//! a factory, invoked with the computed argument list. The first error
//! aborts the whole call.

use serde_json::Value;
use tracing::{debug, trace};

use crate::descriptor::PluginDescriptor;
use crate::error::{InvalidItemPosition, PlugresError};
use crate::traits::Loader;
use crate::types::{NormalizeOptions, PluginItem, PluginsInput, ResolvedPlugin};

/// Normalize `plugins` using `loader` for name lookup.
pub fn normalize<L: Loader + ?Sized>(
    plugins: impl Into<PluginsInput>,
    loader: &L,
    options: &NormalizeOptions,
) -> Result<Vec<PluginDescriptor>, PlugresError> {
    let items: Vec<PluginItem> = plugins
        .into()
        .into_items()
        .into_iter()
        .filter(|item| !item.is_falsey())
        .collect();

    debug!(count = items.len(), prefix = %options.prefix, "normalizing plugins");

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let (resolved, extra) = resolve_item(item, loader, &options.prefix)?;
            let descriptor = invoke(resolved, &extra, options)?;
            trace!(index, name = ?descriptor.name(), "plugin normalized");
            Ok(descriptor)
        })
        .collect()
}

/// A loader paired with the options for repeated normalization calls.
pub struct Normalizer<L> {
    loader: L,
    options: NormalizeOptions,
}

impl<L: Loader> Normalizer<L> {
    /// Create a normalizer with default options (no prefix, no arguments).
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            options: NormalizeOptions::default(),
        }
    }

    /// Create a normalizer applying `options` to every call.
    pub fn with_options(loader: L, options: NormalizeOptions) -> Self {
        Self { loader, options }
    }

    /// The options used for every call.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// The loader names are resolved through.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Normalize `plugins` with this normalizer's loader and options.
    ///
    /// See [`normalize`] for the item rules.
    pub fn normalize(
        &self,
        plugins: impl Into<PluginsInput>,
    ) -> Result<Vec<PluginDescriptor>, PlugresError> {
        normalize(plugins, &self.loader, &self.options)
    }
}

/// Resolve one non-falsey item to a plugin and its extra arguments.
fn resolve_item<L: Loader + ?Sized>(
    item: PluginItem,
    loader: &L,
    prefix: &str,
) -> Result<(ResolvedPlugin, Vec<Value>), PlugresError> {
    match item {
        PluginItem::Factory(factory) => Ok((ResolvedPlugin::Factory(factory), Vec::new())),
        PluginItem::Object(descriptor) => Ok((ResolvedPlugin::Descriptor(descriptor), Vec::new())),
        PluginItem::Name(name) => Ok((lookup(loader, prefix, &name)?, Vec::new())),
        PluginItem::Tuple { head, rest } => {
            let resolved = match *head {
                PluginItem::Factory(factory) => ResolvedPlugin::Factory(factory),
                PluginItem::Object(descriptor) => ResolvedPlugin::Descriptor(descriptor),
                PluginItem::Name(name) => lookup(loader, prefix, &name)?,
                other => {
                    return Err(PlugresError::InvalidPluginItem {
                        position: InvalidItemPosition::ArrayHead,
                        found: other.kind(),
                    });
                }
            };
            Ok((resolved, rest))
        }
        other @ (PluginItem::Null | PluginItem::Boolean(_) | PluginItem::Number(_)) => {
            Err(PlugresError::InvalidPluginItem {
                position: InvalidItemPosition::Item,
                found: other.kind(),
            })
        }
    }
}

fn lookup<L: Loader + ?Sized>(
    loader: &L,
    prefix: &str,
    name: &str,
) -> Result<ResolvedPlugin, PlugresError> {
    let full_name = format!("{prefix}{name}");
    debug!(name = %full_name, "resolving plugin by name");
    loader.resolve(&full_name)
}

fn invoke(
    resolved: ResolvedPlugin,
    extra: &[Value],
    options: &NormalizeOptions,
) -> Result<PluginDescriptor, PlugresError> {
    match resolved {
        ResolvedPlugin::Descriptor(descriptor) => Ok(descriptor),
        ResolvedPlugin::Factory(factory) => factory.call(&options.invocation_args(extra)),
    }
}
