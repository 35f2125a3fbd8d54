// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin item types accepted and produced by the normalizer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use strum::Display;

use crate::descriptor::PluginDescriptor;
use crate::error::PlugresError;
use crate::traits::PluginFactory;

/// Shape of a plugin item, computed once and used for dispatch and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    #[strum(serialize = "string")]
    Name,
    #[strum(serialize = "function")]
    Factory,
    Object,
    #[strum(serialize = "array")]
    Tuple,
    Null,
    Boolean,
    Number,
}

/// One element of the plugins input.
#[derive(Clone)]
pub enum PluginItem {
    /// A plugin name or path, resolved through the loader.
    Name(String),
    /// A factory invoked with the computed arguments.
    Factory(Arc<dyn PluginFactory>),
    /// A plain descriptor used as is.
    Object(PluginDescriptor),
    /// `[head, ...rest]`: the head is the plugin, `rest` the extra arguments.
    Tuple {
        head: Box<PluginItem>,
        rest: Vec<Value>,
    },
    Null,
    Boolean(bool),
    Number(Number),
}

impl PluginItem {
    pub fn name(name: impl Into<String>) -> Self {
        PluginItem::Name(name.into())
    }

    /// A factory item from a closure.
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&[Value]) -> Result<PluginDescriptor, PlugresError> + Send + Sync + 'static,
    {
        PluginItem::Factory(Arc::new(factory))
    }

    /// A factory item from any `PluginFactory` implementation.
    pub fn from_factory<F: PluginFactory + 'static>(factory: F) -> Self {
        PluginItem::Factory(Arc::new(factory))
    }

    /// A tuple item `[head, ...rest]`.
    pub fn tuple(head: impl Into<PluginItem>, rest: Vec<Value>) -> Self {
        PluginItem::Tuple {
            head: Box::new(head.into()),
            rest,
        }
    }

    /// A tuple item `[head, options]`.
    pub fn with_options(head: impl Into<PluginItem>, options: Value) -> Self {
        Self::tuple(head, vec![options])
    }

    /// Convert a JSON value into an item.
    ///
    /// Arrays become tuples whose first element is the head; an empty array
    /// gets a null head and is rejected later.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => PluginItem::Null,
            Value::Bool(b) => PluginItem::Boolean(b),
            Value::Number(n) => PluginItem::Number(n),
            Value::String(s) => PluginItem::Name(s),
            Value::Object(map) => PluginItem::Object(map.into()),
            Value::Array(values) => {
                let mut values = values.into_iter();
                let head = values.next().map_or(PluginItem::Null, PluginItem::from_value);
                PluginItem::Tuple {
                    head: Box::new(head),
                    rest: values.collect(),
                }
            }
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            PluginItem::Name(_) => ItemKind::Name,
            PluginItem::Factory(_) => ItemKind::Factory,
            PluginItem::Object(_) => ItemKind::Object,
            PluginItem::Tuple { .. } => ItemKind::Tuple,
            PluginItem::Null => ItemKind::Null,
            PluginItem::Boolean(_) => ItemKind::Boolean,
            PluginItem::Number(_) => ItemKind::Number,
        }
    }

    /// Falsey items (null, false, zero, empty name) are skipped in lists.
    pub fn is_falsey(&self) -> bool {
        match self {
            PluginItem::Null | PluginItem::Boolean(false) => true,
            PluginItem::Number(n) => n.as_f64() == Some(0.0),
            PluginItem::Name(name) => name.is_empty(),
            _ => false,
        }
    }
}

impl std::fmt::Debug for PluginItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginItem::Name(name) => f.debug_tuple("Name").field(name).finish(),
            PluginItem::Factory(_) => f.write_str("Factory(..)"),
            PluginItem::Object(descriptor) => f.debug_tuple("Object").field(descriptor).finish(),
            PluginItem::Tuple { head, rest } => f
                .debug_struct("Tuple")
                .field("head", head)
                .field("rest", rest)
                .finish(),
            PluginItem::Null => f.write_str("Null"),
            PluginItem::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            PluginItem::Number(n) => f.debug_tuple("Number").field(n).finish(),
        }
    }
}

impl From<&str> for PluginItem {
    fn from(name: &str) -> Self {
        PluginItem::Name(name.to_string())
    }
}

impl From<String> for PluginItem {
    fn from(name: String) -> Self {
        PluginItem::Name(name)
    }
}

impl From<PluginDescriptor> for PluginItem {
    fn from(descriptor: PluginDescriptor) -> Self {
        PluginItem::Object(descriptor)
    }
}

impl From<Arc<dyn PluginFactory>> for PluginItem {
    fn from(factory: Arc<dyn PluginFactory>) -> Self {
        PluginItem::Factory(factory)
    }
}

impl From<Value> for PluginItem {
    fn from(value: Value) -> Self {
        PluginItem::from_value(value)
    }
}

/// The whole plugins argument of a normalization call.
#[derive(Debug, Clone, Default)]
pub enum PluginsInput {
    /// Nothing given, or a falsey value.
    #[default]
    Absent,
    /// A single plugin name.
    Single(String),
    /// An ordered list of items.
    List(Vec<PluginItem>),
}

impl PluginsInput {
    /// Coerce a JSON value: falsey values are absent, strings are single
    /// names, arrays are lists, any other value is a one-element list.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => PluginsInput::Absent,
            Value::Number(ref n) if n.as_f64() == Some(0.0) => PluginsInput::Absent,
            Value::String(s) if s.is_empty() => PluginsInput::Absent,
            Value::String(s) => PluginsInput::Single(s),
            Value::Array(values) => {
                PluginsInput::List(values.into_iter().map(PluginItem::from_value).collect())
            }
            other => PluginsInput::List(vec![PluginItem::from_value(other)]),
        }
    }

    /// Flatten into the list of items to process, before falsey filtering.
    pub fn into_items(self) -> Vec<PluginItem> {
        match self {
            PluginsInput::Absent => Vec::new(),
            PluginsInput::Single(name) if name.is_empty() => Vec::new(),
            PluginsInput::Single(name) => vec![PluginItem::Name(name)],
            PluginsInput::List(items) => items,
        }
    }
}

impl From<&str> for PluginsInput {
    fn from(name: &str) -> Self {
        PluginsInput::Single(name.to_string())
    }
}

impl From<String> for PluginsInput {
    fn from(name: String) -> Self {
        PluginsInput::Single(name)
    }
}

impl From<Vec<PluginItem>> for PluginsInput {
    fn from(items: Vec<PluginItem>) -> Self {
        PluginsInput::List(items)
    }
}

impl From<Value> for PluginsInput {
    fn from(value: Value) -> Self {
        PluginsInput::from_value(value)
    }
}

impl<T: Into<PluginsInput>> From<Option<T>> for PluginsInput {
    fn from(input: Option<T>) -> Self {
        input.map_or(PluginsInput::Absent, Into::into)
    }
}

/// What a loader returns for a name, before invocation.
#[derive(Clone)]
pub enum ResolvedPlugin {
    Factory(Arc<dyn PluginFactory>),
    Descriptor(PluginDescriptor),
}

impl ResolvedPlugin {
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&[Value]) -> Result<PluginDescriptor, PlugresError> + Send + Sync + 'static,
    {
        ResolvedPlugin::Factory(Arc::new(factory))
    }

    pub fn from_factory<F: PluginFactory + 'static>(factory: F) -> Self {
        ResolvedPlugin::Factory(Arc::new(factory))
    }
}

impl std::fmt::Debug for ResolvedPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedPlugin::Factory(_) => f.write_str("Factory(..)"),
            ResolvedPlugin::Descriptor(d) => f.debug_tuple("Descriptor").field(d).finish(),
        }
    }
}

impl From<PluginDescriptor> for ResolvedPlugin {
    fn from(descriptor: PluginDescriptor) -> Self {
        ResolvedPlugin::Descriptor(descriptor)
    }
}

/// Options recognized by a normalization call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Prepended verbatim to every plugin name before lookup.
    #[serde(default)]
    pub prefix: String,

    /// When set to a truthy value, factories are invoked as `(first, options)`.
    /// Null, `false`, zero and the empty string count as unset.
    #[serde(default)]
    pub first: Option<Value>,

    /// When non-empty, the argument list for every factory.
    #[serde(default)]
    pub args: Vec<Value>,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_first(mut self, first: impl Into<Value>) -> Self {
        self.first = Some(first.into());
        self
    }

    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }

    /// Argument list for a factory given the item's extra arguments.
    pub fn invocation_args(&self, extra: &[Value]) -> Vec<Value> {
        if !self.args.is_empty() {
            return self.args.clone();
        }
        match self.first.as_ref().filter(|first| !is_falsey_value(first)) {
            Some(first) => std::iter::once(first.clone())
                .chain(extra.first().cloned())
                .collect(),
            None => extra.to_vec(),
        }
    }
}

fn is_falsey_value(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
