// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptors and factory argument helpers.
//!
//! A descriptor is a plain string-keyed JSON object. No schema is imposed;
//! consumers read fields by convention (`name`, `opts`, `filename`, or
//! domain-specific keys such as `rules`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The final object representing one plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginDescriptor(Map<String, Value>);

impl PluginDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Create a descriptor with only a `name` field.
    pub fn named(name: impl Into<String>) -> Self {
        let mut descriptor = Self::new();
        descriptor.insert("name", Value::String(name.into()));
        descriptor
    }

    /// The conventional `name` field, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The conventional `opts` field.
    pub fn opts(&self) -> Option<&Value> {
        self.0.get("opts")
    }

    /// The conventional `filename` field, if it is a string.
    pub fn filename(&self) -> Option<&str> {
        self.0.get("filename").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Fill `filename` and `opts` from the invocation arguments.
    ///
    /// Fields the factory already set are left untouched, and absent
    /// arguments add nothing.
    pub fn echo_invocation(mut self, args: &[Value]) -> Self {
        let parsed = FactoryArgs::parse(args);
        if let Some(filename) = parsed.filename
            && !self.contains_key("filename")
        {
            self.insert("filename", Value::String(filename.to_string()));
        }
        if let Some(opts) = parsed.opts
            && !self.contains_key("opts")
        {
            self.insert("opts", opts.clone());
        }
        self
    }
}

impl From<Map<String, Value>> for PluginDescriptor {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for PluginDescriptor {
    type Error = Value;

    /// Succeeds for JSON objects; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// Invocation arguments split by the filename-first convention.
///
/// A leading string argument is a filename and the value after it is the
/// options. Otherwise the first argument is the options. Null options are
/// treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FactoryArgs<'a> {
    pub filename: Option<&'a str>,
    pub opts: Option<&'a Value>,
}

impl<'a> FactoryArgs<'a> {
    pub fn parse(args: &'a [Value]) -> Self {
        let (filename, opts) = match args {
            [Value::String(filename), rest @ ..] => (Some(filename.as_str()), rest.first()),
            [first, ..] => (None, Some(first)),
            [] => (None, None),
        };
        Self {
            filename,
            opts: opts.filter(|v| !v.is_null()),
        }
    }
}
