// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Factory that records its invocations.

use std::sync::{Arc, Mutex, PoisonError};

use plugres_core::{PluginDescriptor, PluginFactory, PlugresError};
use serde_json::{Value, json};

/// A factory capturing every argument list it is called with.
///
/// Clones share the same call log, so a test can keep one handle while the
/// normalizer owns another. Each descriptor carries the plugin name and the
/// zero-based call index.
#[derive(Debug, Clone)]
pub struct RecordingFactory {
    name: String,
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
}

impl RecordingFactory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Argument lists received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl PluginFactory for RecordingFactory {
    fn call(&self, args: &[Value]) -> Result<PluginDescriptor, PlugresError> {
        let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        let index = calls.len();
        calls.push(args.to_vec());
        tracing::trace!(name = %self.name, index, "recording factory invoked");
        Ok(PluginDescriptor::named(self.name.clone()).with("call", json!(index)))
    }
}
