// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin factory trait.

use serde_json::Value;

use crate::descriptor::PluginDescriptor;
use crate::error::PlugresError;

/// A callable plugin that builds its descriptor from invocation arguments.
///
/// Factories are invoked synchronously by the normalizer. Whatever error a
/// factory returns is handed back to the caller of `normalize` unchanged.
pub trait PluginFactory: Send + Sync {
    /// Build the plugin descriptor for the given argument list.
    fn call(&self, args: &[Value]) -> Result<PluginDescriptor, PlugresError>;
}

impl<F> PluginFactory for F
where
    F: Fn(&[Value]) -> Result<PluginDescriptor, PlugresError> + Send + Sync,
{
    fn call(&self, args: &[Value]) -> Result<PluginDescriptor, PlugresError> {
        self(args)
    }
}
