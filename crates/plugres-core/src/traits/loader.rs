// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name resolution trait.

use std::sync::Arc;

use crate::error::PlugresError;
use crate::types::ResolvedPlugin;

/// Resolves a plugin name to a factory or a ready-made descriptor.
///
/// The normalizer has already prepended any configured prefix to `name`.
/// Implementations must return `PlugresError::ModuleNotFound` when nothing
/// matches so chained loaders can fall through to the next one.
pub trait Loader: Send + Sync {
    fn resolve(&self, name: &str) -> Result<ResolvedPlugin, PlugresError>;
}

impl<L: Loader + ?Sized> Loader for &L {
    fn resolve(&self, name: &str) -> Result<ResolvedPlugin, PlugresError> {
        (**self).resolve(name)
    }
}

impl<L: Loader + ?Sized> Loader for Box<L> {
    fn resolve(&self, name: &str) -> Result<ResolvedPlugin, PlugresError> {
        (**self).resolve(name)
    }
}

impl<L: Loader + ?Sized> Loader for Arc<L> {
    fn resolve(&self, name: &str) -> Result<ResolvedPlugin, PlugresError> {
        (**self).resolve(name)
    }
}
