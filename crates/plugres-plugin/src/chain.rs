// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered fallback across several loaders.

use plugres_core::{Loader, PlugresError, ResolvedPlugin};
use tracing::trace;

/// Tries each loader in order; the first hit wins.
///
/// A `ModuleNotFound` from one loader moves on to the next. Any other error
/// stops the chain and is returned as is.
#[derive(Default)]
pub struct ChainLoader {
    loaders: Vec<Box<dyn Loader>>,
}

impl ChainLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a loader to the end of the chain.
    pub fn with<L: Loader + 'static>(mut self, loader: L) -> Self {
        self.push(loader);
        self
    }

    pub fn push<L: Loader + 'static>(&mut self, loader: L) {
        self.loaders.push(Box::new(loader));
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl std::fmt::Debug for ChainLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainLoader")
            .field("loaders", &self.loaders.len())
            .finish()
    }
}

impl Loader for ChainLoader {
    fn resolve(&self, name: &str) -> Result<ResolvedPlugin, PlugresError> {
        let mut searched = Vec::new();

        for (index, loader) in self.loaders.iter().enumerate() {
            match loader.resolve(name) {
                Ok(plugin) => return Ok(plugin),
                Err(PlugresError::ModuleNotFound { searched: s, .. }) => {
                    trace!(name, index, "loader missed, trying next");
                    searched.extend(s);
                }
                Err(e) => return Err(e),
            }
        }

        Err(PlugresError::ModuleNotFound {
            name: name.to_string(),
            searched,
        })
    }
}
