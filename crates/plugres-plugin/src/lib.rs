// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin loaders for plugres.
//!
//! Loaders map a plugin name (already prefixed by the normalizer) to a
//! factory or a descriptor. Three implementations are provided:
//!
//! - [`RegistryLoader`] holds compiled-in plugins in memory.
//! - [`FsLoader`] finds descriptor files on disk with module-style lookup.
//! - [`ChainLoader`] tries several loaders in order.

pub mod chain;
pub mod fs;
pub mod manifest;
pub mod registry;

pub use chain::ChainLoader;
pub use fs::FsLoader;
pub use manifest::{PackageManifest, parse_descriptor, parse_package_manifest};
pub use registry::RegistryLoader;
