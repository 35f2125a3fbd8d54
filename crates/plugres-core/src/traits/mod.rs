// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits for the normalizer.
//!
//! `Loader` maps a (prefixed) plugin name to a resolved plugin, and
//! `PluginFactory` turns invocation arguments into a final descriptor.

pub mod factory;
pub mod loader;

pub use factory::PluginFactory;
pub use loader::Loader;
