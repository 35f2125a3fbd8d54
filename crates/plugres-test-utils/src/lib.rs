// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for plugres integration tests.
//!
//! # Components
//!
//! - [`fixtures`] - the `foo-plugin-*` fixture plugins and a loader serving them
//! - [`RecordingFactory`] - a factory that captures every argument list it receives
//! - [`FixtureTree`] - a temporary directory of plugin files for filesystem tests

pub mod fixtures;
pub mod recording;
pub mod tree;

pub use fixtures::{fixture_loader, foo_plugin_one, foo_plugin_quxie, foo_plugin_two, foo_qux};
pub use recording::RecordingFactory;
pub use tree::FixtureTree;
