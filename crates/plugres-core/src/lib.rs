// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for plugres.
//!
//! Normalizes a heterogeneous list of plugin items (names, factories, plain
//! descriptor objects, and `[plugin, options]` tuples) into an ordered list
//! of plugin descriptors. Name lookup is delegated to a [`Loader`]; factories
//! are invoked with the configured argument convention.
//!
//! ```
//! use plugres_core::{normalize, NormalizeOptions, PluginDescriptor, PluginItem, ResolvedPlugin};
//! use plugres_core::{Loader, PlugresError};
//!
//! struct Static;
//!
//! impl Loader for Static {
//!     fn resolve(&self, name: &str) -> Result<ResolvedPlugin, PlugresError> {
//!         Ok(PluginDescriptor::named(name).into())
//!     }
//! }
//!
//! let plugins = vec![PluginItem::name("one"), PluginDescriptor::named("two").into()];
//! let out = normalize(plugins, &Static, &NormalizeOptions::new().with_prefix("x-")).unwrap();
//! assert_eq!(out[0].name(), Some("x-one"));
//! assert_eq!(out[1].name(), Some("two"));
//! ```

pub mod descriptor;
pub mod error;
pub mod normalize;
pub mod traits;
pub mod types;

pub use descriptor::{FactoryArgs, PluginDescriptor};
pub use error::{InvalidItemPosition, PlugresError};
pub use normalize::{Normalizer, normalize};
pub use traits::{Loader, PluginFactory};
pub use types::{ItemKind, NormalizeOptions, PluginItem, PluginsInput, ResolvedPlugin};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugres_error_has_all_variants() {
        let _invalid = PlugresError::InvalidPluginItem {
            position: InvalidItemPosition::Item,
            found: ItemKind::Number,
        };
        let _not_found = PlugresError::ModuleNotFound {
            name: "x".into(),
            searched: vec![],
        };
        let _manifest = PlugresError::Manifest {
            path: "x.toml".into(),
            message: "bad".into(),
        };
        let _io = PlugresError::Io {
            path: "x.toml".into(),
            source: std::io::Error::other("test"),
        };
        let _plugin = PlugresError::plugin("test");
        let _config = PlugresError::Config("test".into());
    }

    #[test]
    fn invalid_item_messages() {
        let head = PlugresError::InvalidPluginItem {
            position: InvalidItemPosition::ArrayHead,
            found: ItemKind::Number,
        };
        let msg = head.to_string();
        assert!(msg.contains("First item of array should"));
        assert!(msg.contains("be function, string or object"));

        let item = PlugresError::InvalidPluginItem {
            position: InvalidItemPosition::Item,
            found: ItemKind::Number,
        };
        let msg = item.to_string();
        assert!(msg.starts_with("Plugin item should be"));
        assert!(msg.contains("function, string, object or array"));
        assert!(msg.ends_with("got number"));
    }

    #[test]
    fn module_not_found_lists_searched_paths() {
        let err = PlugresError::ModuleNotFound {
            name: "foo".into(),
            searched: vec!["a/foo".into(), "b/foo".into()],
        };
        assert_eq!(
            err.to_string(),
            "cannot find plugin `foo` (searched: a/foo, b/foo)"
        );
        assert!(err.is_not_found());
        assert!(!PlugresError::Config("x".into()).is_not_found());
    }

    #[test]
    fn public_types_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PluginItem>();
        assert_send_sync::<ResolvedPlugin>();
        assert_send_sync::<PlugresError>();
        assert_send_sync::<Normalizer<Box<dyn Loader>>>();
    }
}
