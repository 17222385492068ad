//! # tessera-extensions
//!
//! Extension framework for Tessera. Provides:
//!
//! - Extension metadata and the [`Extension`] trait
//! - An extension registry with duplicate-id rejection
//! - A manager that installs and scrubs hook handlers per extension
//! - Convenience macros and a prelude for extension authors
//!
//! Extensions attach handlers to a [`tessera_hooks::Hooks`] registry under
//! their id as namespace; unloading an extension removes every handler it
//! installed, across actions and filters.

pub mod error;
pub mod extension;
pub mod macros;
pub mod manager;
pub mod registry;

pub use error::ExtensionError;
pub use extension::{Extension, ExtensionInfo};
pub use manager::ExtensionManager;
pub use registry::ExtensionRegistry;

/// Prelude for convenient imports.
pub mod prelude {
    pub use serde_json::{Value, json};
    pub use tessera_hooks::{DEFAULT_PRIORITY, Hooks, create_hooks, default_hooks};

    pub use crate::error::ExtensionError;
    pub use crate::extension::{Extension, ExtensionInfo};
    pub use crate::manager::ExtensionManager;
    pub use crate::registry::ExtensionRegistry;
}
