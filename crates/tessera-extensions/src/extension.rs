//! Extension metadata and the trait every extension implements.

use std::fmt;

use serde::{Deserialize, Serialize};

use tessera_hooks::Hooks;

use crate::error::ExtensionError;

/// Metadata about an extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionInfo {
    /// Unique extension identifier. Doubles as the namespace every one of
    /// its handlers is registered under.
    pub id: String,
    /// Human-readable extension name.
    pub name: String,
    /// Extension version string.
    pub version: String,
    /// Extension description.
    pub description: String,
    /// Author or maintainer.
    pub author: String,
    /// Hook names this extension attaches to.
    pub hooks: Vec<String>,
    /// Load priority (lower = loaded first).
    pub priority: i32,
}

/// Trait that all extensions must implement.
pub trait Extension: Send + Sync + fmt::Debug {
    /// Returns extension metadata.
    fn info(&self) -> ExtensionInfo;

    /// Installs this extension's handlers. Every handler must use the
    /// extension id as its namespace so unloading can find them again.
    fn register(&self, hooks: &Hooks) -> Result<(), ExtensionError>;
}
