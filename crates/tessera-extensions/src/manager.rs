//! Extension manager — load/unload lifecycle over a shared hook registry.

use std::sync::Arc;

use tracing::{error, info};

use tessera_hooks::Hooks;

use crate::error::ExtensionError;
use crate::extension::{Extension, ExtensionInfo};
use crate::registry::ExtensionRegistry;

/// Manages the lifecycle of extensions against one hook registry.
#[derive(Debug)]
pub struct ExtensionManager {
    /// Extension registry.
    registry: ExtensionRegistry,
    /// Hook registry the extensions attach to.
    hooks: Arc<Hooks>,
}

impl ExtensionManager {
    /// Creates a manager with its own isolated hook registry.
    pub fn new() -> Self {
        Self::with_hooks(Arc::new(Hooks::new()))
    }

    /// Creates a manager over an existing hook registry.
    pub fn with_hooks(hooks: Arc<Hooks>) -> Self {
        Self {
            registry: ExtensionRegistry::new(),
            hooks,
        }
    }

    /// Loads an extension: records it, then lets it install its handlers.
    ///
    /// If the extension's setup fails, any handlers it already installed
    /// under its namespace are scrubbed and the error is returned.
    pub fn load_extension(&self, extension: Arc<dyn Extension>) -> Result<(), ExtensionError> {
        let info = extension.info();
        let id = info.id.clone();

        self.registry.register(extension.clone())?;

        if let Err(e) = extension.register(&self.hooks) {
            error!(extension = %id, error = %e, "extension hook setup failed");
            self.hooks.remove_namespace(&id);
            let _ = self.registry.unregister(&id);
            return Err(e);
        }

        info!(
            extension = %id,
            name = %info.name,
            version = %info.version,
            hooks = info.hooks.len(),
            "extension loaded"
        );
        Ok(())
    }

    /// Unloads an extension and removes every handler registered under its
    /// namespace, actions and filters alike.
    pub fn unload_extension(&self, id: &str) -> Result<(), ExtensionError> {
        self.registry.unregister(id)?;
        let removed = self.hooks.remove_namespace(id);

        info!(extension = %id, handlers_removed = removed, "extension unloaded");
        Ok(())
    }

    /// Unloads every extension, logging and continuing on failures.
    pub fn unload_all(&self) {
        for info in self.registry.list() {
            if let Err(e) = self.unload_extension(&info.id) {
                error!(extension = %info.id, error = %e, "error unloading extension");
            }
        }

        info!("all extensions unloaded");
    }

    /// Returns the hook registry extensions are attached to.
    pub fn hooks(&self) -> &Arc<Hooks> {
        &self.hooks
    }

    /// Returns the extension registry.
    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// Lists all loaded extensions.
    pub fn list_extensions(&self) -> Vec<ExtensionInfo> {
        self.registry.list()
    }
}

impl Default for ExtensionManager {
    fn default() -> Self {
        Self::new()
    }
}
