//! Extension registry — loaded extension instances and metadata.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::error::ExtensionError;
use crate::extension::{Extension, ExtensionInfo};

/// One loaded extension.
#[derive(Debug)]
struct RegisteredExtension {
    /// The extension instance.
    extension: Arc<dyn Extension>,
    /// Metadata captured at load time.
    info: ExtensionInfo,
}

/// Registry of all loaded extensions.
#[derive(Debug, Default)]
pub struct ExtensionRegistry {
    /// Extension id → instance and metadata.
    entries: Mutex<HashMap<String, RegisteredExtension>>,
}

impl ExtensionRegistry {
    /// Creates a new empty extension registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, RegisteredExtension>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registers an extension. Fails if the id is already taken.
    pub fn register(&self, extension: Arc<dyn Extension>) -> Result<(), ExtensionError> {
        let info = extension.info();
        let id = info.id.clone();

        let mut entries = self.lock();
        if entries.contains_key(&id) {
            return Err(ExtensionError::AlreadyRegistered(id));
        }

        info!(extension = %id, name = %info.name, version = %info.version, "registering extension");
        entries.insert(id, RegisteredExtension { extension, info });
        Ok(())
    }

    /// Unregisters an extension by id, returning the instance.
    pub fn unregister(&self, id: &str) -> Result<Arc<dyn Extension>, ExtensionError> {
        let mut entries = self.lock();
        let entry = entries
            .remove(id)
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))?;

        info!(extension = %id, "extension unregistered");
        Ok(entry.extension)
    }

    /// Gets an extension by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Extension>> {
        self.lock().get(id).map(|entry| entry.extension.clone())
    }

    /// Lists all registered extension metadata, sorted by load priority.
    pub fn list(&self) -> Vec<ExtensionInfo> {
        let entries = self.lock();
        let mut infos: Vec<ExtensionInfo> = entries.values().map(|e| e.info.clone()).collect();
        infos.sort_by_key(|info| info.priority);
        infos
    }

    /// Returns the number of registered extensions.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Checks whether an extension is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }
}
