//! Extension lifecycle errors.

use thiserror::Error;

/// Errors surfaced while loading or unloading extensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionError {
    /// An extension with the same id is already loaded.
    #[error("extension '{0}' is already registered")]
    AlreadyRegistered(String),
    /// No extension with this id is loaded.
    #[error("extension '{0}' is not registered")]
    NotFound(String),
    /// The extension's own hook setup failed.
    #[error("extension '{id}' failed to register its handlers: {message}")]
    Setup {
        /// Id of the failing extension.
        id: String,
        /// What went wrong, in the extension's words.
        message: String,
    },
}
