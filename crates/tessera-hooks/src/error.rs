//! Rejection reasons for hook names and namespaces.
//!
//! These are diagnostics, not control flow: a validation failure is logged
//! through `tracing` and the offending operation becomes a no-op.
//! Registration adds nothing, removal reports zero handlers removed, and
//! execution behaves as if the hook has no handlers.

use thiserror::Error;

/// Why a hook name or namespace failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidNameError {
    /// The string was empty.
    #[error("must be a non-empty string")]
    Empty,
    /// The hook name started with the reserved `__` prefix.
    #[error("cannot begin with `__`")]
    ReservedPrefix,
    /// The hook name contained characters outside the allowed set.
    #[error(
        "hook names may only contain lowercase letters, digits, underscores, dashes and periods, and must start with a letter"
    )]
    HookNameCharset,
    /// The namespace contained characters outside the allowed set.
    #[error(
        "namespaces may only contain letters, digits, underscores, dashes, periods and slashes, and must start with a letter"
    )]
    NamespaceCharset,
}
