//! Registered handler representation.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Priority used when the caller does not specify one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Type-erased callback stored in the registry.
///
/// Filter dispatch threads `args[0]` through the return value; action
/// dispatch discards it.
pub(crate) type HookCallback = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// One registered callback for a hook name.
pub(crate) struct Handler {
    /// The callback to invoke.
    pub callback: HookCallback,
    /// Identity tag of whoever registered this handler.
    pub namespace: String,
    /// Ordering key (lower runs first; ties keep registration order).
    pub priority: i32,
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("namespace", &self.namespace)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
