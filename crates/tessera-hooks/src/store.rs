//! The hook store engine — a priority-ordered handler table plus the
//! execution-frame stack that keeps iteration consistent while handlers
//! mutate the table mid-run.
//!
//! Actions and filters each own one store. The engine is identical for
//! both; only the calling convention differs (see [`crate::Hooks`]).

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::{debug, warn};

use crate::handler::{Handler, HookCallback};
use crate::naming::{validate_hook_name, validate_namespace};

/// Which calling convention a store serves. Used only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HookKind {
    Action,
    Filter,
}

impl HookKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Filter => "filter",
        }
    }
}

/// All handlers for one hook name, plus how many times it has run.
///
/// Entries are never deleted: removing every handler leaves an empty entry
/// so the run count survives.
#[derive(Debug, Default)]
struct HookEntry {
    handlers: Vec<Handler>,
    runs: u64,
}

/// One in-progress traversal of a hook's handler list.
///
/// `current_index` is the next position to execute: the engine advances it
/// before invoking, so registration and removal triggered from inside the
/// running handler see a cursor they can correct without underflow. The
/// `id` is a monotonic token so the frame can be found again regardless of
/// what was pushed or popped around it.
#[derive(Debug)]
struct ExecutionFrame {
    id: u64,
    hook_name: String,
    current_index: usize,
}

#[derive(Debug, Default)]
struct StoreInner {
    hooks: HashMap<String, HookEntry>,
    current: Vec<ExecutionFrame>,
    next_frame_id: u64,
}

/// Priority-ordered hook table with re-entrancy-safe execution.
#[derive(Debug)]
pub(crate) struct HookStore {
    kind: HookKind,
    inner: Mutex<StoreInner>,
}

impl HookStore {
    pub(crate) fn new(kind: HookKind) -> Self {
        Self {
            kind,
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// The lock guards table bookkeeping only and is never held across a
    /// handler invocation, so a panicking handler cannot poison it.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registers a callback for `hook_name`. Invalid names and namespaces
    /// are reported and ignored.
    pub(crate) fn add(
        &self,
        hook_name: &str,
        namespace: &str,
        callback: HookCallback,
        priority: i32,
    ) {
        if let Err(error) = validate_hook_name(hook_name) {
            warn!(
                hook = hook_name,
                kind = self.kind.as_str(),
                %error,
                "rejected handler registration"
            );
            return;
        }
        if let Err(error) = validate_namespace(namespace) {
            warn!(
                hook = hook_name,
                namespace,
                kind = self.kind.as_str(),
                %error,
                "rejected handler registration"
            );
            return;
        }

        let mut inner = self.lock();
        let StoreInner { hooks, current, .. } = &mut *inner;
        let entry = hooks.entry(hook_name.to_string()).or_default();

        // First position with a strictly greater priority; equal priorities
        // keep registration order.
        let index = entry
            .handlers
            .iter()
            .position(|h| h.priority > priority)
            .unwrap_or(entry.handlers.len());
        entry.handlers.insert(
            index,
            Handler {
                callback,
                namespace: namespace.to_string(),
                priority,
            },
        );

        // Pending positions shifted right; keep active cursors on the same
        // next handler. A handler landing exactly at a cursor is picked up
        // later in that same pass.
        for frame in current.iter_mut() {
            if frame.hook_name == hook_name && frame.current_index > index {
                frame.current_index += 1;
            }
        }

        debug!(
            hook = hook_name,
            namespace,
            priority,
            kind = self.kind.as_str(),
            "handler registered"
        );
    }

    /// Removes every handler registered under `namespace` for `hook_name`.
    /// Returns how many were removed; an unknown hook name removes zero and
    /// is not an error.
    pub(crate) fn remove(&self, hook_name: &str, namespace: &str) -> usize {
        if let Err(error) = validate_hook_name(hook_name) {
            warn!(
                hook = hook_name,
                kind = self.kind.as_str(),
                %error,
                "rejected handler removal"
            );
            return 0;
        }
        if let Err(error) = validate_namespace(namespace) {
            warn!(
                hook = hook_name,
                namespace,
                kind = self.kind.as_str(),
                %error,
                "rejected handler removal"
            );
            return 0;
        }

        let mut inner = self.lock();
        let StoreInner { hooks, current, .. } = &mut *inner;
        let Some(entry) = hooks.get_mut(hook_name) else {
            return 0;
        };

        let removed = remove_matching(hook_name, entry, current, namespace);
        if removed > 0 {
            debug!(
                hook = hook_name,
                namespace,
                removed,
                kind = self.kind.as_str(),
                "handlers removed"
            );
        }
        removed
    }

    /// Clears every handler for `hook_name`, keeping the run count. Frames
    /// mid-iteration on this hook terminate at their next length check.
    pub(crate) fn remove_all(&self, hook_name: &str) -> usize {
        if let Err(error) = validate_hook_name(hook_name) {
            warn!(
                hook = hook_name,
                kind = self.kind.as_str(),
                %error,
                "rejected handler removal"
            );
            return 0;
        }

        let mut inner = self.lock();
        let Some(entry) = inner.hooks.get_mut(hook_name) else {
            return 0;
        };

        let removed = entry.handlers.len();
        entry.handlers.clear();
        if removed > 0 {
            debug!(
                hook = hook_name,
                removed,
                kind = self.kind.as_str(),
                "all handlers removed"
            );
        }
        removed
    }

    /// Removes a namespace's handlers across every hook name. Returns the
    /// total removed.
    pub(crate) fn remove_namespace(&self, namespace: &str) -> usize {
        if let Err(error) = validate_namespace(namespace) {
            warn!(
                namespace,
                kind = self.kind.as_str(),
                %error,
                "rejected namespace removal"
            );
            return 0;
        }

        let mut inner = self.lock();
        let StoreInner { hooks, current, .. } = &mut *inner;
        let mut removed = 0;
        for (hook_name, entry) in hooks.iter_mut() {
            removed += remove_matching(hook_name, entry, current, namespace);
        }
        if removed > 0 {
            debug!(
                namespace,
                removed,
                kind = self.kind.as_str(),
                "namespace handlers removed"
            );
        }
        removed
    }

    /// Runs every handler for `hook_name` in priority order.
    ///
    /// With `return_first` set, the first argument is threaded through each
    /// handler's return value and handed back (filter convention);
    /// otherwise returns are discarded (action convention). The run is
    /// counted either way, including runs over zero handlers. Handlers
    /// added or removed by a running handler are honored within the pass.
    pub(crate) fn run(
        &self,
        hook_name: &str,
        mut args: Vec<Value>,
        return_first: bool,
    ) -> Option<Value> {
        if let Err(error) = validate_hook_name(hook_name) {
            warn!(
                hook = hook_name,
                kind = self.kind.as_str(),
                %error,
                "refused to run hook"
            );
            return if return_first { args.into_iter().next() } else { None };
        }

        let frame_id = {
            let mut inner = self.lock();
            let entry = inner.hooks.entry(hook_name.to_string()).or_default();
            if entry.handlers.is_empty() {
                // Running zero handlers is still a run.
                entry.runs += 1;
                return if return_first { args.into_iter().next() } else { None };
            }
            let handler_count = entry.handlers.len();

            let id = inner.next_frame_id;
            inner.next_frame_id += 1;
            inner.current.push(ExecutionFrame {
                id,
                hook_name: hook_name.to_string(),
                current_index: 0,
            });

            debug!(
                hook = hook_name,
                handlers = handler_count,
                kind = self.kind.as_str(),
                "running hook"
            );
            id
        };

        // The lock is released around every invocation so handlers can
        // re-enter the registry.
        loop {
            let callback = {
                let mut inner = self.lock();
                let Some(position) = inner.current.iter().position(|f| f.id == frame_id) else {
                    break;
                };
                let index = inner.current[position].current_index;
                let callback = match inner.hooks.get(hook_name) {
                    Some(entry) if index < entry.handlers.len() => {
                        entry.handlers[index].callback.clone()
                    }
                    _ => break,
                };
                inner.current[position].current_index = index + 1;
                callback
            };

            let result = callback(&args);
            if return_first {
                if let Some(first) = args.first_mut() {
                    *first = result;
                }
            }
        }

        let mut inner = self.lock();
        if let Some(entry) = inner.hooks.get_mut(hook_name) {
            entry.runs += 1;
        }
        if let Some(position) = inner.current.iter().position(|f| f.id == frame_id) {
            inner.current.remove(position);
        }
        if return_first { args.into_iter().next() } else { None }
    }

    /// Whether any handler (or, when given, any handler in `namespace`) is
    /// registered for `hook_name`.
    pub(crate) fn has(&self, hook_name: &str, namespace: Option<&str>) -> bool {
        let inner = self.lock();
        let Some(entry) = inner.hooks.get(hook_name) else {
            return false;
        };
        match namespace {
            Some(namespace) => entry.handlers.iter().any(|h| h.namespace == namespace),
            None => !entry.handlers.is_empty(),
        }
    }

    /// How many times `hook_name` has run. Zero for unknown names.
    pub(crate) fn did(&self, hook_name: &str) -> u64 {
        let inner = self.lock();
        inner.hooks.get(hook_name).map(|entry| entry.runs).unwrap_or(0)
    }

    /// Name of the innermost hook currently executing, if any.
    pub(crate) fn current(&self) -> Option<String> {
        let inner = self.lock();
        inner.current.last().map(|frame| frame.hook_name.clone())
    }

    /// Whether `hook_name` is anywhere on the active execution stack.
    /// With `None`, reports whether anything is executing at all.
    pub(crate) fn doing(&self, hook_name: Option<&str>) -> bool {
        let inner = self.lock();
        match hook_name {
            Some(name) => inner.current.iter().any(|frame| frame.hook_name == name),
            None => !inner.current.is_empty(),
        }
    }
}

/// Removes `namespace`'s handlers from one entry, correcting active cursors
/// on the same hook name. Scans from the tail so earlier indexes stay valid.
fn remove_matching(
    hook_name: &str,
    entry: &mut HookEntry,
    current: &mut [ExecutionFrame],
    namespace: &str,
) -> usize {
    let mut removed = 0;
    for index in (0..entry.handlers.len()).rev() {
        if entry.handlers[index].namespace != namespace {
            continue;
        }
        entry.handlers.remove(index);
        removed += 1;

        // Pending positions past the removal shifted left; `current_index`
        // is only decremented when strictly greater, so it cannot underflow
        // and the handler about to run stays about to run.
        for frame in current.iter_mut() {
            if frame.hook_name == hook_name && frame.current_index > index {
                frame.current_index -= 1;
            }
        }
    }
    removed
}
