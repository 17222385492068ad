//! The [`Hooks`] registry — the paired action/filter surface over two
//! stores sharing one dispatch engine.

use std::sync::Arc;

use serde_json::Value;

use crate::handler::{DEFAULT_PRIORITY, HookCallback};
use crate::store::{HookKind, HookStore};

/// A self-contained hook registry.
///
/// Actions and filters are independent tables driven by the same engine:
/// actions run for their side effects, filters thread a value through every
/// handler. Handlers run synchronously on the calling thread, in priority
/// order (lower first, registration order on ties), and may re-enter the
/// registry — registering, removing, or running hooks, including the one
/// currently executing — without corrupting the pass in flight.
///
/// Instances share nothing with each other or with the process-wide
/// default instance (see [`crate::default_hooks`]).
#[derive(Debug)]
pub struct Hooks {
    actions: HookStore,
    filters: HookStore,
}

impl Hooks {
    /// Creates an empty, isolated registry.
    pub fn new() -> Self {
        Self {
            actions: HookStore::new(HookKind::Action),
            filters: HookStore::new(HookKind::Filter),
        }
    }

    /// Registers an action handler at the default priority (10).
    pub fn add_action<F>(&self, hook_name: &str, namespace: &str, callback: F)
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        self.add_action_with_priority(hook_name, namespace, callback, DEFAULT_PRIORITY);
    }

    /// Registers an action handler at an explicit priority.
    pub fn add_action_with_priority<F>(
        &self,
        hook_name: &str,
        namespace: &str,
        callback: F,
        priority: i32,
    ) where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        let callback: HookCallback = Arc::new(move |args| {
            callback(args);
            Value::Null
        });
        self.actions.add(hook_name, namespace, callback, priority);
    }

    /// Registers a filter handler at the default priority (10).
    ///
    /// The callback receives the threaded value plus any extra arguments
    /// and returns the (possibly transformed) value.
    pub fn add_filter<F>(&self, hook_name: &str, namespace: &str, callback: F)
    where
        F: Fn(Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.add_filter_with_priority(hook_name, namespace, callback, DEFAULT_PRIORITY);
    }

    /// Registers a filter handler at an explicit priority.
    pub fn add_filter_with_priority<F>(
        &self,
        hook_name: &str,
        namespace: &str,
        callback: F,
        priority: i32,
    ) where
        F: Fn(Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        let callback: HookCallback = Arc::new(move |args| match args.split_first() {
            Some((value, rest)) => callback(value.clone(), rest),
            None => callback(Value::Null, &[]),
        });
        self.filters.add(hook_name, namespace, callback, priority);
    }

    /// Removes `namespace`'s action handlers for `hook_name`. Returns the
    /// number removed; zero when nothing matched (not an error).
    pub fn remove_action(&self, hook_name: &str, namespace: &str) -> usize {
        self.actions.remove(hook_name, namespace)
    }

    /// Removes `namespace`'s filter handlers for `hook_name`.
    pub fn remove_filter(&self, hook_name: &str, namespace: &str) -> usize {
        self.filters.remove(hook_name, namespace)
    }

    /// Removes every action handler for `hook_name`, preserving its run
    /// count.
    pub fn remove_all_actions(&self, hook_name: &str) -> usize {
        self.actions.remove_all(hook_name)
    }

    /// Removes every filter handler for `hook_name`.
    pub fn remove_all_filters(&self, hook_name: &str) -> usize {
        self.filters.remove_all(hook_name)
    }

    /// Removes `namespace`'s handlers, actions and filters alike, across
    /// every hook name. Used when an extension is unloaded.
    pub fn remove_namespace(&self, namespace: &str) -> usize {
        self.actions.remove_namespace(namespace) + self.filters.remove_namespace(namespace)
    }

    /// Runs every action handler for `hook_name` in priority order,
    /// discarding return values. Unknown hook names run zero handlers.
    pub fn do_action(&self, hook_name: &str, args: &[Value]) {
        self.actions.run(hook_name, args.to_vec(), false);
    }

    /// Threads `value` through every filter handler for `hook_name` in
    /// priority order and returns the result. With no handlers registered
    /// the value comes back unchanged.
    pub fn apply_filters(&self, hook_name: &str, value: Value, args: &[Value]) -> Value {
        let mut full_args = Vec::with_capacity(args.len() + 1);
        full_args.push(value);
        full_args.extend_from_slice(args);
        self.filters
            .run(hook_name, full_args, true)
            .unwrap_or(Value::Null)
    }

    /// Whether `hook_name` has any action handlers, or any from
    /// `namespace` when one is given.
    pub fn has_action(&self, hook_name: &str, namespace: Option<&str>) -> bool {
        self.actions.has(hook_name, namespace)
    }

    /// Whether `hook_name` has any filter handlers.
    pub fn has_filter(&self, hook_name: &str, namespace: Option<&str>) -> bool {
        self.filters.has(hook_name, namespace)
    }

    /// How many times `hook_name` has been run as an action. Counts
    /// top-level and nested runs alike, including runs over zero handlers.
    pub fn did_action(&self, hook_name: &str) -> u64 {
        self.actions.did(hook_name)
    }

    /// How many times `hook_name` has been run as a filter.
    pub fn did_filter(&self, hook_name: &str) -> u64 {
        self.filters.did(hook_name)
    }

    /// Name of the innermost action currently executing.
    pub fn current_action(&self) -> Option<String> {
        self.actions.current()
    }

    /// Name of the innermost filter currently executing.
    pub fn current_filter(&self) -> Option<String> {
        self.filters.current()
    }

    /// Whether `hook_name` (or, with `None`, any action) is mid-execution
    /// at any nesting depth.
    pub fn doing_action(&self, hook_name: Option<&str>) -> bool {
        self.actions.doing(hook_name)
    }

    /// Whether `hook_name` (or, with `None`, any filter) is mid-execution.
    pub fn doing_filter(&self, hook_name: Option<&str>) -> bool {
        self.filters.doing(hook_name)
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_filter_threads_value() {
        let hooks = Hooks::new();
        hooks.add_filter("content.render", "test/add-one", |value, _args| {
            json!(value.as_i64().unwrap_or(0) + 1)
        });
        hooks.add_filter("content.render", "test/times-ten", |value, _args| {
            json!(value.as_i64().unwrap_or(0) * 10)
        });

        assert_eq!(hooks.apply_filters("content.render", json!(1), &[]), json!(20));
    }

    #[test]
    fn test_unregistered_filter_returns_value_unchanged() {
        let hooks = Hooks::new();
        assert_eq!(hooks.apply_filters("nothing.here", json!(5), &[]), json!(5));
    }

    #[test]
    fn test_action_and_filter_tables_are_separate() {
        let hooks = Hooks::new();
        hooks.add_action("sync", "test/side-effect", |_args| {});

        assert!(hooks.has_action("sync", None));
        assert!(!hooks.has_filter("sync", None));
        assert_eq!(hooks.did_filter("sync"), 0);
    }

    #[test]
    fn test_invalid_name_is_a_noop() {
        let hooks = Hooks::new();
        hooks.add_action("__bad", "test/cb", |_args| {});
        hooks.add_action("Bad-Name!", "test/cb", |_args| {});

        assert!(!hooks.has_action("__bad", None));
        assert!(!hooks.has_action("Bad-Name!", None));
        assert_eq!(hooks.remove_action("__bad", "test/cb"), 0);
    }

    #[test]
    fn test_invalid_namespace_is_a_noop() {
        let hooks = Hooks::new();
        hooks.add_action("init", "not a namespace", |_args| {});
        assert!(!hooks.has_action("init", None));
    }

    #[test]
    fn test_remove_action_reports_count() {
        let hooks = Hooks::new();
        hooks.add_action("init", "ext/a", |_args| {});
        hooks.add_action("init", "ext/a", |_args| {});
        hooks.add_action("init", "ext/b", |_args| {});

        assert_eq!(hooks.remove_action("init", "ext/a"), 2);
        assert_eq!(hooks.remove_action("init", "ext/a"), 0);
        assert!(hooks.has_action("init", Some("ext/b")));
    }

    #[test]
    fn test_remove_namespace_spans_hooks_and_kinds() {
        let hooks = Hooks::new();
        hooks.add_action("init", "ext/a", |_args| {});
        hooks.add_action("teardown", "ext/a", |_args| {});
        hooks.add_filter("content.render", "ext/a", |value, _args| value);
        hooks.add_action("init", "ext/b", |_args| {});

        assert_eq!(hooks.remove_namespace("ext/a"), 3);
        assert!(!hooks.has_filter("content.render", None));
        assert!(hooks.has_action("init", Some("ext/b")));
    }

    #[test]
    fn test_did_action_counts_runs_with_zero_handlers() {
        let hooks = Hooks::new();
        assert_eq!(hooks.did_action("heartbeat"), 0);
        hooks.do_action("heartbeat", &[]);
        hooks.do_action("heartbeat", &[]);
        assert_eq!(hooks.did_action("heartbeat"), 2);
    }

    #[test]
    fn test_current_action_outside_dispatch_is_none() {
        let hooks = Hooks::new();
        assert_eq!(hooks.current_action(), None);
        assert!(!hooks.doing_action(None));
    }
}
