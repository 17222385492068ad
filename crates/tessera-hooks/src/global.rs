//! Process-wide default registry and the module-level convenience surface.
//!
//! Most applications use one shared registry for their whole extension
//! surface; the free functions here forward to it. Components that need an
//! isolated namespace (tests, embedded subsystems) call [`create_hooks`]
//! and own the instance instead.

use std::sync::LazyLock;

use serde_json::Value;

use crate::registry::Hooks;

static DEFAULT_HOOKS: LazyLock<Hooks> = LazyLock::new(Hooks::new);

/// The shared registry. Created on first use and lives for the remainder
/// of the process.
pub fn default_hooks() -> &'static Hooks {
    &DEFAULT_HOOKS
}

/// Creates a registry that shares nothing with the default instance.
pub fn create_hooks() -> Hooks {
    Hooks::new()
}

/// Registers an action handler on the default registry. See
/// [`Hooks::add_action`].
pub fn add_action<F>(hook_name: &str, namespace: &str, callback: F)
where
    F: Fn(&[Value]) + Send + Sync + 'static,
{
    default_hooks().add_action(hook_name, namespace, callback);
}

/// Registers an action handler at an explicit priority on the default
/// registry.
pub fn add_action_with_priority<F>(hook_name: &str, namespace: &str, callback: F, priority: i32)
where
    F: Fn(&[Value]) + Send + Sync + 'static,
{
    default_hooks().add_action_with_priority(hook_name, namespace, callback, priority);
}

/// Registers a filter handler on the default registry. See
/// [`Hooks::add_filter`].
pub fn add_filter<F>(hook_name: &str, namespace: &str, callback: F)
where
    F: Fn(Value, &[Value]) -> Value + Send + Sync + 'static,
{
    default_hooks().add_filter(hook_name, namespace, callback);
}

/// Registers a filter handler at an explicit priority on the default
/// registry.
pub fn add_filter_with_priority<F>(hook_name: &str, namespace: &str, callback: F, priority: i32)
where
    F: Fn(Value, &[Value]) -> Value + Send + Sync + 'static,
{
    default_hooks().add_filter_with_priority(hook_name, namespace, callback, priority);
}

/// Removes `namespace`'s action handlers for `hook_name` on the default
/// registry.
pub fn remove_action(hook_name: &str, namespace: &str) -> usize {
    default_hooks().remove_action(hook_name, namespace)
}

/// Removes `namespace`'s filter handlers for `hook_name` on the default
/// registry.
pub fn remove_filter(hook_name: &str, namespace: &str) -> usize {
    default_hooks().remove_filter(hook_name, namespace)
}

/// Removes every action handler for `hook_name` on the default registry.
pub fn remove_all_actions(hook_name: &str) -> usize {
    default_hooks().remove_all_actions(hook_name)
}

/// Removes every filter handler for `hook_name` on the default registry.
pub fn remove_all_filters(hook_name: &str) -> usize {
    default_hooks().remove_all_filters(hook_name)
}

/// Removes `namespace`'s handlers across every hook on the default
/// registry.
pub fn remove_namespace(namespace: &str) -> usize {
    default_hooks().remove_namespace(namespace)
}

/// Runs an action on the default registry. See [`Hooks::do_action`].
pub fn do_action(hook_name: &str, args: &[Value]) {
    default_hooks().do_action(hook_name, args);
}

/// Applies filters on the default registry. See [`Hooks::apply_filters`].
pub fn apply_filters(hook_name: &str, value: Value, args: &[Value]) -> Value {
    default_hooks().apply_filters(hook_name, value, args)
}

/// Whether the default registry has action handlers for `hook_name`.
pub fn has_action(hook_name: &str, namespace: Option<&str>) -> bool {
    default_hooks().has_action(hook_name, namespace)
}

/// Whether the default registry has filter handlers for `hook_name`.
pub fn has_filter(hook_name: &str, namespace: Option<&str>) -> bool {
    default_hooks().has_filter(hook_name, namespace)
}

/// How many times `hook_name` has run as an action on the default
/// registry.
pub fn did_action(hook_name: &str) -> u64 {
    default_hooks().did_action(hook_name)
}

/// How many times `hook_name` has run as a filter on the default registry.
pub fn did_filter(hook_name: &str) -> u64 {
    default_hooks().did_filter(hook_name)
}

/// Innermost action currently executing on the default registry.
pub fn current_action() -> Option<String> {
    default_hooks().current_action()
}

/// Innermost filter currently executing on the default registry.
pub fn current_filter() -> Option<String> {
    default_hooks().current_filter()
}

/// Whether an action is mid-execution on the default registry.
pub fn doing_action(hook_name: Option<&str>) -> bool {
    default_hooks().doing_action(hook_name)
}

/// Whether a filter is mid-execution on the default registry.
pub fn doing_filter(hook_name: Option<&str>) -> bool {
    default_hooks().doing_filter(hook_name)
}
