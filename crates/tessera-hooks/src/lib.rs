//! # tessera-hooks
//!
//! Priority-ordered, namespaced hook dispatch for Tessera. Provides:
//!
//! - Action hooks (side effects) and filter hooks (value threading)
//! - Deterministic ordering: priority first, registration order on ties
//! - Safe mutation during dispatch — handlers may add or remove handlers,
//!   including their own, while the hook they belong to is running
//! - Namespace-tagged registration for targeted removal
//! - A process-wide default registry plus fully isolated instances
//!
//! ```
//! use serde_json::json;
//! use tessera_hooks::Hooks;
//!
//! let hooks = Hooks::new();
//! hooks.add_filter("content.title", "demo/uppercase", |value, _args| {
//!     json!(value.as_str().unwrap_or_default().to_uppercase())
//! });
//!
//! let title = hooks.apply_filters("content.title", json!("hello"), &[]);
//! assert_eq!(title, json!("HELLO"));
//! ```
//!
//! Malformed input (bad hook name, bad namespace) is reported through
//! `tracing` and the call becomes a no-op; a handler that panics propagates
//! to the dispatch caller unchanged.

pub mod error;
pub mod registry;

mod global;
mod handler;
mod naming;
mod store;

pub use error::InvalidNameError;
pub use global::{
    add_action, add_action_with_priority, add_filter, add_filter_with_priority, apply_filters,
    create_hooks, current_action, current_filter, default_hooks, did_action, did_filter, do_action,
    doing_action, doing_filter, has_action, has_filter, remove_action, remove_all_actions,
    remove_all_filters, remove_filter, remove_namespace,
};
pub use handler::DEFAULT_PRIORITY;
pub use registry::Hooks;
