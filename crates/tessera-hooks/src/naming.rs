//! Validation of hook names and namespaces.
//!
//! Hook names identify extension points (`save_content`, `block.category`);
//! namespaces identify who registered a handler
//! (`my-extension/uppercase-title`). Both are validated at every mutation
//! boundary so malformed input never reaches the registry tables.

use crate::error::InvalidNameError;

/// Checks a hook name: non-empty, no reserved `__` prefix, and
/// `[a-z][a-z0-9_.-]*`.
pub(crate) fn validate_hook_name(hook_name: &str) -> Result<(), InvalidNameError> {
    if hook_name.is_empty() {
        return Err(InvalidNameError::Empty);
    }
    if hook_name.starts_with("__") {
        return Err(InvalidNameError::ReservedPrefix);
    }

    let mut chars = hook_name.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let rest_ok = chars.all(|c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-')
    });
    if !first_ok || !rest_ok {
        return Err(InvalidNameError::HookNameCharset);
    }

    Ok(())
}

/// Checks a namespace: non-empty and `[a-zA-Z][a-zA-Z0-9_.\-/]*`.
pub(crate) fn validate_namespace(namespace: &str) -> Result<(), InvalidNameError> {
    if namespace.is_empty() {
        return Err(InvalidNameError::Empty);
    }

    let mut chars = namespace.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/'));
    if !first_ok || !rest_ok {
        return Err(InvalidNameError::NamespaceCharset);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hook_names() {
        for name in ["init", "save_content", "block.category", "i18n-filter", "a", "v2.render"] {
            assert_eq!(validate_hook_name(name), Ok(()), "expected '{name}' to be valid");
        }
    }

    #[test]
    fn test_empty_hook_name() {
        assert_eq!(validate_hook_name(""), Err(InvalidNameError::Empty));
    }

    #[test]
    fn test_reserved_prefix() {
        assert_eq!(validate_hook_name("__private"), Err(InvalidNameError::ReservedPrefix));
        // A single leading underscore fails the charset rule instead.
        assert_eq!(validate_hook_name("_private"), Err(InvalidNameError::HookNameCharset));
    }

    #[test]
    fn test_hook_name_charset() {
        for name in ["Bad-Name!", "9lives", "has space", "content/save", "ümlaut", "UPPER"] {
            assert_eq!(
                validate_hook_name(name),
                Err(InvalidNameError::HookNameCharset),
                "expected '{name}' to be rejected"
            );
        }
    }

    #[test]
    fn test_inner_double_underscore_is_allowed() {
        assert_eq!(validate_hook_name("render__inner"), Ok(()));
    }

    #[test]
    fn test_valid_namespaces() {
        for namespace in ["demo", "MyExtension", "my-extension/uppercase-title", "a.b-c_d/e2"] {
            assert_eq!(
                validate_namespace(namespace),
                Ok(()),
                "expected '{namespace}' to be valid"
            );
        }
    }

    #[test]
    fn test_invalid_namespaces() {
        assert_eq!(validate_namespace(""), Err(InvalidNameError::Empty));
        for namespace in ["_private", "9lives", "has space", "/leading-slash"] {
            assert_eq!(
                validate_namespace(namespace),
                Err(InvalidNameError::NamespaceCharset),
                "expected '{namespace}' to be rejected"
            );
        }
    }
}
