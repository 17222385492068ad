//! Convenience macros for extension development.

/// Macro for creating [`crate::ExtensionInfo`] values without spelling
/// out every field.
///
/// # Example
/// ```rust,ignore
/// let info = extension_info!(
///     id: "reading-time",
///     name: "Reading Time",
///     version: "1.0.0",
///     description: "Estimates reading time for content",
///     author: "Dev"
/// );
/// ```
#[macro_export]
macro_rules! extension_info {
    (
        id: $id:expr,
        name: $name:expr,
        version: $version:expr,
        description: $desc:expr,
        author: $author:expr
    ) => {
        $crate::prelude::ExtensionInfo {
            id: $id.to_string(),
            name: $name.to_string(),
            version: $version.to_string(),
            description: $desc.to_string(),
            author: $author.to_string(),
            hooks: Vec::new(),
            priority: 100,
        }
    };
    (
        id: $id:expr,
        name: $name:expr,
        version: $version:expr,
        description: $desc:expr,
        author: $author:expr,
        priority: $priority:expr
    ) => {
        $crate::prelude::ExtensionInfo {
            id: $id.to_string(),
            name: $name.to_string(),
            version: $version.to_string(),
            description: $desc.to_string(),
            author: $author.to_string(),
            hooks: Vec::new(),
            priority: $priority,
        }
    };
}
