//! Resource resolution
//!
//! A resource resolver maps string identifiers ("strings/title",
//! "drawable/icon") to concrete assets. Standalone modules resolve against
//! their own packaged table; hosted modules are handed a resolver for the
//! host's table by the host's resource bridge. Either way, the rest of the
//! runtime only sees the [`Resources`] handle.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Resource resolution errors.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The identifier is not present in the table.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The entry exists but its payload could not be produced.
    #[error("failed to load resource '{name}': {reason}")]
    Load { name: String, reason: String },
}

/// Maps string identifiers to concrete assets.
///
/// Implementations must be cheap to query repeatedly; the runtime treats
/// resolution as side-effect-free.
pub trait ResourceResolver: Send + Sync {
    /// Resolve an identifier to its raw bytes.
    fn resolve(&self, name: &str) -> Result<Vec<u8>, ResourceError>;

    /// Whether the identifier is present in the table.
    fn contains(&self, name: &str) -> bool;

    /// Short label for the table's origin ("module", host name, ...).
    /// Used in logs only.
    fn origin(&self) -> &str;
}

/// Cheap-clone handle to a resource resolver.
///
/// Two handles compare identical (via [`Resources::ptr_eq`]) exactly when
/// they share the same underlying resolver, which is how the runtime checks
/// that an adapted context still presents the host-bridged table.
#[derive(Clone)]
pub struct Resources(Arc<dyn ResourceResolver>);

impl Resources {
    /// Wrap a shared resolver.
    pub fn new(resolver: Arc<dyn ResourceResolver>) -> Self {
        Resources(resolver)
    }

    /// Wrap an owned resolver.
    pub fn from_resolver(resolver: impl ResourceResolver + 'static) -> Self {
        Resources(Arc::new(resolver))
    }

    /// Resolve an identifier to its raw bytes.
    pub fn resolve(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        self.0.resolve(name)
    }

    /// Resolve an identifier to UTF-8 text.
    pub fn resolve_str(&self, name: &str) -> Result<String, ResourceError> {
        let bytes = self.0.resolve(name)?;
        String::from_utf8(bytes).map_err(|e| ResourceError::Load {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Whether the identifier is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// The underlying table's origin label.
    pub fn origin(&self) -> &str {
        self.0.origin()
    }

    /// Whether two handles share the same underlying resolver.
    pub fn ptr_eq(&self, other: &Resources) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources")
            .field("origin", &self.origin())
            .finish_non_exhaustive()
    }
}

/// In-memory resolver for standalone modules, demos, and tests.
///
/// Entries are registered up front; lookups never touch the filesystem.
#[derive(Default)]
pub struct StaticResources {
    origin: String,
    entries: HashMap<String, Vec<u8>>,
}

impl StaticResources {
    /// Create an empty table with the given origin label.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            entries: HashMap::new(),
        }
    }

    /// Register a raw byte entry.
    pub fn with_bytes(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(name.into(), bytes.into());
        self
    }

    /// Register a text entry.
    pub fn with_str(self, name: impl Into<String>, text: &str) -> Self {
        self.with_bytes(name, text.as_bytes().to_vec())
    }
}

impl ResourceResolver for StaticResources {
    fn resolve(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_resources_resolve_registered_entries() {
        let table = StaticResources::new("module")
            .with_str("strings/title", "Capsule")
            .with_bytes("raw/blob", vec![1u8, 2, 3]);

        let handle = Resources::from_resolver(table);
        assert_eq!(handle.resolve_str("strings/title").unwrap(), "Capsule");
        assert_eq!(handle.resolve("raw/blob").unwrap(), vec![1, 2, 3]);
        assert!(handle.contains("raw/blob"));
        assert_eq!(handle.origin(), "module");
    }

    #[test]
    fn missing_entries_report_not_found() {
        let handle = Resources::from_resolver(StaticResources::new("module"));
        assert!(!handle.contains("strings/absent"));
        assert!(matches!(
            handle.resolve("strings/absent"),
            Err(ResourceError::NotFound(_))
        ));
    }

    #[test]
    fn clones_share_identity() {
        let a = Resources::from_resolver(StaticResources::new("module"));
        let b = a.clone();
        let other = Resources::from_resolver(StaticResources::new("module"));

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&other));
    }
}
