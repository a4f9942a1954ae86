//! Module identity
//!
//! External collaborators (the host's resource bridge above all) need to know
//! which module is asking. [`AppHandle`] carries that identity: the module's
//! package id plus the display name from its descriptor, when one is set.

use std::fmt;

/// Identity a capsule module presents to external collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppHandle {
    package: String,
    display_name: Option<String>,
}

impl AppHandle {
    /// Create a handle for the given package id.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            display_name: None,
        }
    }

    /// Attach a human-readable display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// The module's package id (e.g. `"com.example.notes"`).
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Display name, falling back to the package id.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.package)
    }
}

impl fmt::Display for AppHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.package)
    }
}
