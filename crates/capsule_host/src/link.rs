//! Host link registry
//!
//! The deployment environment is announced, not probed for: a host loader
//! that embeds a module calls [`install_host_link`] with its bridge before
//! the module's UI starts, and uninstalls on unload. A module that finds no
//! link is standalone.
//!
//! [`is_hosted`] is deliberately lossy about failure: a poisoned registry
//! lock reads the same as "no link". Environment detection must never take
//! a module down.

use std::fmt;
use std::sync::{Arc, RwLock};

use capsule_core::{AppHandle, Resources};
use tracing::debug;

use crate::bridge::ResourceBridge;
use crate::error::BridgeError;

/// Process-wide host link slot.
static HOST_REGISTRY: HostRegistry = HostRegistry::new();

/// The capability record a host loader installs to announce itself.
///
/// Holds the host's display name and its resource bridge. The module only
/// ever borrows a link; installing and removing it is the loader's job.
pub struct HostLink {
    host_name: String,
    bridge: Arc<dyn ResourceBridge>,
}

impl HostLink {
    /// Create a link for the named host with the given bridge.
    pub fn new(host_name: impl Into<String>, bridge: impl ResourceBridge + 'static) -> Self {
        Self {
            host_name: host_name.into(),
            bridge: Arc::new(bridge),
        }
    }

    /// Create a link from an already-shared bridge.
    pub fn with_shared_bridge(
        host_name: impl Into<String>,
        bridge: Arc<dyn ResourceBridge>,
    ) -> Self {
        Self {
            host_name: host_name.into(),
            bridge,
        }
    }

    /// The host's display name.
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Bridge the host's resource table for `app`.
    pub fn bridge_resources(&self, app: &AppHandle) -> Result<Resources, BridgeError> {
        self.bridge.bridge_resources(app)
    }
}

impl fmt::Debug for HostLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostLink")
            .field("host_name", &self.host_name)
            .finish_non_exhaustive()
    }
}

/// Installable slot for a [`HostLink`].
///
/// The process-wide instance behind [`install_host_link`] / [`is_hosted`] is
/// what production code uses; tests and embedding hosts can carry their own
/// registry and hand it to the runtime explicitly.
pub struct HostRegistry {
    link: RwLock<Option<Arc<HostLink>>>,
}

impl HostRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            link: RwLock::new(None),
        }
    }

    /// Install a link, replacing any current one (last writer wins).
    pub fn install(&self, link: HostLink) {
        let link = Arc::new(link);
        match self.link.write() {
            Ok(mut slot) => {
                if let Some(previous) = slot.replace(link) {
                    debug!(
                        "host link replaced: {} is no longer the announced host",
                        previous.host_name()
                    );
                } else {
                    debug!("host link installed");
                }
            }
            Err(_) => debug!("host registry lock poisoned; install dropped"),
        }
    }

    /// Remove the current link, returning it if one was installed.
    pub fn uninstall(&self) -> Option<Arc<HostLink>> {
        match self.link.write() {
            Ok(mut slot) => {
                let removed = slot.take();
                if removed.is_some() {
                    debug!("host link uninstalled");
                }
                removed
            }
            Err(_) => None,
        }
    }

    /// Borrow the current link, if any.
    ///
    /// Any failure while looking, including a poisoned lock, reads as
    /// "no link".
    pub fn current(&self) -> Option<Arc<HostLink>> {
        match self.link.read() {
            Ok(slot) => slot.clone(),
            Err(_) => None,
        }
    }

    /// Whether a host link is installed.
    pub fn is_hosted(&self) -> bool {
        self.current().is_some()
    }
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HostRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostRegistry")
            .field("hosted", &self.is_hosted())
            .finish()
    }
}

/// The process-wide registry consulted by module startup.
pub fn registry() -> &'static HostRegistry {
    &HOST_REGISTRY
}

/// Announce a host to every module in this process.
///
/// Host loaders call this before starting any module UI. Installing again
/// replaces the previous link, so a loader that re-attaches after a reload
/// does not wedge the modules it carries.
pub fn install_host_link(link: HostLink) {
    HOST_REGISTRY.install(link);
}

/// Withdraw the announced host (loader unload path).
pub fn uninstall_host_link() -> Option<Arc<HostLink>> {
    HOST_REGISTRY.uninstall()
}

/// Borrow the announced host link, if any.
pub fn current_host_link() -> Option<Arc<HostLink>> {
    HOST_REGISTRY.current()
}

/// Whether this process has announced a host.
///
/// Absence of a link is a valid, expected outcome meaning "run standalone";
/// so is every failure while looking.
pub fn is_hosted() -> bool {
    HOST_REGISTRY.is_hosted()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullBridge;

    impl ResourceBridge for NullBridge {
        fn bridge_resources(&self, app: &AppHandle) -> Result<Resources, BridgeError> {
            Err(BridgeError::UnknownModule(app.package().to_string()))
        }
    }

    #[test]
    fn empty_registry_reads_standalone() {
        let registry = HostRegistry::new();
        assert!(!registry.is_hosted());
        assert!(registry.current().is_none());
        assert!(registry.uninstall().is_none());
    }

    #[test]
    fn install_then_uninstall_roundtrip() {
        let registry = HostRegistry::new();
        registry.install(HostLink::new("shell", NullBridge));

        assert!(registry.is_hosted());
        assert_eq!(registry.current().unwrap().host_name(), "shell");

        let removed = registry.uninstall().unwrap();
        assert_eq!(removed.host_name(), "shell");
        assert!(!registry.is_hosted());
    }

    #[test]
    fn reinstall_replaces_previous_link() {
        let registry = HostRegistry::new();
        registry.install(HostLink::new("shell", NullBridge));
        registry.install(HostLink::new("kiosk", NullBridge));

        assert_eq!(registry.current().unwrap().host_name(), "kiosk");
    }

    #[test]
    fn poisoned_registry_reads_standalone() {
        let registry = Arc::new(HostRegistry::new());
        registry.install(HostLink::new("shell", NullBridge));

        // Poison the inner lock by panicking while holding the write guard.
        let poisoner = Arc::clone(&registry);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.link.write().unwrap();
            panic!("poison the registry");
        })
        .join();

        assert!(!registry.is_hosted());
        assert!(registry.current().is_none());
    }
}
