//! Capsule host boundary
//!
//! Everything a capsule module knows about the process that may be hosting
//! it lives behind this crate. A host loader that embeds a module announces
//! itself by installing a [`HostLink`] into the process-wide registry; the
//! module's startup path asks [`is_hosted`] and, when hosted, borrows the
//! link's [`ResourceBridge`] to reach the host's resource table.
//!
//! Nothing here knows *how* the host loads or isolates module code; that is
//! the loader's business. This crate is only the meeting point.
//!
//! # Host loader side
//!
//! ```rust
//! use capsule_core::{AppHandle, Resources, StaticResources};
//! use capsule_host::{install_host_link, BridgeError, HostLink, ResourceBridge};
//!
//! struct ShellBridge;
//!
//! impl ResourceBridge for ShellBridge {
//!     fn bridge_resources(&self, app: &AppHandle) -> Result<Resources, BridgeError> {
//!         // A real host resolves `app` against its mounted module tables.
//!         let _ = app;
//!         Ok(Resources::from_resolver(StaticResources::new("shell")))
//!     }
//! }
//!
//! install_host_link(HostLink::new("shell", ShellBridge));
//! assert!(capsule_host::is_hosted());
//! # capsule_host::uninstall_host_link();
//! ```

pub mod bridge;
pub mod error;
pub mod link;

pub use bridge::ResourceBridge;
pub use error::BridgeError;
pub use link::{
    current_host_link, install_host_link, is_hosted, registry, uninstall_host_link, HostLink,
    HostRegistry,
};
