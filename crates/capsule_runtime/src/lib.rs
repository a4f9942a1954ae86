//! Capsule Module Runtime
//!
//! Startup runtime for capsule UI modules: packaged, self-contained UI
//! components that run as their own application or get loaded into a host
//! process by an external host loader. At component startup the runtime
//! decides which of the two worlds it is in and, when hosted, re-binds the
//! module's rendering context to the host's resources and theme.
//!
//! # Example
//!
//! ```rust
//! use capsule_runtime::prelude::*;
//!
//! let config = CapsuleConfig::new("com.example.notes");
//! let resources = Resources::from_resolver(
//!     StaticResources::new("module").with_str("app.title", "Notes"),
//! );
//! let base = BaseContext::new(resources, StyleId::NONE);
//!
//! let mut activity = CapsuleActivity::new(config, base);
//! activity.on_create();
//!
//! // No host loader announced itself, so the module runs standalone.
//! assert!(!activity.is_hosted());
//! assert!(activity.context().is_none());
//! ```

mod activity;
mod adapter;
mod config;
mod context;
mod error;
mod logging;

#[cfg(test)]
mod tests;

pub use activity::CapsuleActivity;
pub use adapter::ContextAdapter;
pub use config::{CapsuleConfig, ModuleConfig, ThemeConfig};
pub use context::{BaseContext, ThemedContext};
pub use error::{AdaptError, CapsuleError, Result};
pub use logging::init_logging;

// Re-export the surfaces a module touches at startup
pub use capsule_core::{
    AppHandle, ResourceError, ResourceResolver, Resources, StaticResources, StyleId,
};
pub use capsule_host::{
    install_host_link, is_hosted, uninstall_host_link, BridgeError, HostLink, HostRegistry,
    ResourceBridge,
};
pub use capsule_theme::{style_id, StylePack, StyleTable};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::activity::CapsuleActivity;
    pub use crate::adapter::ContextAdapter;
    pub use crate::config::CapsuleConfig;
    pub use crate::context::{BaseContext, ThemedContext};
    pub use crate::error::{AdaptError, CapsuleError, Result};
    pub use crate::logging::init_logging;

    // Core types
    pub use capsule_core::{AppHandle, ResourceResolver, Resources, StaticResources, StyleId};

    // Host boundary
    pub use capsule_host::{
        install_host_link, is_hosted, uninstall_host_link, BridgeError, HostLink, ResourceBridge,
    };

    // Style surface
    pub use capsule_theme::{catalog, style_id, StyleTable};
}
