//! Host context adaptation
//!
//! When a module starts inside a host process its own resource table is not
//! directly usable: string and style ids resolve against the host's merged
//! table. The adapter re-binds a module's context to the host, in one linear
//! pass over the installed link.

use capsule_core::AppHandle;
use capsule_host::HostRegistry;
use capsule_theme::StyleTable;
use tracing::debug;

use crate::context::{BaseContext, ThemedContext};
use crate::error::AdaptError;

/// Rebinds a module's rendering context to host-supplied state.
pub struct ContextAdapter<'a> {
    registry: &'a HostRegistry,
    styles: &'a StyleTable,
    app: AppHandle,
    theme_name: String,
}

impl<'a> ContextAdapter<'a> {
    /// Create an adapter over the given registry and style table.
    pub fn new(
        registry: &'a HostRegistry,
        styles: &'a StyleTable,
        app: AppHandle,
        theme_name: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            styles,
            app,
            theme_name: theme_name.into(),
        }
    }

    /// Adapt `base` to the announced host.
    ///
    /// Bridges the host's resource table first, so a bridging failure (or a
    /// missing link) aborts before any wrapper exists. A theme name the style
    /// table does not know is not a failure: the wrapper comes back with
    /// resources patched and the theme override unset.
    ///
    /// For fixed inputs the result is the same on every call; there is no
    /// state to roll back.
    pub fn adapt(&self, base: BaseContext) -> Result<ThemedContext, AdaptError> {
        let link = self.registry.current().ok_or(AdaptError::NotHosted)?;
        let resources = link.bridge_resources(&self.app)?;
        debug!(
            "bridged resources for {} from host {}",
            self.app,
            link.host_name()
        );

        let mut context = ThemedContext::over(base);
        context.set_resources(resources);

        match self.styles.style_id(&self.theme_name) {
            Some(id) if !id.is_none() => {
                debug!("applying host theme {} ({id})", self.theme_name);
                context.set_theme(id);
            }
            _ => debug!(
                "no style id for {}; keeping the base theme",
                self.theme_name
            ),
        }

        Ok(context)
    }
}
