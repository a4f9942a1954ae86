//! Capsule component startup
//!
//! [`CapsuleActivity`] carries a module's UI component through startup. The
//! sequence is fixed: probe the host registry, then (hosted only) adapt the
//! rendering context. Adaptation failure is logged and dropped; the component
//! always reaches the running state with whatever context it has.

use capsule_core::{Resources, StyleId};
use capsule_host::{registry, HostRegistry};
use capsule_theme::StyleTable;
use tracing::{debug, info, warn};

use crate::adapter::ContextAdapter;
use crate::config::CapsuleConfig;
use crate::context::{BaseContext, ThemedContext};

/// A capsule UI component: runs standalone or adapts itself to a host.
pub struct CapsuleActivity {
    config: CapsuleConfig,
    base: BaseContext,
    hosted: bool,
    context: Option<ThemedContext>,
}

impl CapsuleActivity {
    /// Create a component in the not-yet-started state.
    pub fn new(config: CapsuleConfig, base: BaseContext) -> Self {
        Self {
            config,
            base,
            hosted: false,
            context: None,
        }
    }

    /// Run startup against the process-wide registry and style table.
    pub fn on_create(&mut self) {
        self.create_with(registry(), StyleTable::global());
    }

    /// Run startup against explicit collaborators.
    ///
    /// Hosts embedding modules in-process, and tests, pass their own registry
    /// and style table here instead of touching the global ones.
    pub fn create_with(&mut self, registry: &HostRegistry, styles: &StyleTable) {
        self.hosted = registry.is_hosted();

        if !self.hosted {
            info!("{} starting standalone", self.config.module.package);
            // Standalone keeps its own resources; only the theme comes from
            // the descriptor, and a theme the embedder already set wins.
            if self.base.theme().is_none() {
                if let Some(id) = styles.style_id(&self.config.theme.standalone) {
                    debug!("standalone theme {} ({id})", self.config.theme.standalone);
                    self.base.set_theme(id);
                }
            }
            self.context = None;
            return;
        }

        info!("{} starting hosted", self.config.module.package);
        let adapter = ContextAdapter::new(
            registry,
            styles,
            self.config.app_handle(),
            &self.config.theme.hosted,
        );
        match adapter.adapt(self.base.clone()) {
            Ok(context) => {
                debug!(
                    "context adapted: resources from {}, theme {}",
                    context.resources().origin(),
                    context.theme()
                );
                self.context = Some(context);
            }
            Err(e) => {
                warn!("context adaptation failed, continuing unadapted: {e}");
                self.context = None;
            }
        }
    }

    /// Tear down, discarding any adapted context.
    ///
    /// A later [`CapsuleActivity::on_create`] re-probes from scratch, so a
    /// host loader that attaches after the first startup is picked up.
    pub fn on_destroy(&mut self) {
        self.context = None;
        self.hosted = false;
    }

    /// Whether the last startup found a host link.
    pub fn is_hosted(&self) -> bool {
        self.hosted
    }

    /// The adapted context, when hosted adaptation succeeded.
    pub fn context(&self) -> Option<&ThemedContext> {
        self.context.as_ref()
    }

    /// Effective resources: the adapted context's when present, else the
    /// module's own.
    pub fn resources(&self) -> &Resources {
        match &self.context {
            Some(ctx) => ctx.resources(),
            None => self.base.resources(),
        }
    }

    /// Effective theme: the adapted context's when present, else the
    /// module's own.
    pub fn theme(&self) -> StyleId {
        match &self.context {
            Some(ctx) => ctx.theme(),
            None => self.base.theme(),
        }
    }

    /// The module package id.
    pub fn package(&self) -> &str {
        &self.config.module.package
    }
}
