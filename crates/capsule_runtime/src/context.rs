//! Rendering context wrappers
//!
//! [`BaseContext`] is the context a module builds for itself from its own
//! packaged table. [`ThemedContext`] wraps a base context with host overrides
//! after adaptation; accessors fall through to the base while an override is
//! unset, so render code reads one surface in both deployment modes.

use capsule_core::{Resources, StyleId};

/// The module's own rendering context before any host adaptation.
#[derive(Debug, Clone)]
pub struct BaseContext {
    resources: Resources,
    theme: StyleId,
    scale_factor: f64,
}

impl BaseContext {
    /// Create a context over the module's own resource table.
    pub fn new(resources: Resources, theme: StyleId) -> Self {
        Self {
            resources,
            theme,
            scale_factor: 1.0,
        }
    }

    /// Set the display scale factor (defaults to 1.0).
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// The module's resource handle.
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// The module's own theme.
    pub fn theme(&self) -> StyleId {
        self.theme
    }

    /// Replace the module's own theme.
    pub fn set_theme(&mut self, theme: StyleId) {
        self.theme = theme;
    }

    /// The display scale factor.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

/// A base context re-bound to host-supplied state.
///
/// Built once per component startup when hosted, owned by that component for
/// its lifetime, dropped with it. Both overrides start unset; the adapter
/// fills them in through the public mutators.
#[derive(Debug)]
pub struct ThemedContext {
    base: BaseContext,
    resources: Option<Resources>,
    theme: StyleId,
}

impl ThemedContext {
    /// Wrap a base context with no overrides.
    pub fn over(base: BaseContext) -> Self {
        Self {
            base,
            resources: None,
            theme: StyleId::NONE,
        }
    }

    /// Install the host-bridged resource handle.
    pub fn set_resources(&mut self, resources: Resources) {
        self.resources = Some(resources);
    }

    /// Install the host theme override.
    pub fn set_theme(&mut self, theme: StyleId) {
        self.theme = theme;
    }

    /// Effective resources: the override when set, else the base context's.
    pub fn resources(&self) -> &Resources {
        self.resources
            .as_ref()
            .unwrap_or_else(|| self.base.resources())
    }

    /// Effective theme: the override when set, else the base context's.
    pub fn theme(&self) -> StyleId {
        if self.theme.is_none() {
            self.base.theme()
        } else {
            self.theme
        }
    }

    /// The override handle, if one was installed.
    pub fn resource_override(&self) -> Option<&Resources> {
        self.resources.as_ref()
    }

    /// The theme override; [`StyleId::NONE`] while unset.
    pub fn theme_override(&self) -> StyleId {
        self.theme
    }

    /// The wrapped base context.
    pub fn base(&self) -> &BaseContext {
        &self.base
    }
}
