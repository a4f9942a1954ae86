//! Capsule module descriptor handling

use std::fs;
use std::path::Path;

use capsule_core::AppHandle;
use serde::{Deserialize, Serialize};

use crate::error::{CapsuleError, Result};

/// Top-level capsule module descriptor (capsule.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CapsuleConfig {
    pub module: ModuleConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Module identity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModuleConfig {
    /// Package id the module presents to hosts (e.g. "com.example.notes")
    pub package: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Theme selection per deployment mode
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Style name requested when running hosted
    #[serde(default = "default_hosted_theme")]
    pub hosted: String,
    /// Style name applied when running standalone
    #[serde(default = "default_standalone_theme")]
    pub standalone: String,
}

fn default_hosted_theme() -> String {
    capsule_theme::catalog::DAY_NIGHT.to_string()
}

fn default_standalone_theme() -> String {
    capsule_theme::catalog::LIGHT.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            hosted: default_hosted_theme(),
            standalone: default_standalone_theme(),
        }
    }
}

impl CapsuleConfig {
    /// Load a descriptor from a directory (looks for capsule.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("capsule.toml")
        };

        if !config_path.exists() {
            return Err(CapsuleError::MissingDescriptor(path.to_path_buf()));
        }

        let content =
            fs::read_to_string(&config_path).map_err(|source| CapsuleError::DescriptorIo {
                path: config_path.clone(),
                source,
            })?;

        Self::from_toml_str(&content)
    }

    /// Parse a descriptor from TOML source
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Create a descriptor for the given module package
    pub fn new(package: &str) -> Self {
        Self {
            module: ModuleConfig {
                package: package.to_string(),
                version: default_version(),
                display_name: None,
            },
            theme: ThemeConfig::default(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The identity this module presents to external collaborators
    pub fn app_handle(&self) -> AppHandle {
        let handle = AppHandle::new(&self.module.package);
        match &self.module.display_name {
            Some(name) => handle.with_display_name(name),
            None => handle,
        }
    }
}
