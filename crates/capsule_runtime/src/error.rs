//! Capsule runtime error types

use std::path::PathBuf;

use capsule_host::BridgeError;
use thiserror::Error;

/// Errors surfaced while adapting a context to a host environment.
///
/// Adaptation failure is recoverable by definition: the startup path logs it
/// and keeps running with the module's own context.
#[derive(Error, Debug)]
pub enum AdaptError {
    /// No host link is installed in this process
    #[error("no host link installed; module is standalone")]
    NotHosted,

    /// The host's resource bridge failed
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Capsule runtime errors
#[derive(Error, Debug)]
pub enum CapsuleError {
    /// No module descriptor was found
    #[error("no capsule.toml found in {}", .0.display())]
    MissingDescriptor(PathBuf),

    /// Failed to read the module descriptor
    #[error("failed to read {}: {source}", .path.display())]
    DescriptorIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The module descriptor is not valid TOML
    #[error("failed to parse module descriptor: {0}")]
    DescriptorParse(#[from] toml::de::Error),

    /// Failed to serialize the module descriptor
    #[error("failed to encode module descriptor: {0}")]
    DescriptorEncode(#[from] toml::ser::Error),
}

/// Result type for capsule runtime operations
pub type Result<T> = std::result::Result<T, CapsuleError>;
