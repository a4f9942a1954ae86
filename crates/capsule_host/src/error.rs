//! Host boundary error types

use thiserror::Error;

/// Resource bridging errors.
///
/// Bridge failure modes are opaque to the module: whatever went wrong on the
/// host side arrives here as a message and counts as adaptation failure.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The host is present but its bridge cannot serve right now.
    #[error("host bridge unavailable: {0}")]
    Unavailable(String),

    /// The host does not know the requesting module.
    #[error("host does not recognize module '{0}'")]
    UnknownModule(String),

    /// Any other host-side failure.
    #[error("resource bridge failed: {0}")]
    Other(String),
}
