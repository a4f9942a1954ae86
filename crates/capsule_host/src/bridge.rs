//! Resource bridging
//!
//! A module loaded into a foreign process cannot use its own resource table
//! directly; the host owns the table that is actually mounted. The bridge is
//! the host-supplied utility that hands the module a resolver for that table.

use capsule_core::{AppHandle, Resources};

use crate::error::BridgeError;

/// Host-supplied access to the resource table mounted for a module.
///
/// Contract: bridging must be idempotent and side-effect-free from the
/// module's perspective. Calling it twice for the same handle yields
/// equivalent resolvers and changes nothing the module can observe.
pub trait ResourceBridge: Send + Sync {
    /// Return a resource handle presenting the host's table for `app`.
    fn bridge_resources(&self, app: &AppHandle) -> Result<Resources, BridgeError>;
}
