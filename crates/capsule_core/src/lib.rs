//! Capsule Core
//!
//! Foundational types shared by every crate in the Capsule workspace:
//!
//! - **Style identifiers**: packed integer ids selecting named visual styles
//! - **Resource resolution**: the trait boundary that maps string identifiers
//!   to concrete assets, plus a cheap-clone handle around it
//! - **Module identity**: the handle a capsule module presents to external
//!   collaborators (most importantly the host's resource bridge)
//!
//! # Example
//!
//! ```rust
//! use capsule_core::{Resources, StaticResources, StyleId};
//!
//! let resources = Resources::from_resolver(
//!     StaticResources::new("demo").with_str("strings/title", "Capsule"),
//! );
//! assert!(resources.contains("strings/title"));
//!
//! let theme = StyleId::pack(StyleId::PACKAGE_APP, 0x14, 0x0300);
//! assert_eq!(theme.raw(), 0x7F14_0300);
//! ```

pub mod ident;
pub mod resources;
pub mod style;

pub use ident::AppHandle;
pub use resources::{ResourceError, ResourceResolver, Resources, StaticResources};
pub use style::StyleId;
