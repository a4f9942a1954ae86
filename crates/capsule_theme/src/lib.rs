//! Capsule style identity
//!
//! Packaged modules name the styles they want ("theme.day-night"); the
//! process they land in knows styles by packed id. This crate holds the
//! mapping between the two.
//!
//! # Overview
//!
//! - **Catalog**: the built-in design styles every module ships with
//! - **Table**: name to packed-id resolution, global or module-local
//! - **Packs**: TOML documents hosts merge to extend the table
//!
//! # Quick Start
//!
//! ```rust
//! use capsule_theme::{catalog, style_id};
//!
//! // The built-in set resolves without any setup.
//! let id = style_id(catalog::DAY_NIGHT);
//! assert_eq!(id, Some(catalog::THEME_DAY_NIGHT));
//!
//! // Unknown names resolve to None, never an error.
//! assert_eq!(style_id("no.such.style"), None);
//! ```
//!
//! Hosts that compile their own style tables install them before loading
//! modules:
//!
//! ```rust,ignore
//! use capsule_theme::{StylePack, StyleTable};
//!
//! let table = StyleTable::with_builtin();
//! table.merge_pack(&StylePack::from_toml_str(pack_toml)?);
//! StyleTable::init(table);
//! ```

pub mod catalog;
pub mod pack;
pub mod table;

pub use pack::{StylePack, StylePackError};
pub use table::StyleTable;

use capsule_core::StyleId;

/// Resolve a style name against the global [`StyleTable`].
pub fn style_id(name: &str) -> Option<StyleId> {
    StyleTable::global().style_id(name)
}

/// Register a style in the global [`StyleTable`].
pub fn register_style(name: impl Into<String>, id: StyleId) {
    StyleTable::global().register(name, id);
}
