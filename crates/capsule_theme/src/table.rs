//! Style name resolution
//!
//! Modules refer to styles by name in their descriptors; hosts and the
//! standalone runtime refer to them by packed id. The table maps one to the
//! other. Name lookups happen on the module activation path, so they must
//! never panic: a name the table does not know, and any failure while
//! looking, both read as `None`.

use std::sync::{OnceLock, RwLock};

use capsule_core::StyleId;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::catalog::design_styles;
use crate::pack::StylePack;

/// Global style table instance.
static STYLE_TABLE: OnceLock<StyleTable> = OnceLock::new();

/// Name to packed-id mapping for design styles.
pub struct StyleTable {
    entries: RwLock<FxHashMap<String, StyleId>>,
}

impl StyleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create a table seeded with the built-in design styles.
    pub fn with_builtin() -> Self {
        let table = Self::new();
        for (name, id) in design_styles() {
            table.register(name, id);
        }
        table
    }

    /// Install a custom table as the global one.
    ///
    /// Safe to call multiple times; the first call wins. If nothing installs
    /// one, [`StyleTable::global`] falls back to the built-in set.
    pub fn init(table: StyleTable) {
        let _ = STYLE_TABLE.set(table);
    }

    /// Get the global style table, seeding the built-in styles on first use.
    pub fn global() -> &'static StyleTable {
        STYLE_TABLE.get_or_init(StyleTable::with_builtin)
    }

    /// Register a style, replacing any entry under the same name.
    pub fn register(&self, name: impl Into<String>, id: StyleId) {
        let name = name.into();
        match self.entries.write() {
            Ok(mut entries) => {
                if let Some(previous) = entries.insert(name.clone(), id) {
                    if previous != id {
                        debug!("style {name} remapped: {previous} -> {id}");
                    }
                }
            }
            Err(_) => debug!("style table lock poisoned; register of {name} dropped"),
        }
    }

    /// Resolve a style name to its packed id.
    pub fn style_id(&self, name: &str) -> Option<StyleId> {
        match self.entries.read() {
            Ok(entries) => entries.get(name).copied(),
            Err(_) => None,
        }
    }

    /// Whether a style name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.style_id(name).is_some()
    }

    /// Merge a pack into the table, returning the number of entries taken.
    ///
    /// Entries with a zero id are skipped: a module handed id 0 would render
    /// unstyled, which is strictly worse than keeping an existing mapping.
    pub fn merge_pack(&self, pack: &StylePack) -> usize {
        let mut merged = 0;
        for (name, id) in pack.entries() {
            if id.is_none() {
                warn!("style pack {:?}: entry {name} has id 0, skipped", pack.name);
                continue;
            }
            self.register(name, id);
            merged += 1;
        }
        debug!("merged {merged} styles from pack {:?}", pack.name);
        merged
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(entries) => entries.len(),
            Err(_) => 0,
        }
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
