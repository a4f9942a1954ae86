//! Packed style identifiers
//!
//! Capsule resource tables number their entries with a packed 32-bit id:
//! the high byte names the owning package, the next byte the resource type,
//! and the low 16 bits the entry within that type (`0xPPTTEEEE`). Styles are
//! one resource type among others, but they are the only ids this runtime
//! moves around, so the packed form lives here as [`StyleId`].
//!
//! `StyleId::NONE` (raw 0) is the "no style" sentinel: a themed context whose
//! theme override is `NONE` falls through to its base context.

use std::fmt;

/// Integer handle selecting a named visual style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(u32);

impl StyleId {
    /// The "no style" sentinel. Never a valid table entry.
    pub const NONE: StyleId = StyleId(0);

    /// Package byte for ids owned by the module's own resource table.
    pub const PACKAGE_APP: u8 = 0x7F;

    /// Package byte for ids owned by the platform's shared table.
    pub const PACKAGE_SYSTEM: u8 = 0x01;

    /// Pack a style id from its package, type, and entry parts.
    pub const fn pack(package: u8, ty: u8, entry: u16) -> StyleId {
        StyleId(((package as u32) << 24) | ((ty as u32) << 16) | entry as u32)
    }

    /// Wrap an already-packed raw id.
    pub const fn from_raw(raw: u32) -> StyleId {
        StyleId(raw)
    }

    /// The raw packed value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The owning package byte.
    pub const fn package(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The resource type byte.
    pub const fn ty(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The entry index within the type.
    pub const fn entry(self) -> u16 {
        self.0 as u16
    }

    /// Whether this is the "no style" sentinel.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl From<u32> for StyleId {
    fn from(raw: u32) -> Self {
        StyleId(raw)
    }
}

impl From<StyleId> for u32 {
    fn from(id: StyleId) -> Self {
        id.0
    }
}
