//! Built-in design styles
//!
//! Every packaged module ships with the same four baseline styles so a
//! module dropped into an empty process still resolves a usable theme.
//! Hosts extend the set by merging style packs at load time.

use capsule_core::StyleId;

/// Adaptive style that follows the host's light/dark preference.
pub const THEME_DAY_NIGHT: StyleId = StyleId::pack(StyleId::PACKAGE_APP, 0x14, 0x0300);

/// Always-light variant.
pub const THEME_LIGHT: StyleId = StyleId::pack(StyleId::PACKAGE_APP, 0x14, 0x0301);

/// Always-dark variant.
pub const THEME_DARK: StyleId = StyleId::pack(StyleId::PACKAGE_APP, 0x14, 0x0302);

/// High-contrast variant for accessibility modes.
pub const THEME_HIGH_CONTRAST: StyleId = StyleId::pack(StyleId::PACKAGE_APP, 0x14, 0x0303);

/// Name of the adaptive baseline style.
pub const DAY_NIGHT: &str = "theme.day-night";

/// Name of the always-light style.
pub const LIGHT: &str = "theme.light";

/// Name of the always-dark style.
pub const DARK: &str = "theme.dark";

/// Name of the high-contrast style.
pub const HIGH_CONTRAST: &str = "theme.high-contrast";

/// The built-in name/id pairs seeded into every style table.
pub fn design_styles() -> [(&'static str, StyleId); 4] {
    [
        (DAY_NIGHT, THEME_DAY_NIGHT),
        (LIGHT, THEME_LIGHT),
        (DARK, THEME_DARK),
        (HIGH_CONTRAST, THEME_HIGH_CONTRAST),
    ]
}
