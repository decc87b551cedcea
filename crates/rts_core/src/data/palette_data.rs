//! Faction color palettes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color.
///
/// Serialized as a tuple: `(30, 144, 255)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Create a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Format as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Three-color palette used to tint a faction's units, buildings and UI.
///
/// # Example RON
///
/// ```ron
/// FactionPalette(
///     primary: (178, 34, 34),
///     secondary: (40, 40, 40),
///     accent: (255, 215, 0),
/// )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionPalette {
    /// Dominant team color.
    pub primary: Rgb,
    /// Trim color.
    pub secondary: Rgb,
    /// Highlight color (selection rings, minimap pings).
    pub accent: Rgb,
}

impl Default for FactionPalette {
    fn default() -> Self {
        Self {
            primary: Rgb::new(100, 100, 200),
            secondary: Rgb::new(255, 255, 255),
            accent: Rgb::new(255, 215, 0),
        }
    }
}
