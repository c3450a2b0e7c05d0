//! # Colors
//!
//! Every color attribute of a [ThemeRecord](crate::theme::ThemeRecord) is a
//! [Color]: a packed 32-bit ARGB value.
//!
//! Colors are written the way the box model frontend writes them:
//!
//! - `#RRGGBB` for opaque colors (alpha is `0xFF`)
//! - `#AARRGGBB` for translucent colors (alpha first, like Qt)
//!
//! ```rust
//! use boxmodel_theme::color::Color;
//!
//! let shadow: Color = "#40000000".parse().unwrap();
//! assert_eq!(shadow.alpha(), 0x40);
//! assert_eq!(shadow.to_string(), "#40000000");
//!
//! let white = Color::from_rgb(0xFFFFFF);
//! assert_eq!(white, "#ffffff".parse::<Color>().unwrap());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// A 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::from_rgb(0x000000);
    /// Opaque white.
    pub const WHITE: Color = Color::from_rgb(0xFFFFFF);

    /// Create an opaque color from a `0xRRGGBB` value.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    /// Create a color from a `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Alpha component.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red component.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Whether the color is fully opaque.
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Parse a `#RRGGBB` or `#AARRGGBB` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ThemeError::invalid_color(hex, "missing leading '#'"))?;

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ThemeError::invalid_color(hex, "not a hex number"));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| ThemeError::invalid_color(hex, e.to_string()))?;

        match digits.len() {
            6 => Ok(Self::from_rgb(value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(ThemeError::invalid_color(
                hex,
                "hex color must have 6 or 8 digits",
            )),
        }
    }

    /// Format as lowercase `#rrggbb` or `#aarrggbb`.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:06x}", self.0 & 0x00FF_FFFF)
        } else {
            format!("#{:08x}", self.0)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

/// Compares against a hex string, so `color == "#2F343F"` reads naturally in
/// lookups. Strings that do not parse never compare equal.
impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        other.parse::<Color>().map_or(false, |c| c == *self)
    }
}
