//! RGBA color handling with hex parsing and serialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color value with hex string representation.
///
/// Channels are 0-255. Alpha 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255)
    pub a: u8,
}

impl Color {
    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a color from a hex string.
    ///
    /// Supports "#RRGGBB" and "#RRGGBBAA", with or without the leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nougat::models::Color;
    ///
    /// let color = Color::from_hex("#263238").unwrap();
    /// assert_eq!(color, Color::rgb(0x26, 0x32, 0x38));
    ///
    /// let color = Color::from_hex("FFFFFF80").unwrap();
    /// assert_eq!(color.a, 0x80);
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 && hex.len() != 8 {
            anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 6 or 8 hex digits (RRGGBB or RRGGBBAA)"
            );
        }

        let channel = |range: std::ops::Range<usize>, name: &str| -> Result<u8> {
            let digits = hex
                .get(range)
                .with_context(|| format!("Invalid {name} channel in hex color '{hex}'"))?;
            u8::from_str_radix(digits, 16)
                .with_context(|| format!("Invalid {name} channel in hex color '{hex}'"))
        };

        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            255
        };

        Ok(Self::rgba(r, g, b, a))
    }

    /// Formats the color as "#RRGGBB", or "#RRGGBBAA" when not fully opaque.
    #[must_use]
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Returns true when the color is perceptually dark.
    ///
    /// Uses the Rec. 601 luma weights.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        let luma = 0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b);
        luma < 128.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_hash() {
        let color = Color::from_hex("#FF0000").unwrap();
        assert_eq!(color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hex_without_hash() {
        let color = Color::from_hex("00ff00").unwrap();
        assert_eq!(color, Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_from_hex_with_alpha() {
        let color = Color::from_hex("#00000080").unwrap();
        assert_eq!(color, Color::rgba(0, 0, 0, 0x80));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("").is_err());
        // Multi-byte characters must not panic on slicing
        assert!(Color::from_hex("ééé").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(Color::rgba(0, 128, 255, 16).to_hex(), "#0080FF10");
    }

    #[test]
    fn test_display_uses_hex() {
        assert_eq!(Color::rgb(0x26, 0x32, 0x38).to_string(), "#263238");
    }

    #[test]
    fn test_is_dark() {
        assert!(Color::rgb(0, 0, 0).is_dark());
        assert!(Color::rgb(0x26, 0x32, 0x38).is_dark());
        assert!(!Color::rgb(255, 255, 255).is_dark());
    }
}
