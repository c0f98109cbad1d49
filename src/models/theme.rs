//! Drawer themes and their fixed color palettes.

use serde::{Deserialize, Serialize};

use super::Color;

/// Visual theme of the drawer.
///
/// Persisted as an ordinal under the `darkVariant` settings key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerTheme {
    /// Light theme (ordinal 0)
    #[default]
    Nexus,
    /// Blue-grey dark theme (ordinal 1)
    Pixel,
    /// Charcoal dark theme (ordinal 2)
    Oreo,
}

/// The three colors a theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    /// Drawer background
    pub background: Color,
    /// Active toggles, sliders and selection
    pub highlight: Color,
    /// Labels and glyphs
    pub text: Color,
}

const NEXUS_PALETTE: ThemePalette = ThemePalette {
    background: Color::rgb(0xFF, 0xFF, 0xFF),
    highlight: Color::rgb(0x42, 0x85, 0xF4),
    text: Color::rgb(0x21, 0x21, 0x21),
};

const PIXEL_PALETTE: ThemePalette = ThemePalette {
    background: Color::rgb(0x26, 0x32, 0x38),
    highlight: Color::rgb(0x80, 0xCB, 0xC4),
    text: Color::rgb(0xFF, 0xFF, 0xFF),
};

const OREO_PALETTE: ThemePalette = ThemePalette {
    background: Color::rgb(0x20, 0x21, 0x24),
    highlight: Color::rgb(0x8A, 0xB4, 0xF8),
    text: Color::rgb(0xE8, 0xEA, 0xED),
};

impl DrawerTheme {
    /// Every theme, in ordinal order.
    pub const ALL: [Self; 3] = [Self::Nexus, Self::Pixel, Self::Oreo];

    /// Maps a stored ordinal to a theme. Out-of-range values yield `None`.
    #[must_use]
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Nexus),
            1 => Some(Self::Pixel),
            2 => Some(Self::Oreo),
            _ => None,
        }
    }

    /// The ordinal persisted under `darkVariant`.
    #[must_use]
    pub const fn ordinal(self) -> i64 {
        match self {
            Self::Nexus => 0,
            Self::Pixel => 1,
            Self::Oreo => 2,
        }
    }

    /// Two of the three themes are dark variants.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        !matches!(self, Self::Nexus)
    }

    /// Fixed color table for this theme.
    #[must_use]
    pub const fn palette(self) -> ThemePalette {
        match self {
            Self::Nexus => NEXUS_PALETTE,
            Self::Pixel => PIXEL_PALETTE,
            Self::Oreo => OREO_PALETTE,
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nexus => "nexus",
            Self::Pixel => "pixel",
            Self::Oreo => "oreo",
        }
    }
}
