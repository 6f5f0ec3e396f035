//! Packed color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// sRGB color as the rendering engine reads it. Opaque colors are packed into
/// a single `0xRRGGBB` number; translucent colors keep all four channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Color {
    /// Opaque color packed as `0xRRGGBB`.
    Rgb(u32),
    /// Color with an alpha channel, as `[r, g, b, a]` (0-255 each).
    Rgba([u8; 4]),
}

impl Color {
    /// Black (#000000)
    pub const BLACK: Self = Self::Rgb(0x00_0000);

    /// White (#ffffff)
    pub const WHITE: Self = Self::Rgb(0xff_ffff);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::Rgba([0, 0, 0, 0]);

    /// Build a color from channels, packing it when fully opaque.
    #[must_use]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        if a == 255 {
            Self::Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
        } else {
            Self::Rgba([r, g, b, a])
        }
    }

    /// The `[r, g, b, a]` channels of this color.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn channels(&self) -> [u8; 4] {
        match *self {
            Self::Rgb(packed) => [
                (packed >> 16) as u8,
                (packed >> 8) as u8,
                packed as u8,
                255,
            ],
            Self::Rgba(channels) => channels,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
