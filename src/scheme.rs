//! Per-slide color schemes and the built-in slide set.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Background, accent and text colors tied to one slide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Page and wrapper background.
    pub background: HexColor,
    /// Button gradients, shadows and the quote border.
    pub accent: HexColor,
    /// Body and navigation text.
    pub text: HexColor,
}

impl ColorScheme {
    pub const fn new(background: HexColor, accent: HexColor, text: HexColor) -> Self {
        Self {
            background,
            accent,
            text,
        }
    }
}

/// Image file names of the built-in slides, in display order.
pub const DEFAULT_SLIDES: [&str; 5] = [
    "El Capitan.jpg",
    "Mavericks.jpg",
    "Tsunagu.jpg",
    "Ventura.jpg",
    "Yosemite.jpg",
];

/// Schemes matching [`DEFAULT_SLIDES`] index for index.
pub const DEFAULT_SCHEMES: [ColorScheme; 5] = [
    // Mountain rock: cool grays.
    ColorScheme::new(
        HexColor::new(0xd1, 0xd5, 0xdb),
        HexColor::new(0x6b, 0x72, 0x80),
        HexColor::new(0x1f, 0x29, 0x37),
    ),
    // Surf: blues and teals.
    ColorScheme::new(
        HexColor::new(0xe0, 0xf2, 0xfe),
        HexColor::new(0x0e, 0xa5, 0xe9),
        HexColor::new(0x0c, 0x4a, 0x6e),
    ),
    // Purples and pinks.
    ColorScheme::new(
        HexColor::new(0xf3, 0xe8, 0xff),
        HexColor::new(0xa8, 0x55, 0xf7),
        HexColor::new(0x58, 0x1c, 0x87),
    ),
    // Greens and cyans.
    ColorScheme::new(
        HexColor::new(0xd1, 0xfa, 0xe5),
        HexColor::new(0x10, 0xb9, 0x81),
        HexColor::new(0x06, 0x4e, 0x3b),
    ),
    // Earth tones.
    ColorScheme::new(
        HexColor::new(0xfe, 0xf3, 0xc7),
        HexColor::new(0xf5, 0x9e, 0x0b),
        HexColor::new(0x78, 0x35, 0x0f),
    ),
];

/// Scheme for the `index`-th slide of an arbitrary folder, cycling through
/// the built-in set.
pub fn cycled_scheme(index: usize) -> ColorScheme {
    DEFAULT_SCHEMES[index % DEFAULT_SCHEMES.len()]
}
