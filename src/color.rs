//! Hex color parsing plus the shade and alpha derivations used by the theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a color string is not a `#rrggbb` literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The leading `#` is missing.
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    /// Anything other than six digits after the `#`.
    #[error("color `{0}` must have exactly 6 hex digits")]
    BadLength(String),
    /// A digit outside `0-9a-fA-F`.
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

/// An opaque 24-bit color written as `#rrggbb`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` literal (either case).
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(input.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorError::BadLength(input.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::BadDigit(input.to_string()))?;
        // from_str_radix accepts a leading '+', which is not a hex digit.
        if digits.starts_with('+') {
            return Err(ColorError::BadDigit(input.to_string()));
        }
        Ok(Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A translucent color rendered as `rgba(r, g, b, alpha)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

/// Lighten (positive `percent`) or darken (negative) every channel by
/// `round(2.55 * percent)`, clamping to `[0, 255]`.
///
/// Halves round toward positive infinity, so `-25.5` becomes `-25`.
pub fn shade(color: HexColor, percent: i32) -> HexColor {
    let amount = (2.55 * f64::from(percent) + 0.5).floor() as i32;
    let adjust = |channel: u8| (i32::from(channel) + amount).clamp(0, 255) as u8;
    HexColor::new(adjust(color.r), adjust(color.g), adjust(color.b))
}

/// Same channels as `color` with the given alpha.
pub fn to_rgba(color: HexColor, alpha: f32) -> Rgba {
    Rgba::new(color.r, color.g, color.b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_lowercase() {
        let color = HexColor::parse("#10B981").unwrap();
        assert_eq!(color, HexColor::new(16, 185, 129));
        assert_eq!(color.to_string(), "#10b981");
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(
            HexColor::parse("10b981"),
            Err(ColorError::MissingHash("10b981".into()))
        );
        assert_eq!(
            HexColor::parse("#fff"),
            Err(ColorError::BadLength("#fff".into()))
        );
        assert_eq!(
            HexColor::parse("#zzzzzz"),
            Err(ColorError::BadDigit("#zzzzzz".into()))
        );
        assert_eq!(
            HexColor::parse("#+12345"),
            Err(ColorError::BadDigit("#+12345".into()))
        );
    }

    #[test]
    fn shade_darkens_by_fifty_one_and_clamps() {
        let accent = HexColor::parse("#10b981").unwrap();
        let darker = shade(accent, -20);
        assert_eq!(darker, HexColor::new(0, 134, 78));
        assert_eq!(darker.to_string(), "#00864e");
    }

    #[test]
    fn shade_clamps_at_white() {
        assert_eq!(shade(HexColor::new(250, 10, 200), 20), HexColor::new(255, 61, 251));
    }

    #[test]
    fn shade_rounds_halves_upward() {
        // 2.55 * -10 = -25.5, which rounds to -25.
        assert_eq!(shade(HexColor::new(100, 100, 100), -10), HexColor::new(75, 75, 75));
    }

    #[test]
    fn rgba_formatting() {
        let accent = HexColor::parse("#10b981").unwrap();
        assert_eq!(to_rgba(accent, 0.3).to_string(), "rgba(16, 185, 129, 0.3)");
        assert_eq!(to_rgba(HexColor::WHITE, 0.2).to_string(), "rgba(255, 255, 255, 0.2)");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&HexColor::new(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: HexColor = serde_json::from_str("\"#f59e0b\"").unwrap();
        assert_eq!(back, HexColor::new(0xf5, 0x9e, 0x0b));
        assert!(serde_json::from_str::<HexColor>("\"orange\"").is_err());
    }
}
