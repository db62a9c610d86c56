//! Hex color parsing and conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing colors or indexing the swatch tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0:?} (expected 6 hex digits, optional leading '#')")]
    InvalidFormat(String),
    #[error("{what} index {index} out of range (0..{len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
    #[error("Swatch table has {table} entries, expected {wheel} palettes x {palette_size}")]
    TableShape {
        table: usize,
        wheel: usize,
        palette_size: usize,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// An RGB color with each component in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Components quantised to 8 bits.
    pub fn to_rgb8(self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }
}

fn to_byte(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Strip an optional `#` and check that exactly six hex digits remain.
fn hex_digits(hex: &str) -> ColorResult<&str> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(digits)
    } else {
        Err(ColorError::InvalidFormat(hex.to_string()))
    }
}

fn parse_rgb8(hex: &str) -> ColorResult<[u8; 3]> {
    let digits = hex_digits(hex)?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidFormat(hex.to_string()))
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Parse `#RRGGBB` (or `RRGGBB`) into fractional RGB.
pub fn hex_to_fraction(hex: &str) -> ColorResult<Rgb> {
    let [r, g, b] = parse_rgb8(hex)?;
    Ok(Rgb::new(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
    ))
}

/// Format fractional RGB as an upper-case `#RRGGBB` string.
pub fn fraction_to_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb.to_rgb8();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Outline color used to highlight a hovered swatch.
///
/// Pale swatches (every component at least 0.8) get a black outline so the
/// highlight stays visible; everything else gets white.
pub fn highlight_for(rgb: Rgb) -> Rgb {
    if rgb.r >= 0.8 && rgb.g >= 0.8 && rgb.b >= 0.8 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// A validated `#RRGGBB` color, normalised to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// The normalised `#RRGGBB` text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_rgb(&self) -> Rgb {
        // Validated on construction.
        hex_to_fraction(&self.0).unwrap_or(Rgb::BLACK)
    }

    pub fn to_rgb8(&self) -> [u8; 3] {
        parse_rgb8(&self.0).unwrap_or([0, 0, 0])
    }
}

impl HexColor {
    /// Wrap text already known to be `#RRGGBB` upper case.
    pub(crate) fn from_normalized(hex: &'static str) -> Self {
        debug_assert!(hex.parse::<HexColor>().is_ok_and(|c| c.as_str() == hex));
        Self(hex.to_string())
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = hex_digits(s)?;
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl From<[u8; 3]> for HexColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(fraction_to_hex(rgb))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_fraction() {
        let rgb = hex_to_fraction("#FF8000").unwrap();
        assert!((rgb.r - 1.0).abs() < 1e-9);
        assert!((rgb.g - 128.0 / 255.0).abs() < 1e-9);
        assert!(rgb.b.abs() < 1e-9);
    }

    #[test]
    fn test_hex_without_hash() {
        assert_eq!(hex_to_fraction("a0ffa0").unwrap(), hex_to_fraction("#A0FFA0").unwrap());
    }

    #[test]
    fn test_invalid_formats() {
        for bad in ["", "#", "#12345", "#1234567", "#GG0000", "##A0FFA0", "A0FF A0", "#é0FFA"] {
            assert!(
                matches!(hex_to_fraction(bad), Err(ColorError::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_round_trip_is_case_insensitive() {
        for hex in ["#000000", "#ffffff", "#A0FFA0", "#ff8080", "#1a2B3c", "#7F7F80"] {
            let back = fraction_to_hex(hex_to_fraction(hex).unwrap());
            assert_eq!(back, hex.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_fraction_to_hex_clamps() {
        assert_eq!(fraction_to_hex(Rgb::new(1.5, -0.2, 0.5)), "#FF0080");
    }

    #[test]
    fn test_highlight_rule() {
        assert_eq!(highlight_for(Rgb::new(0.8, 0.9, 1.0)), Rgb::BLACK);
        assert_eq!(highlight_for(Rgb::new(0.79, 0.9, 1.0)), Rgb::WHITE);
        assert_eq!(highlight_for(Rgb::BLACK), Rgb::WHITE);
    }

    #[test]
    fn test_hex_color_normalises() {
        let color: HexColor = "a0ffa0".parse().unwrap();
        assert_eq!(color.as_str(), "#A0FFA0");
        assert_eq!(color.to_string(), "#A0FFA0");
        assert_eq!(color.to_rgb8(), [0xA0, 0xFF, 0xA0]);
    }

    #[test]
    fn test_hex_color_from_bytes() {
        assert_eq!(HexColor::from([0xA0, 0xFF, 0x0A]).as_str(), "#A0FF0A");
    }

    #[test]
    fn test_hex_color_serde() {
        let color: HexColor = "#ff8080".parse().unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#FF8080\"");

        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<HexColor>("\"#nothex\"").is_err());
    }
}
