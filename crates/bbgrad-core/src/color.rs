//! Color model: hex parsing, HSV/HSL conversion and interpolation.
//!
//! Hex text is the source of truth for every color in this crate. HSV and HSL
//! only exist as intermediates for picker-style input and rainbow generation,
//! so they are never stored.
//!
//! Accepted hex forms (case-insensitive, surrounding whitespace ignored):
//!
//! - `#ff6b35` or `ff6b35` (6 digits)
//! - `#f63` or `f63` (3 digits, each digit duplicated)
//!
//! # Example
//!
//! ```rust
//! use bbgrad_core::color::{normalize, Color};
//!
//! let c = normalize(" #f63 ").unwrap();
//! assert_eq!(c, Color::new(0xFF, 0x66, 0x33));
//! assert_eq!(c.to_hex(), "#FF6633");
//!
//! // Invalid input is absence, never a wrong color
//! assert_eq!(normalize("#12345"), None);
//! assert_eq!(normalize("zzz"), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─── Color type ─────────────────────────────────────────────────────────────

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical `#RRGGBB` form, uppercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as a tuple, the shape terminal helpers expect.
    pub const fn to_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Converts to HSV. See [`to_hsv`].
    pub fn to_hsv(&self) -> Hsv {
        to_hsv(*self)
    }

    /// Interpolates toward `other`. See [`lerp`].
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        lerp(*self, *other, t)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s).ok_or_else(|| ColorParseError::new(s))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Error returned when a string is not a 3- or 6-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{input}' (expected #RGB or #RRGGBB)")]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }
}

// ─── Hex parsing ────────────────────────────────────────────────────────────

/// Parses a hex color string.
///
/// Accepts an optional leading `#` followed by exactly 3 or 6 hex digits.
/// Anything else (wrong length, non-hex characters, empty input) yields
/// `None`.
pub fn normalize(text: &str) -> Option<Color> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    // Checked up front so that byte slicing below stays on ASCII boundaries
    // and `from_str_radix` never sees a sign character.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|n| n * 17);
            Some(Color::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(Color::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Formats a color as `#RRGGBB`.
pub fn to_hex(color: Color) -> String {
    color.to_hex()
}

// ─── HSV / HSL ──────────────────────────────────────────────────────────────

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Converts RGB to HSV.
pub fn to_hsv(color: Color) -> Hsv {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let mut h = if d == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / d) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / d) + 2.0)
    } else {
        60.0 * (((r - g) / d) + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    let s = if max == 0.0 { 0.0 } else { d / max };

    Hsv { h, s, v: max }
}

/// Converts HSV to RGB.
///
/// The hue wraps into `[0, 360)`; saturation and value are clamped to `[0, 1]`.
pub fn from_hsv(h: f64, s: f64, v: f64) -> Color {
    let h = h.rem_euclid(360.0);
    let s = clamp01(s);
    let v = clamp01(v);

    let c = v * s;
    let x = c * (1.0 - (((h / 60.0) % 2.0) - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = hue_sector(h / 60.0, c, x);
    Color::new(to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
}

/// Converts HSL to RGB, with saturation and lightness given in percent.
pub fn from_hsl(h: f64, s: f64, l: f64) -> Color {
    let h = h.rem_euclid(360.0);
    let s = clamp01(s / 100.0);
    let l = clamp01(l / 100.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hh = h / 60.0;
    let x = c * (1.0 - ((hh % 2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = hue_sector(hh, c, x);
    Color::new(to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
}

/// Picks the chroma/intermediate arrangement for a hue expressed in sixths.
fn hue_sector(sixths: f64, c: f64, x: f64) -> (f64, f64, f64) {
    if sixths < 1.0 {
        (c, x, 0.0)
    } else if sixths < 2.0 {
        (x, c, 0.0)
    } else if sixths < 3.0 {
        (0.0, c, x)
    } else if sixths < 4.0 {
        (0.0, x, c)
    } else if sixths < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    }
}

// ─── Interpolation ──────────────────────────────────────────────────────────

/// Linear interpolation between two colors, per channel.
///
/// `t` is clamped to `[0, 1]`; `t = 0` returns `from`, `t = 1` returns `to`.
pub fn lerp(from: Color, to: Color, t: f64) -> Color {
    let t = clamp01(t);
    let channel = |a: u8, b: u8| {
        let a = f64::from(a);
        let b = f64::from(b);
        round_channel(a + (b - a) * t)
    };
    Color::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}

/// Scalar interpolation, used for hue sweeps.
pub(crate) fn lerp_scalar(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Maps a unit-range component to a channel value.
fn to_channel(unit: f64) -> u8 {
    round_channel(unit * 255.0)
}

/// Clamps into `[0, 255]` first so rounding can never leave the range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}
