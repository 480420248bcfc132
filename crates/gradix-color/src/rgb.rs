// SPDX-License-Identifier: MIT
//
// 24-bit sRGB color — the representation users type (hex, names) and
// terminals display (truecolor SGR). Gradient math happens in HSV; this
// type converts to and from it.

use std::fmt;

use gradix_gradient::interpolate::lerp;

use crate::hsv::Hsv;

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::from_u32(0xff_ff_ff);
    pub const BLACK: Self = Self::from_u32(0x00_00_00);

    /// Create a color from individual channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Parse a hex color string: `#RGB` or `#RRGGBB`, with or without
    /// the leading `#`.
    ///
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        match s.len() {
            3 => {
                let r = parse_hex_digit(s.as_bytes()[0])?;
                let g = parse_hex_digit(s.as_bytes()[1])?;
                let b = parse_hex_digit(s.as_bytes()[2])?;
                Some(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&s.as_bytes()[0..2])?;
                let g = parse_hex_byte(&s.as_bytes()[2..4])?;
                let b = parse_hex_byte(&s.as_bytes()[4..6])?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Convert to HSV (hue in degrees, saturation and value in `[0, 1]`).
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            // Achromatic — hue is undefined, default to 0
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv::new(h, s, max)
    }

    /// Convert from HSV.
    #[must_use]
    pub fn from_hsv(hsv: Hsv) -> Self {
        let h = hsv.h.rem_euclid(360.0);
        let c = hsv.v * hsv.s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = hsv.v - c;

        #[allow(clippy::cast_sign_loss)]
        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(to_u8(r + m), to_u8(g + m), to_u8(b + m))
    }

    /// Channel-wise linear interpolation between two colors.
    ///
    /// Returns `start` unchanged when the endpoints are equal, like every
    /// gradix interpolator.
    #[must_use]
    pub fn lerp(t: f64, start: &Self, end: &Self) -> Self {
        if start == end {
            return *start;
        }
        let channel = |a: u8, b: u8| to_u8(lerp(f64::from(a), f64::from(b), t) as f32 / 255.0);
        Self::new(
            channel(start.r, end.r),
            channel(start.g, end.g),
            channel(start.b, end.b),
        )
    }
}

impl fmt::Display for Rgb {
    /// Formats as a lowercase `#rrggbb` hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
