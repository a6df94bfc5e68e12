//! 8-bit RGB color type
//!
//! The panel palette and the flattened output are expressed in plain 8-bit
//! RGB. Distances are measured directly on these channel values.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Black, also used as the padding entry of fixed-size palette tables.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channel values as reals, the representation used while diffusing.
    #[inline]
    pub fn to_channels(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }
}

/// Squared Euclidean distance between two real-valued colors.
///
/// `(a.r - b.r)² + (a.g - b.g)² + (a.b - b.b)²`
#[inline]
pub(crate) fn distance_squared(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    /// Formats as `#RRGGBB` (uppercase), the same form [`FromStr`] accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - 6-digit hex with or without hash
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (expands to RRGGBB)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use eink_quant::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    ///
    /// let yellow: Rgb = "ff0".parse().unwrap();
    /// assert_eq!(yellow, Rgb::new(255, 255, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            // Reject before slicing: non-ASCII input has no byte-aligned digits
            return match s.len() {
                3 | 6 if s.is_ascii() => Err(u8::from_str_radix(s, 16)
                    .err()
                    .map(ParseColorError::InvalidHex)
                    .unwrap_or(ParseColorError::InvalidLength)),
                _ => Err(ParseColorError::InvalidLength),
            };
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
