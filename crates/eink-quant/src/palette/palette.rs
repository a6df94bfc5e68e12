//! Palette struct with nearest-color matching.
//!
//! This module provides the core `Palette` type: an ordered, fixed color
//! table that answers nearest-color queries during quantization and doubles
//! as the palette metadata of the indexed output.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{distance_squared, Rgb};

/// Largest palette an indexed image can address with `u8` indices.
pub const MAX_PALETTE_SIZE: usize = 256;

/// An ordered color palette with nearest-color matching.
///
/// Entries keep the order they were given in; index `i` always refers to
/// the `i`-th color passed to [`Palette::new`]. Duplicates are accepted
/// (they only waste a slot: the later copy can never win a lookup).
///
/// # Precomputation
///
/// Channel values are converted to reals once at construction, so the
/// per-pixel search in [`nearest_index`](Palette::nearest_index) does no
/// conversions.
///
/// # Example
///
/// ```
/// use eink_quant::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest_index([30.0, 30.0, 30.0]), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    // Same entries as reals, for distance math
    channels: Vec<[f64; 3]>,
}

impl Palette {
    /// Build a palette from colors in the given order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::Empty`] if `colors` is empty
    /// - [`PaletteError::TooLarge`] if `colors` has more than
    ///   [`MAX_PALETTE_SIZE`] entries
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > MAX_PALETTE_SIZE {
            return Err(PaletteError::TooLarge { len: colors.len() });
        }

        Ok(Self {
            colors: colors.to_vec(),
            channels: colors.iter().map(|c| c.to_channels()).collect(),
        })
    }

    /// Create a palette from hex color strings such as `"#FF0000"` or `"F00"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or the validation errors of [`Palette::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use eink_quant::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#F00"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Rgb::from_str(s.as_ref()).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// The six colors of the Waveshare 7.3" (E) panel, in driver order:
    /// black, white, green, blue, red, yellow.
    pub fn waveshare_6color() -> Self {
        Self::new(&[
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 0, 0),
            Rgb::new(255, 255, 0),
        ])
        .unwrap_or_else(|_| unreachable!("six colors are within bounds"))
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Always `false`: empty palettes are rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All entries in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Real-valued channels of the entry at `idx`.
    #[inline]
    pub(crate) fn channels(&self, idx: usize) -> [f64; 3] {
        self.channels[idx]
    }

    /// Find the palette entry closest to `color` in RGB space.
    ///
    /// Distance is the squared Euclidean distance over the three channels.
    /// When several entries are equally close, the lowest index wins: the
    /// scan runs in palette order and only a strictly smaller distance
    /// replaces the current best. Quantized output depends on this rule for
    /// palettes with duplicate or equidistant colors.
    ///
    /// # Example
    ///
    /// ```
    /// use eink_quant::{Palette, Rgb};
    ///
    /// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(254, 254, 254)]).unwrap();
    /// // 127 is exactly halfway: the first entry wins
    /// assert_eq!(palette.nearest_index([127.0, 127.0, 127.0]), 0);
    /// ```
    #[inline]
    pub fn nearest_index(&self, color: [f64; 3]) -> usize {
        // Linear scan - optimal for small palettes (2-16 colors typical)
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;

        for (i, p) in self.channels.iter().enumerate() {
            let dist = distance_squared(color, *p);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        best_idx
    }

    /// Flatten the palette into a fixed-size table of `size` RGB triples.
    ///
    /// The first `len()` slots hold the palette in order and the remaining
    /// slots are black, giving `3 * size` bytes. Formats with a fixed
    /// 256-entry palette (indexed PNG as written by most tools) use
    /// `to_flat_table(256)`. Entries past `size` are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use eink_quant::{Palette, Rgb};
    ///
    /// let palette = Palette::new(&[Rgb::new(255, 0, 0)]).unwrap();
    /// let table = palette.to_flat_table(256);
    ///
    /// assert_eq!(table.len(), 768);
    /// assert_eq!(&table[..6], &[255, 0, 0, 0, 0, 0]);
    /// ```
    pub fn to_flat_table(&self, size: usize) -> Vec<u8> {
        let mut table = Vec::with_capacity(size * 3);
        for slot in 0..size {
            let color = self.colors.get(slot).copied().unwrap_or(Rgb::BLACK);
            table.extend_from_slice(&color.to_bytes());
        }
        table
    }
}
