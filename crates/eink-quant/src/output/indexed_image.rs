//! IndexedImage struct with indexed and flattened output.
//!
//! The indexed form is canonical. True-color bytes and the fixed-size
//! palette table are derived on demand for encoders that need them.

use crate::palette::{Palette, MAX_PALETTE_SIZE};

/// The output of a quantization pass.
///
/// Stores one `u8` palette index per pixel in row-major order, along with
/// image dimensions and the palette used to produce it. Immutable once
/// built.
///
/// # Example
///
/// ```
/// use eink_quant::{IndexedImage, Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let image = IndexedImage::new(vec![0, 1, 1, 0], 2, 2, palette);
///
/// assert_eq!(image.indices(), &[0, 1, 1, 0]);
/// assert_eq!(image.to_rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    width: usize,
    height: usize,
    /// Owned so the result can outlive the quantizer that produced it.
    palette: Palette,
}

impl IndexedImage {
    /// Create an image from palette indices.
    ///
    /// Every index must be in `0..palette.len()`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height` and that all
    /// indices address a palette entry.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < palette.len()),
            "index out of palette range"
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Palette indices, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Consume the image, keeping only the indices.
    #[inline]
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Flatten to `[R, G, B, R, G, B, ...]` bytes by looking up each index.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }

    /// The palette as a full 256-entry flat table (768 bytes), padded with
    /// black.
    pub fn palette_table(&self) -> Vec<u8> {
        self.palette.to_flat_table(MAX_PALETTE_SIZE)
    }
}
