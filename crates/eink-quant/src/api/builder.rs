//! Quantizer builder -- the primary ergonomic entry point for the crate.

use crate::buffer::PixelBuffer;
use crate::dither::{quantize_with, Diffusion};
use crate::output::IndexedImage;
use crate::palette::Palette;

use super::QuantizeError;

/// Fixed-palette quantizer with tunable Floyd-Steinberg diffusion.
///
/// # Design
///
/// - Constructor requires a [`Palette`], so an invalid palette can never
///   reach the quantization loop
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self`, so one quantizer can be
///   reused across many images; it keeps no per-image state
///
/// # Example
///
/// ```
/// use eink_quant::{Palette, PixelBuffer, Quantizer};
///
/// let quantizer = Quantizer::new(Palette::waveshare_6color()).strength(0.5);
///
/// let buffer = PixelBuffer::from_rgb8(&[200, 40, 40, 20, 20, 20], 2, 1).unwrap();
/// let image = quantizer.quantize(&buffer).unwrap();
///
/// assert_eq!(image.indices(), &[4, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    palette: Palette,
    diffusion: Diffusion,
}

impl Quantizer {
    /// Create a quantizer with full Floyd-Steinberg diffusion.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            diffusion: Diffusion::Full,
        }
    }

    /// Set dithering strength.
    ///
    /// `0.0` disables diffusion, `1.0` is classic Floyd-Steinberg. Values
    /// outside `[0, 1]` are clamped and NaN is treated as `0.0`.
    #[inline]
    pub fn strength(mut self, strength: f64) -> Self {
        self.diffusion = Diffusion::from_strength(strength);
        self
    }

    /// The resolved diffusion mode.
    #[inline]
    pub fn diffusion(&self) -> Diffusion {
        self.diffusion
    }

    /// The palette every output index refers to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Quantize a buffer into an [`IndexedImage`].
    ///
    /// The buffer is read only; diffusion runs on a private copy.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::EmptyImage`] if the buffer has zero width or height.
    pub fn quantize(&self, buffer: &PixelBuffer) -> Result<IndexedImage, QuantizeError> {
        quantize_with(buffer, &self.palette, self.diffusion)
    }

    /// Quantize packed RGB8 bytes.
    ///
    /// Convenience over [`PixelBuffer::from_rgb8`] followed by
    /// [`quantize`](Self::quantize).
    ///
    /// # Errors
    ///
    /// [`QuantizeError::BufferSizeMismatch`] or
    /// [`QuantizeError::EmptyImage`].
    pub fn quantize_rgb8(
        &self,
        bytes: &[u8],
        width: usize,
        height: usize,
    ) -> Result<IndexedImage, QuantizeError> {
        let buffer = PixelBuffer::from_rgb8(bytes, width, height)?;
        self.quantize(&buffer)
    }
}
