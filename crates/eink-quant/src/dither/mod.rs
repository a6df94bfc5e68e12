//! Error diffusion quantization.
//!
//! The quantizer visits pixels in raster order (top to bottom, left to
//! right, no serpentine), replaces each with its nearest palette entry, and
//! spreads a strength-scaled share of the residual to the unvisited
//! neighbors using the Floyd-Steinberg weights.
//!
//! # Strength
//!
//! The strength value is resolved into a [`Diffusion`] mode once per pass:
//!
//! - `Off` maps every pixel independently (no error is computed at all)
//! - `Full` diffuses the whole residual and matches textbook Floyd-Steinberg
//! - `Scaled(s)` multiplies the residual by `s` first
//!
//! `Full` and `Scaled` run the same kernel loop with a factor of 1.0 or `s`.
//!
//! # Example
//!
//! ```
//! use eink_quant::{dither::quantize, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
//! let buffer = PixelBuffer::from_rgb8(&[128; 12], 2, 2).unwrap();
//!
//! let image = quantize(&buffer, &palette, 1.0).unwrap();
//! assert_eq!(image.indices(), &[1, 0, 0, 1]);
//! ```

mod kernel;
mod strength;
mod working;

pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use strength::Diffusion;

use crate::api::QuantizeError;
use crate::buffer::PixelBuffer;
use crate::output::IndexedImage;
use crate::palette::Palette;
use working::WorkingBuffer;

/// Quantize `buffer` to `palette` with the given dithering strength.
///
/// `strength` is clamped to `[0, 1]`; NaN is treated as 0. The input buffer
/// is not modified.
///
/// # Errors
///
/// [`QuantizeError::EmptyImage`] if the buffer has zero width or height.
pub fn quantize(
    buffer: &PixelBuffer,
    palette: &Palette,
    strength: f64,
) -> Result<IndexedImage, QuantizeError> {
    quantize_with(buffer, palette, Diffusion::from_strength(strength))
}

/// Quantize with an explicit [`Diffusion`] mode.
///
/// The mode is normalized with [`Diffusion::resolved`] first, so a
/// hand-built `Scaled` factor obeys the same clamping as `quantize`.
///
/// # Errors
///
/// [`QuantizeError::EmptyImage`] if the buffer has zero width or height.
pub fn quantize_with(
    buffer: &PixelBuffer,
    palette: &Palette,
    diffusion: Diffusion,
) -> Result<IndexedImage, QuantizeError> {
    if buffer.is_empty() {
        return Err(QuantizeError::EmptyImage {
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    let diffusion = diffusion.resolved();
    let indices = match diffusion {
        Diffusion::Off => map_nearest(buffer, palette),
        Diffusion::Full | Diffusion::Scaled(_) => {
            diffuse(buffer, palette, &FLOYD_STEINBERG, diffusion.factor())
        }
    };

    Ok(IndexedImage::new(
        indices,
        buffer.width(),
        buffer.height(),
        palette.clone(),
    ))
}

/// Independent per-pixel nearest-color mapping.
fn map_nearest(buffer: &PixelBuffer, palette: &Palette) -> Vec<u8> {
    buffer
        .pixels()
        .iter()
        .map(|&px| palette.nearest_index(px) as u8)
        .collect()
}

/// Raster-order error diffusion with `kernel`, residual scaled by `factor`.
///
/// Palette size is capped at 256 so the index always fits in a `u8`.
fn diffuse(buffer: &PixelBuffer, palette: &Palette, kernel: &Kernel, factor: f64) -> Vec<u8> {
    let width = buffer.width();
    let height = buffer.height();
    let mut work = WorkingBuffer::new(buffer);
    let mut indices = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let old = work.get(x, y);
            let idx = palette.nearest_index(old);
            indices.push(idx as u8);

            let new = palette.channels(idx);
            let error = [
                (old[0] - new[0]) * factor,
                (old[1] - new[1]) * factor,
                (old[2] - new[2]) * factor,
            ];

            for (dx, dy, weight) in kernel.factors() {
                work.add_error(x as isize + dx as isize, y as isize + dy as isize, error, weight);
            }
        }
    }

    indices
}
