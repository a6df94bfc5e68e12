//! Mutable copy of the input that absorbs diffused error.

use crate::buffer::PixelBuffer;

/// Per-pass working buffer.
///
/// Created from a [`PixelBuffer`] at the start of a pass and dropped at the
/// end. Diffused error is merged into the pixel values in place; every write
/// is clamped to `[0, 255]` so error never accumulates past the displayable
/// range.
pub(crate) struct WorkingBuffer {
    width: usize,
    height: usize,
    pixels: Vec<[f64; 3]>,
}

impl WorkingBuffer {
    /// Copy the source pixels.
    pub(crate) fn new(source: &PixelBuffer) -> Self {
        Self {
            width: source.width(),
            height: source.height(),
            pixels: source.pixels().to_vec(),
        }
    }

    /// Current value of pixel `(x, y)`, including diffused error.
    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> [f64; 3] {
        self.pixels[y * self.width + x]
    }

    /// Add `error * factor` to the pixel at `(x, y)`, clamping each channel.
    ///
    /// Coordinates outside the buffer are silently ignored (edge pixels
    /// simply lose that share of the error).
    #[inline]
    pub(crate) fn add_error(&mut self, x: isize, y: isize, error: [f64; 3], factor: f64) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let px = &mut self.pixels[y * self.width + x];
        for c in 0..3 {
            px[c] = (px[c] + error[c] * factor).clamp(0.0, 255.0);
        }
    }
}
