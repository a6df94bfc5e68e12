//! Continuous-tone input buffer.
//!
//! [`PixelBuffer`] holds the image the quantizer reads from: one real-valued
//! RGB triple per pixel in row-major order. It is never mutated by
//! quantization; each pass works on its own copy.

use crate::api::QuantizeError;

/// A width x height grid of real-valued RGB pixels, row-major.
///
/// Channel values are nominally in `[0, 255]` but are stored as given.
///
/// # Example
///
/// ```
/// use eink_quant::PixelBuffer;
///
/// let bytes = [255, 0, 0, 0, 0, 255];
/// let buffer = PixelBuffer::from_rgb8(&bytes, 2, 1).unwrap();
///
/// assert_eq!(buffer.get(1, 0), [0.0, 0.0, 255.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<[f64; 3]>,
}

impl PixelBuffer {
    /// Wrap real-valued pixels.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::BufferSizeMismatch`] if `pixels.len()` is not
    /// `width * height`. Counts are in pixels.
    pub fn new(pixels: Vec<[f64; 3]>, width: usize, height: usize) -> Result<Self, QuantizeError> {
        let expected = expected_len(&[width, height], pixels.len())?;
        if pixels.len() != expected {
            return Err(QuantizeError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::BufferSizeMismatch`] if `bytes.len()` is not
    /// `width * height * 3`. Counts are in bytes.
    pub fn from_rgb8(bytes: &[u8], width: usize, height: usize) -> Result<Self, QuantizeError> {
        let expected = expected_len(&[width, height, 3], bytes.len())?;
        if bytes.len() != expected {
            return Err(QuantizeError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| [px[0] as f64, px[1] as f64, px[2] as f64])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
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

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[[f64; 3]] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [f64; 3] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x]
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Product of `dims`, or a size mismatch when it does not fit in `usize`.
///
/// No buffer can hold that many elements, so overflow is reported with
/// `expected: usize::MAX`.
fn expected_len(dims: &[usize], actual: usize) -> Result<usize, QuantizeError> {
    dims.iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or(QuantizeError::BufferSizeMismatch {
            expected: usize::MAX,
            actual,
        })
}
