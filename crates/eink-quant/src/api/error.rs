//! Unified error type for the eink-quant public API.
//!
//! [`QuantizeError`] covers everything that can go wrong between building a
//! palette and producing an [`IndexedImage`](crate::IndexedImage).

use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the eink-quant public API.
///
/// # Example
///
/// ```
/// use eink_quant::{Palette, QuantizeError};
///
/// fn create_palette() -> Result<Palette, QuantizeError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// # create_palette().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum QuantizeError {
    /// Palette is empty, too large, or holds an unparsable color
    InvalidPalette(PaletteError),
    /// Image has zero width or zero height
    EmptyImage {
        /// Width of the rejected buffer
        width: usize,
        /// Height of the rejected buffer
        height: usize,
    },
    /// Pixel data does not match the declared dimensions
    BufferSizeMismatch {
        /// Length implied by width and height
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::InvalidPalette(err) => write!(f, "invalid palette: {}", err),
            QuantizeError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            QuantizeError::BufferSizeMismatch { expected, actual } => write!(
                f,
                "pixel buffer has {} elements, expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::InvalidPalette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for QuantizeError {
    fn from(err: PaletteError) -> Self {
        QuantizeError::InvalidPalette(err)
    }
}

impl From<ParseColorError> for QuantizeError {
    fn from(err: ParseColorError) -> Self {
        QuantizeError::InvalidPalette(PaletteError::ParseColor(err))
    }
}
