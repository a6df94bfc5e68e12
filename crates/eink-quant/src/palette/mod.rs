//! Palette types and utilities
//!
//! This module provides the fixed color table used for nearest-color
//! lookup, together with error types for parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, MAX_PALETTE_SIZE};
