#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! eink-quant: fixed-palette quantization for e-paper panels
//!
//! This library maps a continuous-tone RGB image onto a small, fixed color
//! palette (the colors an e-paper panel can physically show) using
//! Floyd-Steinberg error diffusion with a tunable strength.
//!
//! # Quick Start
//!
//! The [`Quantizer`] builder is the primary entry point:
//!
//! ```
//! use eink_quant::{Palette, PixelBuffer, Quantizer};
//!
//! let quantizer = Quantizer::new(Palette::waveshare_6color()).strength(0.8);
//!
//! let rgb = vec![128u8; 4 * 4 * 3];
//! let buffer = PixelBuffer::from_rgb8(&rgb, 4, 4).unwrap();
//! let image = quantizer.quantize(&buffer).unwrap();
//!
//! assert_eq!(image.width(), 4);
//! assert!(image.indices().iter().all(|&i| (i as usize) < image.palette().len()));
//! ```
//!
//! # Strength
//!
//! The strength parameter runs from `0.0` to `1.0`:
//!
//! - `0.0`: hard nearest-color mapping, every pixel independent
//! - `1.0`: classic Floyd-Steinberg, the whole residual is diffused
//! - in between: the residual is scaled before it is diffused, trading
//!   grain for banding
//!
//! # Color Matching
//!
//! Nearest-color search uses squared Euclidean distance directly on 8-bit
//! RGB channel values. It is not perceptually uniform, but with the handful
//! of saturated primaries an e-paper panel offers the difference is small,
//! and the output is reproducible with any other RGB implementation. Ties
//! go to the lowest palette index.
//!
//! ## Pipeline Overview
//!
//! ```text
//! RGB8 input               (decoded, resized, tone-adjusted upstream)
//!     |
//!     v
//! PixelBuffer              (real-valued channels, read only)
//!     |
//!     v
//! working copy             (one per pass)
//!     |
//!     v
//! for each pixel, raster order:
//!     nearest_index()  ->  index (output)
//!     residual = pixel - palette[index]
//!     residual *= strength
//!     spread to right / lower neighbors, clamp each write to [0, 255]
//!     |
//!     v
//! IndexedImage             (indices + palette)
//! ```

pub mod api;
mod buffer;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;


pub use api::{QuantizeError, Quantizer};
pub use buffer::PixelBuffer;
pub use color::Rgb;
pub use dither::Diffusion;
pub use output::IndexedImage;
pub use palette::{Palette, PaletteError, ParseColorError, MAX_PALETTE_SIZE};
