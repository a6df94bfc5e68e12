//! Color types
//!
//! Palette entries are plain 8-bit RGB triples ([`Rgb`]). Pixels in flight
//! through the quantizer carry real-valued channels so that sub-integer
//! diffusion error survives until the pixel is visited.
//!
//! # Example
//!
//! ```
//! use eink_quant::Rgb;
//!
//! let red: Rgb = "#F00".parse().unwrap();
//! assert_eq!(red, Rgb::new(255, 0, 0));
//! assert_eq!(red.to_channels(), [255.0, 0.0, 0.0]);
//! ```

mod rgb;

pub(crate) use rgb::distance_squared;
pub use rgb::Rgb;
