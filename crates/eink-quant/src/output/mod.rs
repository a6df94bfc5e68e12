//! Quantized output types.
//!
//! [`IndexedImage`] is the result of a quantization pass: one palette index
//! per pixel plus the palette that gives those indices meaning.

mod indexed_image;

pub use indexed_image::IndexedImage;
