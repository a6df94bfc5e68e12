//! Decoding with EXIF orientation applied.

use crate::error::PipelineError;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};
use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

/// Decode an image file into 8-bit RGB.
///
/// The format is sniffed from the content, not the extension. EXIF
/// orientation is applied so the result is upright; alpha is dropped.
pub fn decode_file(path: &Path) -> Result<RgbImage, PipelineError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    decode_reader(reader)
}

/// Decode an in-memory image into 8-bit RGB.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbImage, PipelineError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    decode_reader(reader)
}

fn decode_reader<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<RgbImage, PipelineError> {
    let mut decoder = reader.into_decoder()?;
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);

    tracing::debug!(
        width = img.width(),
        height = img.height(),
        ?orientation,
        "Decoded image"
    );
    Ok(img.into_rgb8())
}
