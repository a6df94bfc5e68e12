//! Output encoding for quantized images.
//!
//! PNG output keeps the palette indices (indexed color type). BMP has no
//! useful indexed form in the readers panels ship with, so it is written as
//! flattened 24-bit RGB.

use crate::error::PipelineError;
use crate::models::{OutputConfig, OutputFormat, PngLayout};
use eink_quant::IndexedImage;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// Encode according to the output settings.
pub fn encode(image: &IndexedImage, output: &OutputConfig) -> Result<Vec<u8>, PipelineError> {
    match output.format {
        OutputFormat::Png => {
            let png = encode_png(image, output.png_layout)?;
            Ok(if output.optimize {
                optimize_png(png)
            } else {
                png
            })
        }
        OutputFormat::Bmp => encode_bmp(image),
    }
}

/// Encode as an indexed PNG.
///
/// - [`PngLayout::Palette256`]: 8-bit indices and a 256-entry PLTE (the
///   palette followed by black padding)
/// - [`PngLayout::Packed`]: the smallest bit depth holding every index,
///   PLTE with only the palette entries
pub fn encode_png(image: &IndexedImage, layout: PngLayout) -> Result<Vec<u8>, PipelineError> {
    let width = dimension(image.width())?;
    let height = dimension(image.height())?;

    let (bit_depth, plte, packed) = match layout {
        PngLayout::Palette256 => (
            png::BitDepth::Eight,
            image.palette_table(),
            image.indices().to_vec(),
        ),
        PngLayout::Packed => {
            let palette = image.palette();
            let (depth, bits) = match palette.len() {
                0..=2 => (png::BitDepth::One, 1),
                3..=4 => (png::BitDepth::Two, 2),
                5..=16 => (png::BitDepth::Four, 4),
                _ => (png::BitDepth::Eight, 8),
            };
            let plte = palette.to_flat_table(palette.len());
            let packed = if bits == 8 {
                image.indices().to_vec()
            } else {
                pack_nbits(image.indices(), image.width(), bits)
            };
            (depth, plte, packed)
        }
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(bit_depth);
        encoder.set_palette(plte);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&packed)?;
    }
    Ok(buf.into_inner())
}

/// Encode as 24-bit BMP using the palette colors.
pub fn encode_bmp(image: &IndexedImage) -> Result<Vec<u8>, PipelineError> {
    let width = dimension(image.width())?;
    let height = dimension(image.height())?;
    let rgb = RgbImage::from_raw(width, height, image.to_rgb())
        .ok_or_else(|| PipelineError::Encode("pixel buffer does not match size".to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, ImageFormat::Bmp)?;
    Ok(buf.into_inner())
}

/// Re-compress a PNG with oxipng (zopfli + adaptive filter selection).
///
/// Falls back to the input if optimization fails.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping original");
            png_bytes
        }
    }
}

fn dimension(value: usize) -> Result<u32, PipelineError> {
    u32::try_from(value).map_err(|_| PipelineError::Encode(format!("dimension {value} too large")))
}

/// Pack indices into N-bit PNG row data (1, 2, or 4 bits per pixel).
///
/// Each row starts on a byte boundary; unused low bits of the last byte
/// in a row are zero.
fn pack_nbits(indices: &[u8], width: usize, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = width.div_ceil(pixels_per_byte);
    let height = indices.len() / width;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
