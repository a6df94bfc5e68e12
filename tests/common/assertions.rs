//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::Path;

use super::fixtures::colors;

/// Decoded indexed PNG: header info, PLTE bytes, raw index data
pub struct IndexedPng {
    pub width: u32,
    pub height: u32,
    pub bit_depth: png::BitDepth,
    pub plte: Vec<u8>,
    pub data: Vec<u8>,
}

/// Decode a PNG without expanding the palette
pub fn read_indexed_png(bytes: &[u8]) -> IndexedPng {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().expect("Not a readable PNG");
    assert_eq!(
        reader.info().color_type,
        png::ColorType::Indexed,
        "Expected an indexed PNG"
    );
    let plte = reader
        .info()
        .palette
        .as_ref()
        .expect("Indexed PNG without PLTE")
        .to_vec();
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).expect("Failed to decode PNG frame");
    data.truncate(info.buffer_size());

    IndexedPng {
        width: info.width,
        height: info.height,
        bit_depth: info.bit_depth,
        plte,
        data,
    }
}

/// Assert the file is an 8-bit indexed PNG of the given size whose PLTE
/// starts with the 6-color palette and whose indices are all below 6
pub fn assert_waveshare_png(path: &Path, width: u32, height: u32) -> IndexedPng {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    let png = read_indexed_png(&bytes);

    assert_eq!((png.width, png.height), (width, height));
    assert_eq!(png.bit_depth, png::BitDepth::Eight);
    assert_eq!(png.plte.len(), 768, "Expected a 256-entry PLTE");
    assert_eq!(png.plte[..18], colors::WAVESHARE_6.concat()[..]);
    assert!(
        png.plte[18..].iter().all(|&b| b == 0),
        "Expected black padding after the palette"
    );
    assert!(
        png.data.iter().all(|&i| i < 6),
        "Index outside the palette in {}",
        path.display()
    );
    png
}

/// Assert every pixel of an RGB image is one of the 6 palette colors
pub fn assert_only_palette_colors(img: &image::RgbImage) {
    for (x, y, px) in img.enumerate_pixels() {
        assert!(
            colors::WAVESHARE_6.contains(&px.0),
            "Pixel ({x}, {y}) = {:?} is not a palette color",
            px.0
        );
    }
}
