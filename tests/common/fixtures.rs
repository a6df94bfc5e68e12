//! Test fixtures and constants.

use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Panel geometry small enough to keep tests fast
pub mod panel {
    pub const WIDTH: u32 = 40;
    pub const HEIGHT: u32 = 24;
}

/// Palette colors in driver order
pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const YELLOW: [u8; 3] = [255, 255, 0];

    pub const WAVESHARE_6: [[u8; 3]; 6] = [BLACK, WHITE, GREEN, BLUE, RED, YELLOW];
}

/// YAML config for the small test panel
pub fn small_panel_yaml() -> String {
    format!(
        "panel:\n  width: {}\n  height: {}\n",
        panel::WIDTH,
        panel::HEIGHT
    )
}

/// A smooth photo-like image with every channel varying
pub fn photo(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = x * 255 / width.max(2).saturating_sub(1);
        let g = y * 255 / height.max(2).saturating_sub(1);
        let b = (x + y) * 255 / (width + height).max(2).saturating_sub(2).max(1);
        Rgb([r.min(255) as u8, g.min(255) as u8, b.min(255) as u8])
    })
}

/// A flat image in one color
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Save `img` to `path` in `format`
pub fn write_image(path: &Path, img: &RgbImage, format: ImageFormat) {
    img.save_with_format(path, format)
        .unwrap_or_else(|e| panic!("failed to write fixture {}: {e}", path.display()));
}
