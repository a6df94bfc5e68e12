//! Tone adjustments applied between resizing and quantization.
//!
//! Each stage is an independent transform of an RGB image. The pipeline
//! runs them in the order given by the configuration (contrast, color,
//! denoise, sharpen by default).

use image::{imageops, Rgb, RgbImage};

/// A single tone adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneStage {
    /// Blend against a flat grey at the image's mean luminance.
    /// 1.0 leaves the image unchanged, 0.0 gives the flat grey.
    Contrast(f32),

    /// Blend against the per-pixel luminance.
    /// 1.0 leaves the image unchanged, 0.0 gives greyscale.
    Color(f32),

    /// Per-channel median over a square window of the given odd size.
    Denoise(u32),

    /// Unsharp mask: gaussian blur of `radius`, differences above
    /// `threshold` are amplified by `percent`.
    Sharpen {
        radius: f32,
        percent: u32,
        threshold: u8,
    },
}

impl ToneStage {
    pub fn name(&self) -> &'static str {
        match self {
            ToneStage::Contrast(_) => "contrast",
            ToneStage::Color(_) => "color",
            ToneStage::Denoise(_) => "denoise",
            ToneStage::Sharpen { .. } => "sharpen",
        }
    }

    pub fn apply(&self, img: RgbImage) -> RgbImage {
        match *self {
            ToneStage::Contrast(factor) => contrast(img, factor),
            ToneStage::Color(factor) => color(img, factor),
            ToneStage::Denoise(size) => median(img, size),
            ToneStage::Sharpen {
                radius,
                percent,
                threshold,
            } => unsharp_mask(img, radius, percent, threshold),
        }
    }
}

/// Run `stages` in order.
pub fn apply_stages(mut img: RgbImage, stages: &[ToneStage]) -> RgbImage {
    for stage in stages {
        tracing::debug!(stage = stage.name(), "Applying tone stage");
        img = stage.apply(img);
    }
    img
}

/// ITU-R 601-2 luma in 16.16 fixed point.
#[inline]
fn luma(px: &Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// `degenerate + factor * (value - degenerate)`, clipped and truncated.
#[inline]
fn blend(degenerate: f32, value: u8, factor: f32) -> u8 {
    (degenerate + factor * (value as f32 - degenerate)).clamp(0.0, 255.0) as u8
}

fn contrast(mut img: RgbImage, factor: f32) -> RgbImage {
    let count = img.width() as u64 * img.height() as u64;
    if count == 0 {
        return img;
    }
    let sum: u64 = img.pixels().map(|px| luma(px) as u64).sum();
    let mean = (sum as f64 / count as f64 + 0.5).floor() as f32;

    for px in img.pixels_mut() {
        for c in px.0.iter_mut() {
            *c = blend(mean, *c, factor);
        }
    }
    img
}

fn color(mut img: RgbImage, factor: f32) -> RgbImage {
    for px in img.pixels_mut() {
        let grey = luma(px) as f32;
        for c in px.0.iter_mut() {
            *c = blend(grey, *c, factor);
        }
    }
    img
}

fn median(img: RgbImage, size: u32) -> RgbImage {
    if size <= 1 {
        return img;
    }
    let (width, height) = img.dimensions();
    let half = (size / 2) as i64;
    let mut window: Vec<u8> = Vec::with_capacity((size * size) as usize);

    RgbImage::from_fn(width, height, |x, y| {
        let mut out = [0u8; 3];
        for (c, slot) in out.iter_mut().enumerate() {
            window.clear();
            for dy in -half..=half {
                let sy = (y as i64 + dy).clamp(0, height as i64 - 1) as u32;
                for dx in -half..=half {
                    let sx = (x as i64 + dx).clamp(0, width as i64 - 1) as u32;
                    window.push(img.get_pixel(sx, sy).0[c]);
                }
            }
            window.sort_unstable();
            *slot = window[window.len() / 2];
        }
        Rgb(out)
    })
}

fn unsharp_mask(mut img: RgbImage, radius: f32, percent: u32, threshold: u8) -> RgbImage {
    if radius <= 0.0 || percent == 0 {
        return img;
    }
    let blurred = imageops::blur(&img, radius);
    let percent = percent as i32;
    let threshold = threshold as i32;

    for (px, soft) in img.pixels_mut().zip(blurred.pixels()) {
        for (c, s) in px.0.iter_mut().zip(soft.0) {
            let diff = *c as i32 - s as i32;
            if diff.abs() > threshold {
                *c = (*c as i32 + diff * percent / 100).clamp(0, 255) as u8;
            }
        }
    }
    img
}
