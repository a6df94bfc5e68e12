//! Scaling to the panel resolution.

use crate::models::{DisplaySpec, ResizeFilter};
use image::imageops::{self, FilterType};
use image::RgbImage;

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Scale to exactly `spec.width` x `spec.height`.
///
/// Aspect ratio is not preserved: the panel is always filled edge to edge.
pub fn resize_exact(img: &RgbImage, spec: DisplaySpec, filter: ResizeFilter) -> RgbImage {
    if img.dimensions() == (spec.width, spec.height) {
        return img.clone();
    }
    imageops::resize(img, spec.width, spec.height, filter.into())
}
