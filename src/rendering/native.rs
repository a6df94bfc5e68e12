//! Quantization through the `image` crate's own palette routines.
//!
//! Used for strength 0 and strength 1 when `native_fast_path` is enabled.
//! Scaled strengths have no equivalent there and always go through
//! [`eink_quant`].

use eink_quant::{Diffusion, IndexedImage, Palette};
use image::imageops::{self, ColorMap};
use image::{Rgb, RgbImage};

/// Adapts a core [`Palette`] to [`image::imageops::ColorMap`].
///
/// Lookups use the palette's own nearest-color search, so ties resolve the
/// same way as in the core quantizer.
pub struct PaletteColorMap<'a> {
    palette: &'a Palette,
}

impl<'a> PaletteColorMap<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl ColorMap for PaletteColorMap<'_> {
    type Color = Rgb<u8>;

    #[inline]
    fn index_of(&self, color: &Rgb<u8>) -> usize {
        let [r, g, b] = color.0;
        self.palette
            .nearest_index([r as f64, g as f64, b as f64])
    }

    #[inline]
    fn lookup(&self, index: usize) -> Option<Rgb<u8>> {
        self.palette
            .colors()
            .get(index)
            .map(|c| Rgb(c.to_bytes()))
    }

    fn has_lookup(&self) -> bool {
        true
    }

    #[inline]
    fn map_color(&self, color: &mut Rgb<u8>) {
        let idx = self.index_of(color);
        *color = Rgb(self.palette.color(idx).to_bytes());
    }
}

/// Quantize with `image::imageops`, or `None` if `diffusion` has no native
/// equivalent.
///
/// Hand-built `Scaled` factors are resolved first, so `Scaled(3.0)` runs
/// as `Full`.
///
/// `Off` maps every pixel with `index_colors`. `Full` runs the library's
/// integer Floyd-Steinberg (`imageops::dither`) first.
pub fn quantize_native(
    img: &RgbImage,
    palette: &Palette,
    diffusion: Diffusion,
) -> Option<IndexedImage> {
    let map = PaletteColorMap::new(palette);
    let indices = match diffusion.resolved() {
        Diffusion::Off => imageops::index_colors(img, &map),
        Diffusion::Full => {
            let mut dithered = img.clone();
            imageops::dither(&mut dithered, &map);
            imageops::index_colors(&dithered, &map)
        }
        Diffusion::Scaled(_) => return None,
    };

    Some(IndexedImage::new(
        indices.into_raw(),
        img.width() as usize,
        img.height() as usize,
        palette.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eink_quant::{PixelBuffer, Quantizer};

    fn gradient() -> RgbImage {
        RgbImage::from_fn(24, 8, |x, y| {
            Rgb([(x * 10) as u8, (y * 30) as u8, ((x + y) * 7) as u8])
        })
    }

    #[test]
    fn test_color_map_lookup() {
        let palette = Palette::waveshare_6color();
        let map = PaletteColorMap::new(&palette);

        assert_eq!(map.index_of(&Rgb([250, 10, 10])), 4);
        assert_eq!(map.lookup(5), Some(Rgb([255, 255, 0])));
        assert_eq!(map.lookup(6), None);

        let mut c = Rgb([10, 240, 20]);
        map.map_color(&mut c);
        assert_eq!(c, Rgb([0, 255, 0]));
    }

    #[test]
    fn test_off_matches_core() {
        let img = gradient();
        let palette = Palette::waveshare_6color();
        let native = quantize_native(&img, &palette, Diffusion::Off).unwrap();

        let buffer = PixelBuffer::from_rgb8(img.as_raw(), 24, 8).unwrap();
        let core = Quantizer::new(palette).strength(0.0).quantize(&buffer).unwrap();
        assert_eq!(native, core);
    }

    #[test]
    fn test_full_stays_in_palette() {
        let img = gradient();
        let palette = Palette::waveshare_6color();
        let native = quantize_native(&img, &palette, Diffusion::Full).unwrap();

        assert_eq!(native.indices().len(), 24 * 8);
        assert!(native.indices().iter().all(|&i| i < 6));
    }

    #[test]
    fn test_scaled_has_no_native_path() {
        let palette = Palette::waveshare_6color();
        assert!(quantize_native(&gradient(), &palette, Diffusion::Scaled(0.5)).is_none());
    }

    #[test]
    fn test_out_of_range_scaled_uses_native_modes() {
        let palette = Palette::waveshare_6color();
        let full = quantize_native(&gradient(), &palette, Diffusion::Full);
        let over = quantize_native(&gradient(), &palette, Diffusion::Scaled(3.0));
        assert!(over.is_some());
        assert_eq!(over, full);

        let off = quantize_native(&gradient(), &palette, Diffusion::Off);
        let nan = quantize_native(&gradient(), &palette, Diffusion::Scaled(f64::NAN));
        assert_eq!(nan, off);
    }
}
