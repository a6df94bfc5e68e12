//! Error diffusion kernel definition.

/// An error diffusion kernel.
///
/// Each entry gives a neighbor offset `(dx, dy)` relative to the pixel just
/// quantized and the weight of the residual it receives. Neighbors must lie
/// after the current pixel in raster order (`dy > 0`, or `dy == 0` with
/// `dx > 0`) so error only flows into pixels that have not been visited.
///
/// A neighbor receives `error * weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries, applied in order.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Fraction of the residual sent to each entry, in entry order.
    #[inline]
    pub fn factors(&self) -> impl Iterator<Item = (i32, i32, f64)> + '_ {
        let divisor = self.divisor as f64;
        self.entries
            .iter()
            .map(move |&(dx, dy, w)| (dx, dy, w as f64 / divisor))
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
