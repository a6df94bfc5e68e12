//! Dithering strength resolution.

/// How much quantization error a pass diffuses.
///
/// Resolved once per pass from a user-facing strength value via
/// [`Diffusion::from_strength`]; the quantizer dispatches on the variant
/// instead of re-checking the number for every pixel.
///
/// # Example
///
/// ```
/// use eink_quant::Diffusion;
///
/// assert_eq!(Diffusion::from_strength(0.0), Diffusion::Off);
/// assert_eq!(Diffusion::from_strength(1.0), Diffusion::Full);
/// assert_eq!(Diffusion::from_strength(0.25), Diffusion::Scaled(0.25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Diffusion {
    /// Plain nearest-color mapping. No error leaves any pixel.
    Off,
    /// Classic Floyd-Steinberg: the whole residual is diffused.
    #[default]
    Full,
    /// Residual multiplied by the factor (strictly between 0 and 1) before
    /// diffusion. A hand-built factor outside that range is clamped the
    /// same way [`Diffusion::from_strength`] clamps, see
    /// [`Diffusion::resolved`].
    Scaled(f64),
}

impl Diffusion {
    /// Resolve a strength value.
    ///
    /// Values are clamped to `[0, 1]` and NaN counts as 0, so every input
    /// produces a valid mode.
    pub fn from_strength(strength: f64) -> Self {
        if strength.is_nan() || strength <= 0.0 {
            Diffusion::Off
        } else if strength >= 1.0 {
            Diffusion::Full
        } else {
            Diffusion::Scaled(strength)
        }
    }

    /// Canonical form of this mode.
    ///
    /// `Scaled` factors run through [`Diffusion::from_strength`] again, so
    /// `Scaled(3.0)` becomes `Full` and `Scaled(NaN)` becomes `Off`.
    #[inline]
    pub fn resolved(self) -> Self {
        match self {
            Diffusion::Scaled(s) => Diffusion::from_strength(s),
            other => other,
        }
    }

    /// Multiplier applied to the residual before it is spread, always in
    /// `[0, 1]`.
    #[inline]
    pub fn factor(self) -> f64 {
        match self.resolved() {
            Diffusion::Off => 0.0,
            Diffusion::Full => 1.0,
            Diffusion::Scaled(s) => s,
        }
    }
}
