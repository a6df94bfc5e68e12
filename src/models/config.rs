use crate::error::PipelineError;
use crate::models::DisplaySpec;
use crate::rendering::ToneStage;
use eink_quant::{Palette, QuantizeError};
use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from a YAML file
///
/// Every section and field is optional; anything left out falls back to the
/// values tuned for the Waveshare 7.3" (E) panel.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub panel: PanelConfig,
    pub resize: ResizeConfig,
    pub tone: ToneConfig,
    pub dither: DitherConfig,
    pub output: OutputConfig,
}

/// Target panel geometry and colors
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    pub width: u32,
    pub height: u32,

    /// Palette as hex colors, in the order the panel driver expects
    pub palette: Vec<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: DisplaySpec::WAVESHARE_7IN3E.width,
            height: DisplaySpec::WAVESHARE_7IN3E.height,
            palette: Palette::waveshare_6color()
                .colors()
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    pub filter: ResizeFilter,
}

/// Resampling filter used when scaling to the panel resolution
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

/// Tone adjustments applied after resizing
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToneConfig {
    /// Contrast factor (1.0 = unchanged)
    pub contrast: f32,

    /// Saturation factor (1.0 = unchanged, 0.0 = greyscale)
    pub color: f32,

    /// Median filter window (odd, e.g. 3); None disables denoising
    pub denoise: Option<u32>,

    pub sharpen: SharpenConfig,

    /// Stage order; stages not listed are skipped
    pub order: Vec<ToneStageKind>,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            contrast: 1.5,
            color: 1.2,
            denoise: None,
            sharpen: SharpenConfig::default(),
            order: vec![
                ToneStageKind::Contrast,
                ToneStageKind::Color,
                ToneStageKind::Denoise,
                ToneStageKind::Sharpen,
            ],
        }
    }
}

/// Unsharp mask parameters
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharpenConfig {
    /// Gaussian blur radius (sigma) in pixels
    pub radius: f32,

    /// Strength in percent of the difference added back
    pub percent: u32,

    /// Minimum per-channel difference before sharpening applies
    pub threshold: u8,
}

impl Default for SharpenConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            percent: 140,
            threshold: 3,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToneStageKind {
    Contrast,
    Color,
    Denoise,
    Sharpen,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DitherConfig {
    /// 0.0 = nearest color only, 1.0 = full Floyd-Steinberg
    pub strength: f64,

    /// Let the image library handle strength 0 and 1
    pub native_fast_path: bool,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            strength: 1.0,
            native_fast_path: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Appended to the source file stem
    pub suffix: String,

    pub png_layout: PngLayout,

    /// Recompress PNG output with oxipng
    pub optimize: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            suffix: "_waveshare6".to_string(),
            png_layout: PngLayout::Palette256,
            optimize: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indexed PNG
    #[default]
    Png,
    /// True-color BMP
    Bmp,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
        }
    }
}

/// How indexed PNG pixel data is laid out
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PngLayout {
    /// 8-bit indices with a full 256-entry PLTE, padded with black
    #[default]
    Palette256,
    /// Smallest bit depth that fits the palette (1, 2, 4 or 8) and a PLTE
    /// with only the palette entries
    Packed,
}

impl AppConfig {
    /// Load configuration from an optional YAML file
    ///
    /// No path means defaults. A path that does not exist logs a warning and
    /// also falls back to defaults; a file that exists but cannot be read or
    /// parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, PipelineError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            width = config.panel.width,
            height = config.panel.height,
            colors = config.panel.palette.len(),
            strength = config.dither.strength,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, PipelineError> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| PipelineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.display_spec()?;
        self.palette()?;
        if let Some(size) = self.tone.denoise {
            if size == 0 || size % 2 == 0 {
                return Err(PipelineError::Config(format!(
                    "denoise window must be odd and positive, got {size}"
                )));
            }
        }
        if !self.tone.sharpen.radius.is_finite() || self.tone.sharpen.radius < 0.0 {
            return Err(PipelineError::Config(format!(
                "sharpen radius must be non-negative, got {}",
                self.tone.sharpen.radius
            )));
        }
        Ok(())
    }

    pub fn display_spec(&self) -> Result<DisplaySpec, PipelineError> {
        DisplaySpec::from_dimensions(self.panel.width, self.panel.height)
    }

    /// Build the core palette from the configured hex colors
    pub fn palette(&self) -> Result<Palette, PipelineError> {
        Palette::from_hex(&self.panel.palette)
            .map_err(|e| PipelineError::Quantize(QuantizeError::InvalidPalette(e)))
    }

    /// Tone stages in configured order
    ///
    /// Denoise is dropped when no window is configured.
    pub fn tone_stages(&self) -> Vec<ToneStage> {
        let tone = &self.tone;
        tone.order
            .iter()
            .filter_map(|kind| match kind {
                ToneStageKind::Contrast => Some(ToneStage::Contrast(tone.contrast)),
                ToneStageKind::Color => Some(ToneStage::Color(tone.color)),
                ToneStageKind::Denoise => tone.denoise.map(ToneStage::Denoise),
                ToneStageKind::Sharpen => Some(ToneStage::Sharpen {
                    radius: tone.sharpen.radius,
                    percent: tone.sharpen.percent,
                    threshold: tone.sharpen.threshold,
                }),
            })
            .collect()
    }
}
