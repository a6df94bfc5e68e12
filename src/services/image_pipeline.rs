use std::io::Write;
use std::path::Path;

use eink_quant::{IndexedImage, PixelBuffer, Quantizer};
use image::RgbImage;

use crate::error::PipelineError;
use crate::models::{AppConfig, DisplaySpec, OutputConfig, ResizeFilter};
use crate::rendering::{self, ToneStage};

/// Single-image pipeline: decode → resize → tone → quantize → encode
///
/// Built once from an [`AppConfig`] and reused for every file; holds no
/// per-image state.
pub struct ImagePipeline {
    spec: DisplaySpec,
    filter: ResizeFilter,
    stages: Vec<ToneStage>,
    quantizer: Quantizer,
    native_fast_path: bool,
    output: OutputConfig,
}

impl ImagePipeline {
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        let quantizer = Quantizer::new(config.palette()?).strength(config.dither.strength);

        Ok(Self {
            spec: config.display_spec()?,
            filter: config.resize.filter,
            stages: config.tone_stages(),
            quantizer,
            native_fast_path: config.dither.native_fast_path,
            output: config.output.clone(),
        })
    }

    pub fn spec(&self) -> DisplaySpec {
        self.spec
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    /// Resize to the panel and run the tone stages
    pub fn prepare(&self, img: &RgbImage) -> RgbImage {
        let resized = rendering::resize_exact(img, self.spec, self.filter);
        rendering::apply_stages(resized, &self.stages)
    }

    /// Map a prepared image onto the palette
    pub fn quantize(&self, img: &RgbImage) -> Result<IndexedImage, PipelineError> {
        let diffusion = self.quantizer.diffusion();

        if self.native_fast_path {
            if let Some(indexed) =
                rendering::quantize_native(img, self.quantizer.palette(), diffusion)
            {
                tracing::debug!(?diffusion, "Quantized with native fast path");
                return Ok(indexed);
            }
        }

        let buffer =
            PixelBuffer::from_rgb8(img.as_raw(), img.width() as usize, img.height() as usize)?;
        Ok(self.quantizer.quantize(&buffer)?)
    }

    /// Prepare and quantize a decoded image
    pub fn process(&self, img: &RgbImage) -> Result<IndexedImage, PipelineError> {
        let prepared = self.prepare(img);
        self.quantize(&prepared)
    }

    /// Encode a quantized image in the configured format
    pub fn encode(&self, indexed: &IndexedImage) -> Result<Vec<u8>, PipelineError> {
        rendering::encode(indexed, &self.output)
    }

    /// Convert one file end to end
    ///
    /// The image is encoded in memory, written to a temporary file next to
    /// `output` and renamed into place, so a failure never leaves a
    /// truncated image behind.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<(), PipelineError> {
        let img = rendering::decode_file(input)?;
        let indexed = self.process(&img)?;
        let bytes = self.encode(&indexed)?;
        write_atomic(output, &bytes)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            bytes = bytes.len(),
            "Converted image"
        );
        Ok(())
    }
}

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// The temporary file is removed if any step fails.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PipelineError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
