use eink_quant::QuantizeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for PipelineError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => PipelineError::Io(io),
            image::ImageError::Encoding(_) => PipelineError::Encode(e.to_string()),
            other => PipelineError::Decode(other.to_string()),
        }
    }
}

impl From<png::EncodingError> for PipelineError {
    fn from(e: png::EncodingError) -> Self {
        PipelineError::Encode(e.to_string())
    }
}
