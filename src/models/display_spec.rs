use crate::error::PipelineError;

/// Panel resolution the pipeline resizes every image to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySpec {
    pub width: u32,
    pub height: u32,
}

impl DisplaySpec {
    /// Waveshare 7.3" (E) six-color panel: 800x480
    pub const WAVESHARE_7IN3E: Self = Self {
        width: 800,
        height: 480,
    };

    /// Build a spec from configured dimensions
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self, PipelineError> {
        if width == 0 || height == 0 {
            return Err(PipelineError::UnsupportedDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::WAVESHARE_7IN3E
    }
}
