use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::PipelineError;
use crate::services::ImagePipeline;

/// Extensions accepted as input, compared case-insensitively
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

/// Outcome counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted + self.failed + self.skipped
    }
}

/// Converts every supported image in a directory
pub struct BatchConverter<'a> {
    pipeline: &'a ImagePipeline,
}

impl<'a> BatchConverter<'a> {
    pub fn new(pipeline: &'a ImagePipeline) -> Self {
        Self { pipeline }
    }

    /// Convert all images in `source_dir` into `output_dir`
    ///
    /// Only setup problems (output directory cannot be created, source
    /// directory cannot be listed) are returned as errors. A file that fails
    /// to convert is logged and counted, and the batch moves on.
    pub fn run(&self, source_dir: &Path, output_dir: &Path) -> Result<BatchReport, PipelineError> {
        std::fs::create_dir_all(output_dir)?;

        let mut entries = std::fs::read_dir(source_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect::<Vec<_>>();
        entries.sort();

        tracing::info!(
            source = %source_dir.display(),
            output = %output_dir.display(),
            entries = entries.len(),
            "Starting batch conversion"
        );

        let mut report = BatchReport::default();
        for path in entries {
            if !is_candidate(&path) {
                tracing::debug!(path = %path.display(), "Skipping");
                report.skipped += 1;
                continue;
            }

            let target = self.output_path(&path, output_dir);
            match self.pipeline.convert_file(&path, &target) {
                Ok(()) => report.converted += 1,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to convert");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            converted = report.converted,
            failed = report.failed,
            skipped = report.skipped,
            "Batch conversion finished"
        );
        Ok(report)
    }

    fn output_path(&self, input: &Path, output_dir: &Path) -> PathBuf {
        let output = self.pipeline.output();
        output_dir.join(output_file_name(
            input,
            &output.suffix,
            output.format.extension(),
        ))
    }
}

/// Whether `path` has one of [`SUPPORTED_EXTENSIONS`]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_candidate(path: &Path) -> bool {
    !is_hidden(path) && path.is_file() && is_supported_image(path)
}

/// `<stem><suffix>.<extension>` for an input path
pub fn output_file_name(input: &Path, suffix: &str, extension: &str) -> OsString {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    name.push(".");
    name.push(extension);
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppConfig, PanelConfig};
    use image::{Rgb, RgbImage};

    fn pipeline() -> ImagePipeline {
        let config = AppConfig {
            panel: PanelConfig {
                width: 8,
                height: 6,
                ..Default::default()
            },
            ..Default::default()
        };
        ImagePipeline::from_config(&config).unwrap()
    }

    fn write_image(path: &Path) {
        RgbImage::from_fn(12, 9, |x, y| Rgb([(x * 20) as u8, (y * 25) as u8, 128]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("a.JPEG")));
        assert!(is_supported_image(Path::new("dir/b.Tiff")));
        assert!(is_supported_image(Path::new("c.gif")));
        assert!(!is_supported_image(Path::new("d.tif")));
        assert!(!is_supported_image(Path::new("e.webp")));
        assert!(!is_supported_image(Path::new("noext")));
    }

    #[test]
    fn test_hidden() {
        assert!(is_hidden(Path::new("/tmp/.DS_Store")));
        assert!(is_hidden(Path::new("._photo.jpg")));
        assert!(!is_hidden(Path::new("photo.jpg")));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(Path::new("/in/holiday.JPG"), "_waveshare6", "png"),
            OsString::from("holiday_waveshare6.png")
        );
        assert_eq!(
            output_file_name(Path::new("archive.tar.gif"), "_x", "bmp"),
            OsString::from("archive.tar_x.bmp")
        );
    }

    #[test]
    fn test_run_counts() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_image(&src.path().join("one.png"));
        write_image(&src.path().join("two.bmp"));
        write_image(&src.path().join(".hidden.png"));
        std::fs::write(src.path().join("notes.txt"), "hello").unwrap();
        std::fs::write(src.path().join("broken.jpg"), "not an image").unwrap();
        std::fs::create_dir(src.path().join("nested.png")).unwrap();

        let pipeline = pipeline();
        let report = BatchConverter::new(&pipeline)
            .run(src.path(), out.path())
            .unwrap();

        assert_eq!(
            report,
            BatchReport {
                converted: 2,
                failed: 1,
                skipped: 3,
            }
        );
        assert_eq!(report.total(), 6);
        assert!(out.path().join("one_waveshare6.png").is_file());
        assert!(out.path().join("two_waveshare6.png").is_file());
        assert!(!out.path().join("broken_waveshare6.png").exists());
    }

    #[test]
    fn test_missing_source_is_error() {
        let out = tempfile::tempdir().unwrap();
        let pipeline = pipeline();
        let result =
            BatchConverter::new(&pipeline).run(&out.path().join("missing"), out.path());
        assert!(matches!(result, Err(PipelineError::Io(_))));
    }
}
