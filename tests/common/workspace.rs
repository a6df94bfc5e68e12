//! Scratch source/output directories for batch tests.

use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use inkprep::models::AppConfig;
use inkprep::services::{BatchConverter, BatchReport, ImagePipeline};

use super::fixtures;

/// A temporary directory with `src/` and `out/` inside
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir(dir.path().join("src")).expect("Failed to create src dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn source_dir(&self) -> PathBuf {
        self.dir.path().join("src")
    }

    /// Output directory; not created until a batch runs
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn source(&self, name: &str) -> PathBuf {
        self.source_dir().join(name)
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }

    /// Add a photo to the source directory, encoded as `format`
    pub fn add_image(&self, name: &str, img: &RgbImage, format: ImageFormat) -> PathBuf {
        let path = self.source(name);
        fixtures::write_image(&path, img, format);
        path
    }

    /// Add a file with arbitrary content to the source directory
    pub fn add_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.source(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write a config file into the workspace root
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.root().join("config.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Run a batch over `src/` into `out/`
    pub fn run_batch(&self, config: &AppConfig) -> BatchReport {
        let pipeline = ImagePipeline::from_config(config).expect("Invalid test config");
        BatchConverter::new(&pipeline)
            .run(&self.source_dir(), &self.output_dir())
            .expect("Batch setup failed")
    }

    /// Sorted file names in `out/`
    pub fn output_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.output_dir())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}
