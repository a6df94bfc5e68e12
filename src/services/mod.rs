pub mod batch;
pub mod image_pipeline;

pub use batch::{is_supported_image, output_file_name, BatchConverter, BatchReport};
pub use image_pipeline::ImagePipeline;
