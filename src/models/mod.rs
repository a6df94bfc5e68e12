pub mod config;
pub mod display_spec;

pub use config::{
    AppConfig, DitherConfig, OutputConfig, OutputFormat, PanelConfig, PngLayout, ResizeConfig,
    ResizeFilter, SharpenConfig, ToneConfig, ToneStageKind,
};
pub use display_spec::DisplaySpec;
