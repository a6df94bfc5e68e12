//! Image stages around the quantizer: decode, resize, tone, encode.

pub mod decode;
pub mod encode;
pub mod native;
pub mod resize;
pub mod tone;

pub use decode::{decode_bytes, decode_file};
pub use encode::{encode, encode_bmp, encode_png, optimize_png};
pub use native::{quantize_native, PaletteColorMap};
pub use resize::resize_exact;
pub use tone::{apply_stages, ToneStage};
