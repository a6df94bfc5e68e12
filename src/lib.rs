//! inkprep - photo preparation for 6-color e-paper panels
//!
//! Decodes photos, fits them to the panel, applies tone adjustments and
//! quantizes them to the panel palette with [`eink_quant`].
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
