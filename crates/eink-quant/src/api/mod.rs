//! Public API for the eink-quant crate.
//!
//! This module provides the high-level API: [`Quantizer`] builder and
//! [`QuantizeError`] unified error type.

mod builder;
mod error;

pub use builder::Quantizer;
pub use error::QuantizeError;
