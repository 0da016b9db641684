//! Public API for the sc2-quantize crate.
//!
//! This module provides the high-level API: [`Sc2Converter`], its
//! [`ConvertOptions`], and the unified [`ConvertError`] type.

mod builder;
mod error;
mod options;

pub use builder::Sc2Converter;
pub use error::ConvertError;
pub use options::ConvertOptions;
