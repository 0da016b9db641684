//! Palette types and utilities
//!
//! This module provides the two fixed 15-color hardware palettes, override
//! handling, and the error types for color parsing and palette validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PaletteFamily, MSX1_COLORS, MSX2_COLORS, PALETTE_LEN};
