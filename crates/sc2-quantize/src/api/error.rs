//! Unified error type for the conversion pipeline.
//!
//! Every failure mode of the converter surfaces as one [`ConvertError`]. The
//! pipeline is fail-fast: an error is returned before any output buffer is
//! produced, never alongside a partial one.

use thiserror::Error;

use crate::palette::PaletteError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Gamma must be a positive number (got {0})")]
    InvalidGamma(f32),

    #[error("Contrast must be zero or greater (got {0})")]
    InvalidContrast(f32),

    #[error("Hue shift must be between -180 and 180 degrees (got {0})")]
    InvalidHueShift(f32),

    #[error("Posterize color count must be at least 2 (got {0})")]
    InvalidPosterize(u32),

    #[error("Input exceeds 256x192 ({width}x{height}). Use shrink or crop to allow resizing or cropping.")]
    Oversize { width: u32, height: u32 },

    #[error("Input is smaller than 256x192 ({width}x{height}). Use pad and set a background color.")]
    Undersize { width: u32, height: u32 },

    #[error("Image could not be resized to exactly 256x192 (got {width}x{height})")]
    CanvasMismatch { width: u32, height: u32 },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Eight-dot mode NONE cannot produce hardware VRAM output")]
    EightDotDisabled,

    #[error("VRAM data must be 16 KiB or a 7-byte header plus 16 KiB (got {0} bytes)")]
    InvalidVramLength(usize),

    #[error("VRAM data has 7 extra bytes but they are not a BSAVE header")]
    InvalidHeader,
}
