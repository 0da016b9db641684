#![allow(
    clippy::needless_range_loop,
    clippy::module_inception,
    clippy::manual_range_contains
)]

//! sc2-quantize: MSX Screen 2 / Screen 4 image conversion
//!
//! This library turns an arbitrary RGB image into the VRAM tables of the
//! MSX "Screen 2" (TMS9918) and "Screen 4" (V9938) graphics modes: a
//! 256x192 bitmap built from 8x8 tiles in which every 8-pixel horizontal
//! run may use only two of 15 colors.
//!
//! # Quick Start
//!
//! The [`Sc2Converter`] is the primary entry point:
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use sc2_quantize::{ConvertOptions, EightDotMode, Sc2Converter};
//!
//! let converter = Sc2Converter::new(
//!     ConvertOptions::new().eightdot_mode(EightDotMode::Fast),
//! )
//! .unwrap();
//!
//! let image = RgbImage::from_pixel(256, 192, Rgb([128, 128, 128]));
//! let sc2 = converter.to_sc2(&image).unwrap();
//! let sc4 = converter.to_sc4(&image).unwrap();
//!
//! assert_eq!(sc2.len(), 7 + 16384);
//! assert_eq!(sc4.len(), 7 + 16384);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RgbImage (any size)
//!     |
//!     v
//! [Preprocessor]          hue, gamma, contrast, posterize (all optional)
//!     |
//!     v
//! [fit_canvas]            shrink / crop / pad to 256x192
//!     |
//!     v
//! [PixelClassifier]       nearest solid color or 2-color pattern
//!     |
//!     v
//! IndexGrid               one palette index (0..=14) per pixel
//!     |
//!     v
//! [8-dot rule]            <= 2 indices per 8-pixel run
//!     |
//!     v
//! [encode_sc2]            pattern / name / color tables
//!     |
//!     +---> [sc2_to_sc4]  sprite table move + palette table
//! ```
//!
//! # Color Matching
//!
//! Every comparison uses squared Euclidean distance on 8-bit sRGB values.
//! The hardware palettes were tuned by eye against plain RGB, and the
//! small, fixed palette leaves little for a perceptual metric to improve
//! on. Ties go to the earlier candidate, the lower index, or the first
//! member of a chosen pair, so output is deterministic.
//!
//! # Palette Indices
//!
//! Internally colors are 0-based indices into a 15-entry [`Palette`].
//! The hardware color code is `index + 1`; code 0 (transparent) is never
//! written by the encoder.

pub mod api;
pub mod block;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod vram;

#[cfg(test)]
mod domain_tests;

pub use api::{ConvertError, ConvertOptions, Sc2Converter};
pub use block::{enforce_block_constraint, EightDotMode, PairSelector};
pub use color::Rgb;
pub use dither::{build_candidates, DitherCandidate, PixelClassifier};
pub use output::IndexGrid;
pub use palette::{Palette, PaletteError, PaletteFamily, ParseColorError};
pub use preprocess::{
    fit_canvas, OversizeMode, PreprocessOptions, Preprocessor, UndersizeMode, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
pub use vram::{decode_sc2, decode_sc4, encode_sc2, sc2_to_sc4, HEADER, VRAM_SIZE};
