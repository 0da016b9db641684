//! Image preprocessing ahead of palette matching.
//!
//! Two independent steps run before any color is matched against the MSX
//! palette:
//!
//! 1. **Tone adjustment** ([`Preprocessor`]) - optional hue rotation, gamma,
//!    contrast and posterization, in that fixed order
//! 2. **Canvas fitting** ([`fit_canvas`]) - bring the image to exactly
//!    256x192 by shrinking, cropping or padding as configured
//!
//! All parameters are validated up front; a rejected value never leaves a
//! half-processed image behind.
//!
//! # Example
//!
//! ```
//! use image::RgbImage;
//! use sc2_quantize::{fit_canvas, OversizeMode, PreprocessOptions, Preprocessor, Rgb, UndersizeMode};
//!
//! let preprocessor = Preprocessor::new(PreprocessOptions::new().gamma(0.9)).unwrap();
//! let image = preprocessor.process(RgbImage::new(100, 50));
//!
//! let canvas = fit_canvas(image, OversizeMode::Error, UndersizeMode::Pad, Rgb::BLACK).unwrap();
//! assert_eq!(canvas.dimensions(), (256, 192));
//! ```

mod hsv;
mod median_cut;
mod options;
mod preprocessor;
mod resize;

pub use options::PreprocessOptions;
pub use preprocessor::Preprocessor;
pub use resize::{fit_canvas, OversizeMode, UndersizeMode, CANVAS_HEIGHT, CANVAS_WIDTH};
