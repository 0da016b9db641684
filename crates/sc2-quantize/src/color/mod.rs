//! Color type and distance utilities
//!
//! The converter works exclusively in 8-bit sRGB. Color matching uses the
//! squared Euclidean distance between channel values, which is what the
//! target hardware palettes were tuned against; no perceptual color space is
//! involved anywhere in the pipeline.
//!
//! # Example
//!
//! ```
//! use sc2_quantize::Rgb;
//!
//! let red = Rgb::new(255, 0, 0);
//! let dark_red: Rgb = "185,94,81".parse().unwrap();
//!
//! assert_eq!(red.distance_sq(dark_red), 70 * 70 + 94 * 94 + 81 * 81);
//! ```

mod rgb;

pub use rgb::Rgb;
