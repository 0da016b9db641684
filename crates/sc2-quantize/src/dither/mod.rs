//! Ordered 2-color dithering against the 15-color palette.
//!
//! Instead of diffusing error, every source color is matched against a list
//! of candidates: the solid palette colors plus fixed 2-color patterns
//! between pairs of palette entries. A pattern is rendered by position, so a
//! flat area of one source color always yields the same regular texture.
//!
//! # Candidate order
//!
//! 1. The 15 solid colors
//! 2. Per allowed pair `a < b`: half-even, half-odd, quarter-primary,
//!    quarter-secondary
//! 3. 3:1 blends of each dark color with black
//!
//! Pairs of hue-complementary colors are excluded by [`PAIR_ALLOW`].
//!
//! # Example
//!
//! ```
//! use sc2_quantize::{build_candidates, Palette};
//!
//! let palette = Palette::default();
//! assert_eq!(build_candidates(&palette, false).len(), 15);
//! assert!(build_candidates(&palette, true).len() > 15);
//! ```

mod allow;
mod candidate;
mod classify;

pub use allow::{pair_allowed, PAIR_ALLOW};
pub use candidate::{build_candidates, Blend, DitherCandidate, BLACK_BLEND_MAX_LUMINANCE};
pub use classify::PixelClassifier;
