//! Dither candidate generation.
//!
//! A candidate is either a solid palette color or a fixed 2-color pattern
//! whose average color (`mix`) stands in for it during matching. The order
//! of the candidate list matters: matching keeps the first of equally close
//! candidates.

use crate::color::Rgb;
use crate::palette::Palette;

use super::allow::pair_allowed;

/// Candidates darker than this may be mixed 3:1 with black.
pub const BLACK_BLEND_MAX_LUMINANCE: f32 = 140.0;

/// Rows x columns of the quarter mask, indexed `[y % 4][x % 2]`.
const QUARTER_MASK: [[bool; 2]; 4] = [[true, false], [false, false], [false, true], [false, false]];

/// Two palette indices and the color their pattern averages to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blend {
    pub primary: u8,
    pub secondary: u8,
    pub mix: Rgb,
}

/// A solid color or a 2-color dither pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DitherCandidate {
    /// One palette entry, no pattern.
    Single { index: u8, color: Rgb },
    /// Secondary on even rows, primary on odd rows.
    HalfEven(Blend),
    /// Secondary on odd rows, primary on even rows.
    HalfOdd(Blend),
    /// Quarter mask; the masked cells take the primary index.
    ///
    /// For a pair `a < b`, primary is `b`, so the pattern is mostly `a`.
    QuarterPrimary(Blend),
    /// Quarter mask; the masked cells take the secondary index.
    ///
    /// For a pair `a < b`, primary is `b` and secondary is `a`, so the
    /// pattern is mostly `b`.
    QuarterSecondary(Blend),
    /// Quarter mask of black (secondary) over a dark color (primary).
    BlackThreeOne(Blend),
}

impl DitherCandidate {
    /// Average color of the rendered pattern.
    pub fn mix(&self) -> Rgb {
        match self {
            Self::Single { color, .. } => *color,
            Self::HalfEven(b)
            | Self::HalfOdd(b)
            | Self::QuarterPrimary(b)
            | Self::QuarterSecondary(b)
            | Self::BlackThreeOne(b) => b.mix,
        }
    }

    /// Whether the minority cells of a quarter pattern take the primary index.
    pub fn minority_is_primary(&self) -> bool {
        matches!(self, Self::QuarterPrimary(_))
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single { .. })
    }

    /// Palette index this candidate puts at `(x, y)`.
    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        match self {
            Self::Single { index, .. } => *index,
            Self::HalfEven(b) => {
                if y % 2 == 0 {
                    b.secondary
                } else {
                    b.primary
                }
            }
            Self::HalfOdd(b) => {
                if y % 2 == 1 {
                    b.secondary
                } else {
                    b.primary
                }
            }
            Self::QuarterPrimary(b) | Self::QuarterSecondary(b) | Self::BlackThreeOne(b) => {
                let minority = QUARTER_MASK[y % 4][x % 2];
                if minority == self.minority_is_primary() {
                    b.primary
                } else {
                    b.secondary
                }
            }
        }
    }
}

/// Build the ordered candidate list for `palette`.
///
/// Without dithering this is just the 15 solid colors. With dithering the
/// solid colors come first, then four patterns for each allowed pair
/// `a < b`, then the black 3:1 blends of every dark color.
pub fn build_candidates(palette: &Palette, dither: bool) -> Vec<DitherCandidate> {
    let colors = palette.colors();
    let mut out: Vec<DitherCandidate> = colors
        .iter()
        .enumerate()
        .map(|(i, &color)| DitherCandidate::Single {
            index: i as u8,
            color,
        })
        .collect();
    if !dither {
        return out;
    }

    for a in 0..colors.len() {
        for b in a + 1..colors.len() {
            if !pair_allowed(a, b) {
                continue;
            }
            let (ca, cb) = (colors[a], colors[b]);
            let (ia, ib) = (a as u8, b as u8);
            let half = Blend {
                primary: ia,
                secondary: ib,
                mix: ca.blend_half(cb),
            };
            out.push(DitherCandidate::HalfEven(half));
            out.push(DitherCandidate::HalfOdd(half));
            out.push(DitherCandidate::QuarterPrimary(Blend {
                primary: ib,
                secondary: ia,
                mix: ca.blend_three_one(cb),
            }));
            out.push(DitherCandidate::QuarterSecondary(Blend {
                primary: ib,
                secondary: ia,
                mix: cb.blend_three_one(ca),
            }));
        }
    }

    let black = colors[0];
    for (i, &color) in colors.iter().enumerate().skip(1) {
        if color.luminance() <= BLACK_BLEND_MAX_LUMINANCE {
            out.push(DitherCandidate::BlackThreeOne(Blend {
                primary: i as u8,
                secondary: 0,
                mix: color.blend_three_one(black),
            }));
        }
    }

    tracing::debug!(stage = "candidates", count = out.len(), "Built dither candidates");
    out
}
