//! The 8-dot rule: at most two colors per 8-pixel run.
//!
//! Screen 2 stores one foreground and one background color per 8-pixel
//! horizontal run of each scan-line. After classification a run may hold
//! more indices than that; [`enforce_block_constraint`] picks two of them
//! with a [`PairSelector`] and snaps every pixel of the run to the closer of
//! the pair, judged by the pixel's original color. Ties go to the pair's
//! first member.
//!
//! # Strategies
//!
//! | Mode | Pairs tried | Cost |
//! |------|-------------|------|
//! | [`EightDotMode::Fast`] | none, two most frequent | cheapest |
//! | [`EightDotMode::Basic`] | pairs of colors present in the run | moderate |
//! | [`EightDotMode::Best`] | all 105 palette pairs | most expensive |
//!
//! [`EightDotMode::None`] skips the rule entirely; such a grid can be
//! previewed but not encoded.

mod strategy;

pub use strategy::{BasicSelector, BestSelector, FastSelector, PairSelector};

use image::RgbImage;

use crate::color::Rgb;
use crate::output::IndexGrid;
use crate::palette::Palette;

/// Width of one color run.
pub const BLOCK_WIDTH: usize = 8;

/// How the two colors of an over-colored run are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EightDotMode {
    Fast,
    #[default]
    Basic,
    Best,
    /// Leave runs unconstrained.
    None,
}

impl EightDotMode {
    /// Selector for this mode, or `None` when the rule is disabled.
    pub fn selector(self) -> Option<Box<dyn PairSelector>> {
        match self {
            EightDotMode::Fast => Some(Box::new(FastSelector)),
            EightDotMode::Basic => Some(Box::new(BasicSelector)),
            EightDotMode::Best => Some(Box::new(BestSelector)),
            EightDotMode::None => None,
        }
    }
}

/// Reduce every 8-pixel run of `grid` to at most two indices.
///
/// `source` is the image the grid was classified from and must have the
/// same dimensions. Runs that already comply are left untouched, so
/// applying this twice changes nothing the second time.
pub fn enforce_block_constraint(
    grid: &mut IndexGrid,
    source: &RgbImage,
    palette: &Palette,
    selector: &dyn PairSelector,
) {
    let width = grid.width();
    debug_assert_eq!(
        (width, grid.height()),
        (source.width() as usize, source.height() as usize)
    );

    let mut rewritten = 0usize;
    let mut colors: Vec<Rgb> = Vec::with_capacity(BLOCK_WIDTH);
    for y in 0..grid.height() {
        let row = grid.row_mut(y);
        for (bx, block) in row.chunks_mut(BLOCK_WIDTH).enumerate() {
            if distinct_count(block) <= 2 {
                continue;
            }

            colors.clear();
            let x0 = bx * BLOCK_WIDTH;
            colors.extend(
                (x0..x0 + block.len()).map(|x| Rgb::from(*source.get_pixel(x as u32, y as u32))),
            );

            // Equidistant pixels go to the first member of the pair.
            let (a, b) = selector.select(block, &colors, palette);
            let (ca, cb) = (palette.color(a as usize), palette.color(b as usize));
            for (slot, px) in block.iter_mut().zip(&colors) {
                *slot = if px.distance_sq(ca) <= px.distance_sq(cb) {
                    a
                } else {
                    b
                };
            }
            rewritten += 1;
        }
    }

    tracing::debug!(stage = "eightdot", blocks = rewritten, "Enforced 2-color runs");
}

fn distinct_count(block: &[u8]) -> usize {
    let mut seen = 0u16;
    for &i in block {
        seen |= 1 << i;
    }
    seen.count_ones() as usize
}
