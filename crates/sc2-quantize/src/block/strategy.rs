//! Pair selection strategies for the 8-dot rule.

use crate::color::Rgb;
use crate::palette::{Palette, PALETTE_LEN};

/// Chooses which two palette indices an over-colored block keeps.
///
/// `indices` and `source` are the block's current indices and original
/// pixel colors, both of the same length. Order matters: pixels equally
/// close to both colors take the first one.
pub trait PairSelector {
    fn select(&self, indices: &[u8], source: &[Rgb], palette: &Palette) -> (u8, u8);
}

/// Keep the two most frequent indices, most frequent first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastSelector;

/// Try every pair of indices already present in the block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSelector;

/// Try every pair of the whole palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestSelector;

impl PairSelector for FastSelector {
    fn select(&self, indices: &[u8], _source: &[Rgb], _palette: &Palette) -> (u8, u8) {
        let mut counts = [0usize; PALETTE_LEN];
        for &i in indices {
            counts[i as usize] += 1;
        }
        let mut ranked: Vec<u8> = (0..PALETTE_LEN as u8)
            .filter(|&i| counts[i as usize] > 0)
            .collect();
        // Stable sort keeps the lower index first among equal counts.
        ranked.sort_by(|a, b| counts[*b as usize].cmp(&counts[*a as usize]));
        match ranked[..] {
            [first, second, ..] => (first, second),
            [only] => (only, only),
            [] => (0, 0),
        }
    }
}

impl PairSelector for BasicSelector {
    fn select(&self, indices: &[u8], source: &[Rgb], palette: &Palette) -> (u8, u8) {
        let mut present: Vec<u8> = indices.to_vec();
        present.sort_unstable();
        present.dedup();
        let pairs = present
            .iter()
            .enumerate()
            .flat_map(|(i, &a)| present[i + 1..].iter().map(move |&b| (a, b)));
        best_pair(pairs, indices, source, palette)
    }
}

impl PairSelector for BestSelector {
    fn select(&self, indices: &[u8], source: &[Rgb], palette: &Palette) -> (u8, u8) {
        let n = PALETTE_LEN as u8;
        let pairs = (0..n).flat_map(|a| (a + 1..n).map(move |b| (a, b)));
        best_pair(pairs, indices, source, palette)
    }
}

/// Squared error of forcing the block onto `pair`.
///
/// Pixels already on one of the pair's indices cost nothing; every other
/// pixel costs its distance to the closer of the two colors.
pub(crate) fn pair_error(pair: (u8, u8), indices: &[u8], source: &[Rgb], palette: &Palette) -> u64 {
    let ca = palette.color(pair.0 as usize);
    let cb = palette.color(pair.1 as usize);
    indices
        .iter()
        .zip(source)
        .filter(|&(&i, _)| i != pair.0 && i != pair.1)
        .map(|(_, &px)| px.distance_sq(ca).min(px.distance_sq(cb)) as u64)
        .sum()
}

/// First pair with the smallest [`pair_error`].
fn best_pair(
    pairs: impl Iterator<Item = (u8, u8)>,
    indices: &[u8],
    source: &[Rgb],
    palette: &Palette,
) -> (u8, u8) {
    let mut best = None;
    let mut best_error = u64::MAX;
    for pair in pairs {
        let err = pair_error(pair, indices, source, palette);
        if err < best_error {
            best_error = err;
            best = Some(pair);
        }
    }
    best.unwrap_or((indices[0], indices[0]))
}
