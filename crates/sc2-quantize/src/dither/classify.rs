//! Per-pixel candidate matching.

use std::collections::HashMap;

use image::RgbImage;

use crate::color::Rgb;
use crate::output::IndexGrid;
use crate::palette::Palette;

use super::candidate::DitherCandidate;

/// Maps every pixel to the palette index of its closest candidate.
///
/// Matching is by squared RGB distance to each candidate's `mix`; the first
/// of several equally close candidates wins. Results are memoized per source
/// color since photos repeat colors heavily.
///
/// # Example
///
/// ```
/// use image::{Rgb as Px, RgbImage};
/// use sc2_quantize::{build_candidates, Palette, PixelClassifier};
///
/// let palette = Palette::default();
/// let mut classifier = PixelClassifier::new(build_candidates(&palette, true), &palette, false);
///
/// let grid = classifier.classify(&RgbImage::from_pixel(8, 4, Px([255, 255, 255])));
/// assert!(grid.indices().iter().all(|&i| i == 14));
/// ```
pub struct PixelClassifier {
    candidates: Vec<DitherCandidate>,
    /// Per candidate, the solid index used when patterns are not applied.
    flattened: Option<Vec<u8>>,
    cache: HashMap<Rgb, usize>,
}

impl PixelClassifier {
    /// Create a classifier over an ordered candidate list.
    ///
    /// With `skip_dither_application`, pattern candidates still compete on
    /// their mix color but render as the palette color nearest that mix.
    pub fn new(
        candidates: Vec<DitherCandidate>,
        palette: &Palette,
        skip_dither_application: bool,
    ) -> Self {
        let flattened = skip_dither_application.then(|| {
            candidates
                .iter()
                .map(|c| match c {
                    DitherCandidate::Single { index, .. } => *index,
                    other => palette.nearest_index(other.mix()),
                })
                .collect()
        });
        Self {
            candidates,
            flattened,
            cache: HashMap::new(),
        }
    }

    /// Position in the candidate list of the best match for `color`.
    pub fn best_candidate(&mut self, color: Rgb) -> usize {
        if let Some(&hit) = self.cache.get(&color) {
            return hit;
        }
        let mut best = 0;
        let mut best_dist = u32::MAX;
        for (i, candidate) in self.candidates.iter().enumerate() {
            let dist = color.distance_sq(candidate.mix());
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        self.cache.insert(color, best);
        best
    }

    /// Palette index to place at `(x, y)` for a source `color`.
    pub fn index_at(&mut self, color: Rgb, x: usize, y: usize) -> u8 {
        let pos = self.best_candidate(color);
        match &self.flattened {
            Some(flat) => flat[pos],
            None => self.candidates[pos].index_at(x, y),
        }
    }

    /// Classify every pixel of `image`.
    pub fn classify(&mut self, image: &RgbImage) -> IndexGrid {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut indices = Vec::with_capacity(width * height);
        for (x, y, pixel) in image.enumerate_pixels() {
            indices.push(self.index_at((*pixel).into(), x as usize, y as usize));
        }
        tracing::debug!(
            stage = "classify",
            width,
            height,
            distinct_colors = self.cache.len(),
            "Classified pixels"
        );
        IndexGrid::new(indices, width, height)
    }
}
