//! Row-major grid of palette indices.

use image::RgbImage;

use crate::palette::Palette;

/// One 0-based palette index per pixel, row-major.
///
/// # Example
///
/// ```
/// use sc2_quantize::{IndexGrid, Palette};
///
/// let grid = IndexGrid::new(vec![0, 14, 14, 0], 2, 2);
/// let rgb = grid.to_rgb_image(&Palette::default());
///
/// assert_eq!(rgb.get_pixel(1, 0).0, [255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGrid {
    indices: Vec<u8>,
    width: usize,
    height: usize,
}

impl IndexGrid {
    /// Wrap existing indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
        }
    }

    /// A grid filled with one index.
    pub fn filled(index: u8, width: usize, height: usize) -> Self {
        Self::new(vec![index; width * height], width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.indices[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, index: u8) {
        self.indices[y * self.width + x] = index;
    }

    /// One scan-line.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        &self.indices[y * self.width..(y + 1) * self.width]
    }

    /// One scan-line, mutable.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        &mut self.indices[y * self.width..(y + 1) * self.width]
    }

    /// Render through a palette into an RGB raster of the same size.
    pub fn to_rgb_image(&self, palette: &Palette) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            palette
                .color(self.get(x as usize, y as usize) as usize)
                .into()
        })
    }
}
