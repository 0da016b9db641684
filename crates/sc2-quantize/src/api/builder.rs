//! Sc2Converter -- the primary entry point for the crate.
//!
//! [`Sc2Converter`] validates a [`ConvertOptions`] once and then turns any
//! number of RGB images into Screen 2 or Screen 4 VRAM dumps, or into a
//! preview of what the hardware will show.

use image::RgbImage;

use crate::block::{enforce_block_constraint, EightDotMode};
use crate::dither::{build_candidates, PixelClassifier};
use crate::output::IndexGrid;
use crate::palette::Palette;
use crate::preprocess::{fit_canvas, Preprocessor};
use crate::vram::{decode_sc2, encode_sc2, sc2_to_sc4};

use super::{ConvertError, ConvertOptions};

/// Configured image converter.
///
/// # Design
///
/// - All option validation happens in [`new()`](Self::new); a constructed
///   converter only fails on image-dependent problems (size)
/// - Conversion methods take `&self`, so one converter serves many images
///
/// # Pipeline
///
/// 1. Tone adjustment ([`Preprocessor`])
/// 2. Canvas fitting to 256x192 ([`fit_canvas`])
/// 3. Candidate matching ([`PixelClassifier`])
/// 4. 8-dot rule ([`enforce_block_constraint`]), unless disabled
/// 5. Tile encoding ([`encode_sc2`]) and, for Screen 4, [`sc2_to_sc4`]
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use sc2_quantize::{ConvertOptions, Sc2Converter};
///
/// let converter = Sc2Converter::new(ConvertOptions::new().include_header(false)).unwrap();
/// let image = RgbImage::from_pixel(256, 192, Rgb([0, 0, 0]));
///
/// let vram = converter.to_sc2(&image).unwrap();
/// assert_eq!(vram.len(), 16384);
/// assert_eq!(vram[0], 0xFF);
/// assert_eq!(vram[0x2000], 0x11);
/// ```
#[derive(Debug, Clone)]
pub struct Sc2Converter {
    options: ConvertOptions,
    palette: Palette,
    preprocessor: Preprocessor,
}

impl Sc2Converter {
    /// Validate `options` and build the palette.
    ///
    /// # Errors
    ///
    /// - an invalid tone-adjustment parameter
    /// - [`ConvertError::Palette`] for an override outside 1..=15
    pub fn new(options: ConvertOptions) -> Result<Self, ConvertError> {
        let preprocessor = Preprocessor::new(options.preprocess_options())?;
        let palette = options.build_palette()?;
        Ok(Self {
            options,
            palette,
            preprocessor,
        })
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// The palette in effect, overrides included.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Run steps 1-4 of the pipeline and return the index grid.
    ///
    /// With [`EightDotMode::None`] the grid is returned unconstrained.
    pub fn quantize(&self, image: &RgbImage) -> Result<IndexGrid, ConvertError> {
        let (width, height) = image.dimensions();
        tracing::debug!(stage = "start", width, height, "Converting image");

        let adjusted = self.preprocessor.process(image.clone());
        let canvas = fit_canvas(
            adjusted,
            self.options.oversize_mode,
            self.options.undersize_mode,
            self.options.background_color,
        )?;

        let candidates = build_candidates(&self.palette, self.options.enable_dither);
        let mut classifier = PixelClassifier::new(
            candidates,
            &self.palette,
            self.options.skip_dither_application,
        );
        let mut grid = classifier.classify(&canvas);

        if let Some(selector) = self.options.eightdot_mode.selector() {
            enforce_block_constraint(&mut grid, &canvas, &self.palette, selector.as_ref());
        }
        Ok(grid)
    }

    /// Convert to a Screen 2 VRAM dump.
    ///
    /// # Errors
    ///
    /// [`ConvertError::EightDotDisabled`] with [`EightDotMode::None`], or
    /// any canvas fitting error.
    pub fn to_sc2(&self, image: &RgbImage) -> Result<Vec<u8>, ConvertError> {
        self.encode(image, self.options.include_header)
    }

    /// Convert to a Screen 4 VRAM dump with the palette table filled in.
    ///
    /// # Errors
    ///
    /// Same as [`to_sc2()`](Self::to_sc2).
    pub fn to_sc4(&self, image: &RgbImage) -> Result<Vec<u8>, ConvertError> {
        let sc2 = self.encode(image, false)?;
        sc2_to_sc4(&sc2, &self.palette, self.options.include_header)
    }

    /// Render a 256x192 preview of the result.
    ///
    /// The preview is decoded from the encoded VRAM tables, so it shows
    /// exactly what the hardware would. With [`EightDotMode::None`] the
    /// unconstrained grid is rendered instead.
    pub fn preview(&self, image: &RgbImage) -> Result<RgbImage, ConvertError> {
        let grid = self.quantize(image)?;
        let grid = match self.options.eightdot_mode {
            EightDotMode::None => grid,
            _ => decode_sc2(&encode_sc2(&grid, false))?,
        };
        Ok(grid.to_rgb_image(&self.palette))
    }

    fn encode(&self, image: &RgbImage, include_header: bool) -> Result<Vec<u8>, ConvertError> {
        if self.options.eightdot_mode == EightDotMode::None {
            return Err(ConvertError::EightDotDisabled);
        }
        let grid = self.quantize(image)?;
        Ok(encode_sc2(&grid, include_header))
    }
}
