//! Conversion options.

use std::collections::BTreeMap;

use crate::block::EightDotMode;
use crate::color::Rgb;
use crate::palette::{Palette, PaletteError, PaletteFamily};
use crate::preprocess::{OversizeMode, PreprocessOptions, UndersizeMode};

/// Every knob of a single conversion.
///
/// # Defaults
///
/// - Oversize and undersize inputs are rejected
/// - Background (for padding) is black
/// - MSX1 palette, no overrides
/// - BSAVE header included
/// - Eight-dot mode [`EightDotMode::Basic`]
/// - No tone adjustment
/// - Dithering enabled and applied
///
/// # Example
///
/// ```
/// use sc2_quantize::{ConvertOptions, EightDotMode, OversizeMode, Rgb};
///
/// let options = ConvertOptions::new()
///     .oversize_mode(OversizeMode::Shrink)
///     .eightdot_mode(EightDotMode::Best)
///     .palette_override(5, Rgb::new(255, 0, 0))
///     .gamma(0.9);
///
/// assert!(options.include_header);
/// assert_eq!(options.palette_overrides.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub oversize_mode: OversizeMode,
    pub undersize_mode: UndersizeMode,
    /// Fill color when padding.
    pub background_color: Rgb,
    pub use_msx2_palette: bool,
    /// Replacement colors keyed by 1-based color code (1..=15).
    pub palette_overrides: BTreeMap<u8, Rgb>,
    /// Prepend the 7-byte BSAVE header to VRAM output.
    pub include_header: bool,
    pub eightdot_mode: EightDotMode,
    pub gamma: Option<f32>,
    pub contrast: Option<f32>,
    pub hue_shift: Option<f32>,
    pub posterize_colors: Option<u32>,
    /// Allow 2-color pattern candidates.
    pub enable_dither: bool,
    /// Match against pattern candidates but render their nearest solid color.
    pub skip_dither_application: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            oversize_mode: OversizeMode::Error,
            undersize_mode: UndersizeMode::Error,
            background_color: Rgb::BLACK,
            use_msx2_palette: false,
            palette_overrides: BTreeMap::new(),
            include_header: true,
            eightdot_mode: EightDotMode::Basic,
            gamma: None,
            contrast: None,
            hue_shift: None,
            posterize_colors: None,
            enable_dither: true,
            skip_dither_application: false,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn oversize_mode(mut self, mode: OversizeMode) -> Self {
        self.oversize_mode = mode;
        self
    }

    #[inline]
    pub fn undersize_mode(mut self, mode: UndersizeMode) -> Self {
        self.undersize_mode = mode;
        self
    }

    #[inline]
    pub fn background_color(mut self, color: Rgb) -> Self {
        self.background_color = color;
        self
    }

    #[inline]
    pub fn msx2_palette(mut self, enabled: bool) -> Self {
        self.use_msx2_palette = enabled;
        self
    }

    /// Override the color for 1-based code `code`. Checked when the
    /// palette is built.
    #[inline]
    pub fn palette_override(mut self, code: u8, color: Rgb) -> Self {
        self.palette_overrides.insert(code, color);
        self
    }

    #[inline]
    pub fn include_header(mut self, enabled: bool) -> Self {
        self.include_header = enabled;
        self
    }

    #[inline]
    pub fn eightdot_mode(mut self, mode: EightDotMode) -> Self {
        self.eightdot_mode = mode;
        self
    }

    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = Some(factor);
        self
    }

    #[inline]
    pub fn hue_shift(mut self, degrees: f32) -> Self {
        self.hue_shift = Some(degrees);
        self
    }

    #[inline]
    pub fn posterize_colors(mut self, colors: u32) -> Self {
        self.posterize_colors = Some(colors);
        self
    }

    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.enable_dither = enabled;
        self
    }

    #[inline]
    pub fn skip_dither_application(mut self, enabled: bool) -> Self {
        self.skip_dither_application = enabled;
        self
    }

    pub fn palette_family(&self) -> PaletteFamily {
        if self.use_msx2_palette {
            PaletteFamily::Msx2
        } else {
            PaletteFamily::Msx1
        }
    }

    /// Base palette of the selected family with overrides applied.
    pub fn build_palette(&self) -> Result<Palette, PaletteError> {
        Palette::build(self.palette_family(), &self.palette_overrides)
    }

    /// The tone-adjustment subset of these options.
    pub fn preprocess_options(&self) -> PreprocessOptions {
        PreprocessOptions {
            hue_shift: self.hue_shift,
            gamma: self.gamma,
            contrast: self.contrast,
            posterize_colors: self.posterize_colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.oversize_mode, OversizeMode::Error);
        assert_eq!(opts.undersize_mode, UndersizeMode::Error);
        assert_eq!(opts.background_color, Rgb::BLACK);
        assert!(!opts.use_msx2_palette);
        assert!(opts.include_header);
        assert_eq!(opts.eightdot_mode, EightDotMode::Basic);
        assert!(opts.enable_dither);
        assert!(!opts.skip_dither_application);
        assert!(opts.preprocess_options().is_identity());
    }

    #[test]
    fn test_palette_family_switch() {
        assert_eq!(ConvertOptions::new().palette_family(), PaletteFamily::Msx1);
        assert_eq!(
            ConvertOptions::new().msx2_palette(true).palette_family(),
            PaletteFamily::Msx2
        );
    }

    #[test]
    fn test_build_palette_with_override() {
        let palette = ConvertOptions::new()
            .palette_override(15, Rgb::new(1, 1, 1))
            .build_palette()
            .unwrap();
        assert_eq!(palette.color(14), Rgb::new(1, 1, 1));

        let err = ConvertOptions::new()
            .palette_override(16, Rgb::BLACK)
            .build_palette()
            .unwrap_err();
        assert_eq!(err, PaletteError::OverrideOutOfRange { index: 16 });
    }

    #[test]
    fn test_preprocess_subset() {
        let pre = ConvertOptions::new()
            .gamma(1.2)
            .posterize_colors(4)
            .preprocess_options();
        assert_eq!(pre, PreprocessOptions::new().gamma(1.2).posterize_colors(4));
    }
}
