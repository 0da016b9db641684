//! Preprocessing options and configuration.
//!
//! This module provides the [`PreprocessOptions`] struct for configuring
//! tone adjustments applied before palette matching.

use crate::api::ConvertError;

/// Optional tone adjustments, applied in a fixed order.
///
/// Every stage is off by default. Stages run in this order, each one only if
/// its option is set:
///
/// 1. Hue rotation (`hue_shift`, degrees)
/// 2. Gamma curve (`gamma`)
/// 3. Contrast (`contrast`, 1.0 = unchanged)
/// 4. Posterize (`posterize_colors`, median cut)
///
/// # Example
///
/// ```
/// use sc2_quantize::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .gamma(0.8)
///     .contrast(1.2)
///     .posterize_colors(8);
///
/// assert!(options.validate().is_ok());
/// assert!(!options.is_identity());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreprocessOptions {
    /// Hue rotation in degrees, -180..=180.
    pub hue_shift: Option<f32>,

    /// Gamma exponent applied per channel, must be > 0.
    ///
    /// Values below 1.0 brighten mid-tones, values above darken them.
    pub gamma: Option<f32>,

    /// Contrast factor around the image's mean luminance, must be >= 0.
    pub contrast: Option<f32>,

    /// Number of colors to posterize to, must be >= 2.
    pub posterize_colors: Option<u32>,
}

impl PreprocessOptions {
    /// Create options with every stage disabled.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set hue rotation in degrees.
    #[inline]
    pub fn hue_shift(mut self, degrees: f32) -> Self {
        self.hue_shift = Some(degrees);
        self
    }

    /// Set gamma exponent.
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Set contrast factor.
    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = Some(factor);
        self
    }

    /// Set posterize color count.
    #[inline]
    pub fn posterize_colors(mut self, colors: u32) -> Self {
        self.posterize_colors = Some(colors);
        self
    }

    /// True if no stage is enabled.
    pub fn is_identity(&self) -> bool {
        self.hue_shift.is_none()
            && self.gamma.is_none()
            && self.contrast.is_none()
            && self.posterize_colors.is_none()
    }

    /// Check every parameter before anything is applied.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidHueShift`] if `|hue_shift| > 180` or not finite
    /// - [`ConvertError::InvalidGamma`] if `gamma <= 0` or not finite
    /// - [`ConvertError::InvalidContrast`] if `contrast < 0` or not finite
    /// - [`ConvertError::InvalidPosterize`] if `posterize_colors < 2`
    pub fn validate(&self) -> Result<(), ConvertError> {
        if let Some(shift) = self.hue_shift {
            if !shift.is_finite() || !(-180.0..=180.0).contains(&shift) {
                return Err(ConvertError::InvalidHueShift(shift));
            }
        }
        if let Some(gamma) = self.gamma {
            if !gamma.is_finite() || gamma <= 0.0 {
                return Err(ConvertError::InvalidGamma(gamma));
            }
        }
        if let Some(contrast) = self.contrast {
            if !contrast.is_finite() || contrast < 0.0 {
                return Err(ConvertError::InvalidContrast(contrast));
            }
        }
        if let Some(colors) = self.posterize_colors {
            if colors < 2 {
                return Err(ConvertError::InvalidPosterize(colors));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let opts = PreprocessOptions::default();
        assert!(opts.is_identity());
        assert!(opts.validate().is_ok());
        assert_eq!(opts, PreprocessOptions::new());
    }

    #[test]
    fn test_builder_chaining() {
        let opts = PreprocessOptions::new()
            .hue_shift(-30.0)
            .gamma(1.5)
            .contrast(0.0)
            .posterize_colors(2);

        assert_eq!(opts.hue_shift, Some(-30.0));
        assert_eq!(opts.gamma, Some(1.5));
        assert_eq!(opts.contrast, Some(0.0));
        assert_eq!(opts.posterize_colors, Some(2));
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_invalid_gamma() {
        for gamma in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = PreprocessOptions::new().gamma(gamma).validate().unwrap_err();
            assert!(matches!(err, ConvertError::InvalidGamma(_)), "gamma {gamma}");
        }
    }

    #[test]
    fn test_invalid_contrast() {
        assert_eq!(
            PreprocessOptions::new().contrast(-0.1).validate(),
            Err(ConvertError::InvalidContrast(-0.1))
        );
    }

    #[test]
    fn test_hue_shift_bounds() {
        assert!(PreprocessOptions::new().hue_shift(180.0).validate().is_ok());
        assert!(PreprocessOptions::new().hue_shift(-180.0).validate().is_ok());
        assert_eq!(
            PreprocessOptions::new().hue_shift(180.5).validate(),
            Err(ConvertError::InvalidHueShift(180.5))
        );
    }

    #[test]
    fn test_invalid_posterize() {
        assert_eq!(
            PreprocessOptions::new().posterize_colors(1).validate(),
            Err(ConvertError::InvalidPosterize(1))
        );
    }
}
