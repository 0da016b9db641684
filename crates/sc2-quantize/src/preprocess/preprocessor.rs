//! Tone adjustment stages.
//!
//! The [`Preprocessor`] applies the enabled stages of [`PreprocessOptions`]
//! to an RGB image:
//!
//! 1. **Hue rotation** - 8-bit HSV round trip with a rotated hue channel
//! 2. **Gamma** - per-channel power curve through a 256-entry LUT
//! 3. **Contrast** - scale each channel around the image's mean luminance
//! 4. **Posterize** - median-cut reduction to N colors
//!
//! Options are validated in [`Preprocessor::new`], so [`Preprocessor::process`]
//! cannot fail.

use image::RgbImage;

use crate::api::ConvertError;
use crate::color::Rgb;

use super::hsv::{hsv_to_rgb, hue_lut, rgb_to_hsv};
use super::median_cut::posterize;
use super::options::PreprocessOptions;

/// Validated tone-adjustment pipeline.
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use sc2_quantize::{PreprocessOptions, Preprocessor};
///
/// let preprocessor = Preprocessor::new(PreprocessOptions::new().contrast(0.0)).unwrap();
/// let out = preprocessor.process(RgbImage::from_pixel(2, 2, Rgb([200, 10, 10])));
///
/// // Zero contrast collapses every pixel to the mean luminance.
/// assert!(out.pixels().all(|p| p.0 == [67, 67, 67]));
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    options: PreprocessOptions,
}

impl Preprocessor {
    /// Validate `options` and build a preprocessor.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found, see
    /// [`PreprocessOptions::validate`].
    pub fn new(options: PreprocessOptions) -> Result<Self, ConvertError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The validated options.
    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Run every enabled stage over `image`.
    pub fn process(&self, mut image: RgbImage) -> RgbImage {
        if self.options.is_identity() {
            return image;
        }

        if let Some(degrees) = self.options.hue_shift {
            tracing::debug!(stage = "hue", degrees, "Rotating hue");
            rotate_hue(&mut image, degrees);
        }
        if let Some(gamma) = self.options.gamma {
            tracing::debug!(stage = "gamma", gamma, "Applying gamma");
            apply_gamma(&mut image, gamma);
        }
        if let Some(factor) = self.options.contrast {
            tracing::debug!(stage = "contrast", factor, "Adjusting contrast");
            apply_contrast(&mut image, factor);
        }
        if let Some(colors) = self.options.posterize_colors {
            tracing::debug!(stage = "posterize", colors, "Posterizing");
            let mut pixels: Vec<Rgb> = image.pixels().map(|&p| p.into()).collect();
            posterize(&mut pixels, colors);
            for (dst, src) in image.pixels_mut().zip(pixels) {
                *dst = src.into();
            }
        }

        image
    }
}

fn rotate_hue(image: &mut RgbImage, degrees: f32) {
    let lut = hue_lut(degrees);
    for pixel in image.pixels_mut() {
        let [h, s, v] = rgb_to_hsv((*pixel).into());
        *pixel = hsv_to_rgb([lut[h as usize], s, v]).into();
    }
}

fn apply_gamma(image: &mut RgbImage, gamma: f32) {
    let mut lut = [0u8; 256];
    for (v, slot) in lut.iter_mut().enumerate() {
        let scaled = 255.0 * (v as f32 / 255.0).powf(gamma);
        *slot = scaled.round().clamp(0.0, 255.0) as u8;
    }
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = lut[*channel as usize];
        }
    }
}

/// Integer luma, matching common `L` mode conversions.
#[inline]
fn luma(p: &image::Rgb<u8>) -> u32 {
    let [r, g, b] = p.0;
    (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16
}

fn apply_contrast(image: &mut RgbImage, factor: f32) {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return;
    }
    let total: u64 = image.pixels().map(|p| luma(p) as u64).sum();
    let mean = (total as f64 / count as f64 + 0.5).floor() as f32;

    let mut lut = [0u8; 256];
    for (v, slot) in lut.iter_mut().enumerate() {
        let out = mean + factor * (v as f32 - mean);
        *slot = (out as i32).clamp(0, 255) as u8;
    }
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = lut[*channel as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb as Px;

    fn solid(color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(4, 4, Px(color))
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert_eq!(
            Preprocessor::new(PreprocessOptions::new().gamma(-1.0)).unwrap_err(),
            ConvertError::InvalidGamma(-1.0)
        );
    }

    #[test]
    fn test_identity_passthrough() {
        let pre = Preprocessor::new(PreprocessOptions::new()).unwrap();
        let img = solid([12, 34, 56]);
        assert_eq!(pre.process(img.clone()), img);
    }

    #[test]
    fn test_gamma_endpoints_fixed() {
        let pre = Preprocessor::new(PreprocessOptions::new().gamma(2.2)).unwrap();
        let mut img = solid([0, 255, 128]);
        img = pre.process(img);
        let p = img.get_pixel(0, 0).0;
        assert_eq!(p[0], 0);
        assert_eq!(p[1], 255);
        assert!(p[2] < 128, "gamma > 1 darkens mid-tones");
    }

    #[test]
    fn test_gamma_one_is_identity() {
        let pre = Preprocessor::new(PreprocessOptions::new().gamma(1.0)).unwrap();
        let img = solid([1, 127, 254]);
        assert_eq!(pre.process(img.clone()), img);
    }

    #[test]
    fn test_contrast_one_is_identity() {
        let pre = Preprocessor::new(PreprocessOptions::new().contrast(1.0)).unwrap();
        let mut img = solid([10, 20, 30]);
        img.put_pixel(1, 1, Px([250, 240, 230]));
        assert_eq!(pre.process(img.clone()), img);
    }

    #[test]
    fn test_contrast_stretches_around_mean() {
        let pre = Preprocessor::new(PreprocessOptions::new().contrast(2.0)).unwrap();
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Px([100, 100, 100]));
        img.put_pixel(1, 0, Px([140, 140, 140]));
        let out = pre.process(img);
        // Mean luma is 120.
        assert_eq!(out.get_pixel(0, 0).0, [80, 80, 80]);
        assert_eq!(out.get_pixel(1, 0).0, [160, 160, 160]);
    }

    #[test]
    fn test_hue_rotation_leaves_grays() {
        let pre = Preprocessor::new(PreprocessOptions::new().hue_shift(90.0)).unwrap();
        let img = solid([128, 128, 128]);
        assert_eq!(pre.process(img.clone()), img);
    }

    #[test]
    fn test_hue_rotation_moves_red_toward_green() {
        let pre = Preprocessor::new(PreprocessOptions::new().hue_shift(120.0)).unwrap();
        let out = pre.process(solid([255, 0, 0]));
        let [r, g, b] = out.get_pixel(0, 0).0;
        assert!(g > r && g > b, "got ({r},{g},{b})");
    }

    #[test]
    fn test_posterize_limits_colors() {
        let pre = Preprocessor::new(PreprocessOptions::new().posterize_colors(2)).unwrap();
        let img = RgbImage::from_fn(16, 16, |x, y| Px([(x * 16) as u8, (y * 16) as u8, 0]));
        let out = pre.process(img);
        let distinct: std::collections::HashSet<_> = out.pixels().map(|p| p.0).collect();
        assert!(distinct.len() <= 2);
    }
}
