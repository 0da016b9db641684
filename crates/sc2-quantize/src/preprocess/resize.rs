//! Canvas fitting to the fixed 256x192 screen.
//!
//! Oversized images are shrunk (Lanczos3, aspect preserved) or center-cropped;
//! undersized images are centered on a solid background. Shrinking can leave
//! one axis short, so the undersize rule always runs after the oversize rule.
//! Cropping always yields the full canvas.

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::api::ConvertError;
use crate::color::Rgb;

/// Screen width in pixels.
pub const CANVAS_WIDTH: u32 = 256;
/// Screen height in pixels.
pub const CANVAS_HEIGHT: u32 = 192;

/// What to do with images larger than the canvas on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OversizeMode {
    /// Reject the image.
    #[default]
    Error,
    /// Downscale preserving aspect ratio until both axes fit.
    Shrink,
    /// Cut a 256x192 window, centered on each oversized axis and anchored
    /// at the origin of a short one. Area outside the source is black.
    Crop,
}

/// What to do with images smaller than the canvas on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndersizeMode {
    /// Reject the image.
    #[default]
    Error,
    /// Center the image on a canvas filled with the background color.
    Pad,
}

/// Bring `image` to exactly [`CANVAS_WIDTH`] x [`CANVAS_HEIGHT`].
///
/// # Errors
///
/// - [`ConvertError::Oversize`] when too large and `oversize` is `Error`
/// - [`ConvertError::Undersize`] when too small and `undersize` is `Error`
/// - [`ConvertError::CanvasMismatch`] if the result is still the wrong size
pub fn fit_canvas(
    image: RgbImage,
    oversize: OversizeMode,
    undersize: UndersizeMode,
    background: Rgb,
) -> Result<RgbImage, ConvertError> {
    let (mut width, mut height) = image.dimensions();
    if (width, height) == (CANVAS_WIDTH, CANVAS_HEIGHT) {
        return Ok(image);
    }

    let mut image = image;
    if width > CANVAS_WIDTH || height > CANVAS_HEIGHT {
        image = match oversize {
            OversizeMode::Error => return Err(ConvertError::Oversize { width, height }),
            OversizeMode::Shrink => {
                let ratio = f64::min(
                    CANVAS_WIDTH as f64 / width as f64,
                    CANVAS_HEIGHT as f64 / height as f64,
                );
                let new_w = ((width as f64 * ratio) as u32).max(1);
                let new_h = ((height as f64 * ratio) as u32).max(1);
                tracing::debug!(stage = "resize", from_w = width, from_h = height, new_w, new_h, "Shrinking");
                imageops::resize(&image, new_w, new_h, FilterType::Lanczos3)
            }
            OversizeMode::Crop => {
                let left = width.saturating_sub(CANVAS_WIDTH) / 2;
                let top = height.saturating_sub(CANVAS_HEIGHT) / 2;
                tracing::debug!(stage = "resize", left, top, "Cropping");
                let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgb::BLACK.into());
                imageops::replace(&mut canvas, &image, -(left as i64), -(top as i64));
                canvas
            }
        };
        (width, height) = image.dimensions();
    }

    if width < CANVAS_WIDTH || height < CANVAS_HEIGHT {
        image = match undersize {
            UndersizeMode::Error => return Err(ConvertError::Undersize { width, height }),
            UndersizeMode::Pad => {
                let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, background.into());
                let x = (CANVAS_WIDTH - width) / 2;
                let y = (CANVAS_HEIGHT - height) / 2;
                tracing::debug!(stage = "resize", x, y, "Padding");
                imageops::replace(&mut canvas, &image, x as i64, y as i64);
                canvas
            }
        };
    }

    let (width, height) = image.dimensions();
    if (width, height) != (CANVAS_WIDTH, CANVAS_HEIGHT) {
        return Err(ConvertError::CanvasMismatch { width, height });
    }
    Ok(image)
}
