//! 8-bit HSV conversion for hue rotation.
//!
//! All three channels are stored as bytes, hue included (0..=255 covers one
//! full turn). This is the representation common image libraries use for
//! their "HSV" mode, so a rotation here matches what users see elsewhere.

use crate::color::Rgb;

/// Convert one color to 8-bit `[h, s, v]`.
pub(crate) fn rgb_to_hsv(color: Rgb) -> [u8; 3] {
    let Rgb { r, g, b } = color;
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    if maxc == minc {
        return [0, 0, maxc];
    }

    let span = (maxc - minc) as f32;
    let s = span / maxc as f32;
    let rc = (maxc - r) as f32 / span;
    let gc = (maxc - g) as f32 / span;
    let bc = (maxc - b) as f32 / span;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let h = (h / 6.0 + 1.0).rem_euclid(1.0);

    [to_byte(h * 255.0), to_byte(s * 255.0), maxc]
}

/// Convert 8-bit `[h, s, v]` back to RGB.
pub(crate) fn hsv_to_rgb(hsv: [u8; 3]) -> Rgb {
    let [h, s, v] = hsv;
    if s == 0 {
        return Rgb::new(v, v, v);
    }

    let scaled = h as f32 * 6.0 / 255.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let fs = s as f32 / 255.0;
    let vf = v as f32;
    let p = clamp_round(vf * (1.0 - fs));
    let q = clamp_round(vf * (1.0 - fs * f));
    let t = clamp_round(vf * (1.0 - fs * (1.0 - f)));

    match sector as u32 % 6 {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

/// Build the 256-entry hue rotation table for a shift in degrees.
pub(crate) fn hue_lut(degrees: f32) -> [u8; 256] {
    let steps = (degrees * 255.0 / 360.0).round() as i32;
    let mut lut = [0u8; 256];
    for (h, slot) in lut.iter_mut().enumerate() {
        *slot = (h as i32 + steps).rem_euclid(256) as u8;
    }
    lut
}

#[inline]
fn to_byte(value: f32) -> u8 {
    (value as i32).clamp(0, 255) as u8
}

#[inline]
fn clamp_round(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
