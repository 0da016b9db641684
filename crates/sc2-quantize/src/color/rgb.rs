//! 8-bit RGB color type.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color as three 8-bit channels.
///
/// This is the only color representation in the crate: palette entries,
/// dither mixes and source pixels are all `Rgb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Black, the color of palette index 0.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// The square root is never taken: ordering is all that matters for
    /// nearest-color searches and the integer result makes ties exact.
    #[inline]
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Perceived luminance (`0.299R + 0.587G + 0.114B`), 0.0..=255.0.
    #[inline]
    pub fn luminance(self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    /// Even 50/50 blend of two colors, rounded half up per channel.
    #[inline]
    pub fn blend_half(self, other: Rgb) -> Rgb {
        let mix = |a: u8, b: u8| ((a as u16 + b as u16 + 1) / 2) as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// 75% `self` / 25% `other` blend, rounded half up per channel.
    #[inline]
    pub fn blend_three_one(self, other: Rgb) -> Rgb {
        let mix = |a: u8, b: u8| ((3 * a as u16 + b as u16 + 2) / 4) as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from_bytes(pixel.0)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        image::Rgb(color.to_bytes())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from text.
    ///
    /// Accepted forms:
    /// - `R,G,B` - three decimal components, e.g. `255,128,0`
    /// - `#RRGGBB` / `RRGGBB` - six hex digits
    ///
    /// Whitespace around the whole value and around each component is ignored.
    ///
    /// ```
    /// use sc2_quantize::Rgb;
    ///
    /// assert_eq!("#FF8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
    /// assert_eq!("255, 128, 0".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(ParseColorError::ComponentCount(parts.len()));
            }
            let mut channels = [0u8; 3];
            for (channel, part) in channels.iter_mut().zip(&parts) {
                let value: u32 = part
                    .parse()
                    .map_err(|_| ParseColorError::InvalidComponent(part.to_string()))?;
                *channel =
                    u8::try_from(value).map_err(|_| ParseColorError::OutOfRange(value))?;
            }
            return Ok(Self::from_bytes(channels));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError::ComponentCount(hex.len().div_ceil(2)));
        }
        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range.clone()], 16)
                .map_err(|_| ParseColorError::InvalidComponent(hex[range].to_string()))
        };
        Ok(Self::new(component(0..2)?, component(2..4)?, component(4..6)?))
    }
}
