//! The fixed 15-entry hardware palette.
//!
//! Screen 2 can show 15 colors plus "transparent" (color code 0). Internally
//! the converter indexes the 15 visible colors 0..=14; the hardware color
//! code written into VRAM is always `index + 1`.

use std::collections::BTreeMap;

use super::error::PaletteError;
use crate::color::Rgb;

/// Number of visible colors in both hardware palettes.
pub const PALETTE_LEN: usize = 15;

/// TMS9918 (MSX1) colors, codes 1..=15.
pub const MSX1_COLORS: [Rgb; PALETTE_LEN] = [
    Rgb::new(0, 0, 0),
    Rgb::new(62, 184, 73),
    Rgb::new(116, 208, 125),
    Rgb::new(89, 85, 224),
    Rgb::new(128, 118, 241),
    Rgb::new(185, 94, 81),
    Rgb::new(101, 219, 239),
    Rgb::new(219, 101, 89),
    Rgb::new(255, 137, 125),
    Rgb::new(204, 195, 94),
    Rgb::new(222, 208, 135),
    Rgb::new(58, 162, 65),
    Rgb::new(183, 102, 181),
    Rgb::new(204, 204, 204),
    Rgb::new(255, 255, 255),
];

/// V9938 (MSX2) power-on palette, codes 1..=15.
pub const MSX2_COLORS: [Rgb; PALETTE_LEN] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x22, 0xDD, 0x22),
    Rgb::new(0x66, 0xFF, 0x66),
    Rgb::new(0x22, 0x22, 0xFF),
    Rgb::new(0x44, 0x66, 0xFF),
    Rgb::new(0xAA, 0x22, 0x22),
    Rgb::new(0x44, 0xDD, 0xFF),
    Rgb::new(0xFF, 0x22, 0x22),
    Rgb::new(0xFF, 0x66, 0x66),
    Rgb::new(0xDD, 0xDD, 0x22),
    Rgb::new(0xDD, 0xDD, 0x88),
    Rgb::new(0x22, 0x88, 0x22),
    Rgb::new(0xDD, 0x44, 0xAA),
    Rgb::new(0xAA, 0xAA, 0xAA),
    Rgb::new(0xFF, 0xFF, 0xFF),
];

/// Which hardware color family the base palette comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteFamily {
    /// TMS9918 fixed colors.
    #[default]
    Msx1,
    /// V9938 default palette registers.
    Msx2,
}

impl PaletteFamily {
    /// The family's base colors.
    pub fn colors(self) -> &'static [Rgb; PALETTE_LEN] {
        match self {
            PaletteFamily::Msx1 => &MSX1_COLORS,
            PaletteFamily::Msx2 => &MSX2_COLORS,
        }
    }
}

/// A 15-color palette with any per-code overrides applied.
///
/// The length is fixed by the type; overrides can only replace entries.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use sc2_quantize::{Palette, PaletteFamily, Rgb};
///
/// let mut overrides = BTreeMap::new();
/// overrides.insert(5, Rgb::new(255, 0, 0));
///
/// let palette = Palette::build(PaletteFamily::Msx1, &overrides).unwrap();
/// assert_eq!(palette.color(4), Rgb::new(255, 0, 0));
/// assert_eq!(palette.len(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    family: PaletteFamily,
    colors: [Rgb; PALETTE_LEN],
}

impl Palette {
    /// The unmodified base palette of a family.
    pub fn base(family: PaletteFamily) -> Self {
        Self {
            family,
            colors: *family.colors(),
        }
    }

    /// A palette with every entry given explicitly, e.g. read back from VRAM.
    pub fn from_colors(family: PaletteFamily, colors: [Rgb; PALETTE_LEN]) -> Self {
        Self { family, colors }
    }

    /// Build a palette from a family and 1-based overrides.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::OverrideOutOfRange`] if any override key is
    /// outside 1..=15. Nothing is applied in that case.
    pub fn build(
        family: PaletteFamily,
        overrides: &BTreeMap<u8, Rgb>,
    ) -> Result<Self, PaletteError> {
        let mut palette = Self::base(family);
        for (&code, &color) in overrides {
            palette = palette.with_override(code, color)?;
        }
        Ok(palette)
    }

    /// Replace the entry for 1-based color code `code`.
    pub fn with_override(mut self, code: u8, color: Rgb) -> Result<Self, PaletteError> {
        if !(1..=PALETTE_LEN as u8).contains(&code) {
            return Err(PaletteError::OverrideOutOfRange { index: code });
        }
        self.colors[code as usize - 1] = color;
        Ok(self)
    }

    /// Base family this palette was derived from.
    #[inline]
    pub fn family(&self) -> PaletteFamily {
        self.family
    }

    /// Always 15.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color at 0-based index `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All 15 colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb; PALETTE_LEN] {
        &self.colors
    }

    /// Index of the nearest palette color by squared RGB distance.
    ///
    /// Ties resolve to the lowest index.
    pub fn nearest_index(&self, color: Rgb) -> u8 {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_sq(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        best_idx as u8
    }

    /// Human-readable listing: `1: (0,0,0), 2: (62,184,73), ...`
    pub fn describe(&self) -> String {
        self.colors
            .iter()
            .enumerate()
            .map(|(idx, color)| format!("{}: {}", idx + 1, color))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::base(PaletteFamily::default())
    }
}
