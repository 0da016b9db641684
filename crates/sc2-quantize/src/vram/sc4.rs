//! Screen 2 to Screen 4 remapping.

use crate::api::ConvertError;
use crate::color::Rgb;
use crate::palette::{Palette, PALETTE_LEN};

use super::{
    strip_header, with_header, COLOR_TABLE, NAME_TABLE_END, SC2_SPRITE_ATTRIBUTES,
    SC4_PALETTE_TABLE, SC4_SPRITE_ATTRIBUTES, SPRITE_ATTRIBUTES_LEN, VRAM_SIZE,
};

/// Bytes in the palette table: 16 codes, 2 bytes each.
pub const PALETTE_TABLE_LEN: usize = 32;

#[inline]
fn to_3bit(c: u8) -> u8 {
    ((c as f32 * 7.0 / 255.0).round() as i32).clamp(0, 7) as u8
}

#[inline]
fn from_3bit(c: u8) -> u8 {
    ((c & 0x07) as f32 * 255.0 / 7.0).round() as u8
}

/// Pack `palette` into the 9-bit palette register format.
///
/// Code 0 (transparent) is `00 00`. Codes 1..=15 are
/// `[(B << 4) | R, G]` with 3-bit channels.
pub fn encode_palette_table(palette: &Palette) -> [u8; PALETTE_TABLE_LEN] {
    let mut table = [0u8; PALETTE_TABLE_LEN];
    for (i, color) in palette.colors().iter().enumerate() {
        let at = (i + 1) * 2;
        table[at] = (to_3bit(color.b) << 4) | to_3bit(color.r);
        table[at + 1] = to_3bit(color.g);
    }
    table
}

/// Unpack codes 1..=15 of a palette table, expanding channels to 8 bits.
///
/// Returns `None` if `table` is shorter than [`PALETTE_TABLE_LEN`].
pub fn decode_palette_table(table: &[u8]) -> Option<[Rgb; PALETTE_LEN]> {
    if table.len() < PALETTE_TABLE_LEN {
        return None;
    }
    let mut colors = [Rgb::BLACK; PALETTE_LEN];
    for (i, color) in colors.iter_mut().enumerate() {
        let at = (i + 1) * 2;
        let (rb, g) = (table[at], table[at + 1]);
        *color = Rgb::new(from_3bit(rb), from_3bit(g), from_3bit(rb >> 4));
    }
    Some(colors)
}

/// Remap a Screen 2 dump to Screen 4.
///
/// `data` may carry the BSAVE header. Pattern, name and color tables are
/// copied unchanged, sprite attributes move to the Screen 4 location and
/// the palette table is filled from `palette`. Everything else is zero.
///
/// # Errors
///
/// Fails with [`ConvertError::InvalidVramLength`] or
/// [`ConvertError::InvalidHeader`] when `data` is not a Screen 2 dump.
pub fn sc2_to_sc4(
    data: &[u8],
    palette: &Palette,
    include_header: bool,
) -> Result<Vec<u8>, ConvertError> {
    let sc2 = strip_header(data)?;
    let mut sc4 = vec![0u8; VRAM_SIZE];

    sc4[..NAME_TABLE_END].copy_from_slice(&sc2[..NAME_TABLE_END]);
    sc4[COLOR_TABLE..].copy_from_slice(&sc2[COLOR_TABLE..]);

    let attrs = SC2_SPRITE_ATTRIBUTES..SC2_SPRITE_ATTRIBUTES + SPRITE_ATTRIBUTES_LEN;
    sc4[SC4_SPRITE_ATTRIBUTES..SC4_SPRITE_ATTRIBUTES + SPRITE_ATTRIBUTES_LEN]
        .copy_from_slice(&sc2[attrs]);

    sc4[SC4_PALETTE_TABLE..SC4_PALETTE_TABLE + PALETTE_TABLE_LEN]
        .copy_from_slice(&encode_palette_table(palette));

    tracing::debug!(stage = "sc4", include_header, "Remapped Screen 2 to Screen 4");
    Ok(with_header(sc4, include_header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteFamily;
    use crate::vram::{HEADER, SC4_SPRITE_COLORS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_table_packing() {
        let table = encode_palette_table(&Palette::base(PaletteFamily::Msx2));
        assert_eq!(&table[0..2], &[0x00, 0x00]);
        // Code 1 black.
        assert_eq!(&table[2..4], &[0x00, 0x00]);
        // Code 4 #2222FF: r=1, g=1, b=7.
        assert_eq!(&table[8..10], &[0x71, 0x01]);
        // Code 15 white.
        assert_eq!(&table[30..32], &[0x77, 0x07]);
    }

    #[test]
    fn test_palette_table_decode() {
        let palette = Palette::base(PaletteFamily::Msx2);
        let colors = decode_palette_table(&encode_palette_table(&palette)).unwrap();
        assert_eq!(colors[0], Rgb::BLACK);
        assert_eq!(colors[14], Rgb::new(255, 255, 255));
        assert_eq!(colors[3], Rgb::new(36, 36, 255));
        assert!(decode_palette_table(&[0u8; 8]).is_none());
    }

    #[test]
    fn test_layout_preserved() {
        let sc2: Vec<u8> = (0..VRAM_SIZE).map(|i| (i % 251) as u8).collect();
        let sc4 = sc2_to_sc4(&sc2, &Palette::default(), false).unwrap();

        assert_eq!(sc4.len(), VRAM_SIZE);
        assert_eq!(&sc4[0x0000..0x1B00], &sc2[0x0000..0x1B00]);
        assert_eq!(&sc4[0x2000..0x4000], &sc2[0x2000..0x4000]);
        assert_eq!(&sc4[0x1E00..0x1E80], &sc2[0x1B00..0x1B80]);
        assert!(sc4[SC4_SPRITE_COLORS..0x1E00].iter().all(|&b| b == 0));
        assert!(sc4[0x1BA0..0x1C00].iter().all(|&b| b == 0));
        assert!(sc4[0x1E80..0x2000].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_header_handling() {
        let mut sc2 = HEADER.to_vec();
        sc2.extend(vec![0u8; VRAM_SIZE]);
        let with = sc2_to_sc4(&sc2, &Palette::default(), true).unwrap();
        assert_eq!(with.len(), VRAM_SIZE + 7);
        assert_eq!(&with[..7], &HEADER);

        let without = sc2_to_sc4(&sc2, &Palette::default(), false).unwrap();
        assert_eq!(without.len(), VRAM_SIZE);
    }

    #[test]
    fn test_rejects_bad_length() {
        assert_eq!(
            sc2_to_sc4(&[0u8; 10], &Palette::default(), true),
            Err(ConvertError::InvalidVramLength(10))
        );
    }
}
