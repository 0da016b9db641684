//! Reading pixels back out of a VRAM dump.

use crate::api::ConvertError;
use crate::output::IndexGrid;
use crate::palette::{Palette, PaletteFamily};
use crate::preprocess::{CANVAS_HEIGHT, CANVAS_WIDTH};

use super::sc4::{decode_palette_table, PALETTE_TABLE_LEN};
use super::{strip_header, COLOR_BASES, NAME_TABLE, PATTERN_BASES, SC4_PALETTE_TABLE, TILE_COLUMNS};

/// Decode the pattern, name and color tables into a 256x192 index grid.
///
/// Color code 0 (transparent) decodes as index 0, the same as code 1.
///
/// # Errors
///
/// Fails like [`strip_header`] on malformed input.
pub fn decode_sc2(data: &[u8]) -> Result<IndexGrid, ConvertError> {
    let vram = strip_header(data)?;
    let (width, height) = (CANVAS_WIDTH as usize, CANVAS_HEIGHT as usize);
    let mut grid = IndexGrid::filled(0, width, height);

    for y in 0..height {
        let tile_row = y / 8;
        let bank = tile_row / 8;
        for x in 0..width {
            let name = vram[NAME_TABLE + tile_row * TILE_COLUMNS + x / 8] as usize;
            let offset = name * 8 + y % 8;
            let pattern = vram[PATTERN_BASES[bank] + offset];
            let color = vram[COLOR_BASES[bank] + offset];
            let code = if pattern & (0x80 >> (x % 8)) != 0 {
                color >> 4
            } else {
                color & 0x0F
            };
            grid.set(x, y, code.saturating_sub(1));
        }
    }
    Ok(grid)
}

/// Decode a Screen 4 dump together with its embedded palette.
///
/// # Errors
///
/// Fails like [`strip_header`] on malformed input.
pub fn decode_sc4(data: &[u8]) -> Result<(IndexGrid, Palette), ConvertError> {
    let grid = decode_sc2(data)?;
    let vram = strip_header(data)?;
    let table = &vram[SC4_PALETTE_TABLE..SC4_PALETTE_TABLE + PALETTE_TABLE_LEN];
    let palette = match decode_palette_table(table) {
        Some(colors) => Palette::from_colors(PaletteFamily::Msx2, colors),
        None => Palette::base(PaletteFamily::Msx2),
    };
    Ok((grid, palette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vram::{encode_sc2, sc2_to_sc4};
    use pretty_assertions::assert_eq;

    fn pattern_grid() -> IndexGrid {
        let mut grid = IndexGrid::filled(0, 256, 192);
        for y in 0..192 {
            for x in 0..256 {
                let index = if (x / 8 + y) % 3 == 0 { 14 } else { (y / 8 % 14) as u8 };
                grid.set(x, y, index);
            }
        }
        grid
    }

    #[test]
    fn test_decode_reverses_encode() {
        let grid = pattern_grid();
        let vram = encode_sc2(&grid, true);
        assert_eq!(decode_sc2(&vram).unwrap(), grid);
    }

    #[test]
    fn test_decode_sc4_reads_palette() {
        let grid = pattern_grid();
        let palette = Palette::base(PaletteFamily::Msx2);
        let sc4 = sc2_to_sc4(&encode_sc2(&grid, false), &palette, false).unwrap();
        let (decoded, read_back) = decode_sc4(&sc4).unwrap();
        assert_eq!(decoded, grid);
        assert_eq!(read_back.color(14), palette.color(14));
        assert_eq!(read_back.family(), PaletteFamily::Msx2);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(decode_sc2(&[1, 2, 3]).is_err());
    }
}
