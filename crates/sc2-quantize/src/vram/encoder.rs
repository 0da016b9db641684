//! Index grid to Screen 2 pattern, name and color tables.

use crate::output::IndexGrid;

use super::{with_header, COLOR_BASES, NAME_TABLE, PATTERN_BASES, TILE_COLUMNS, TILE_ROWS, VRAM_SIZE};

/// Pattern/color pair for one 8-pixel scan-line of a tile.
///
/// Indices are 0-based; hardware codes are `index + 1`. A set pattern bit
/// (MSB = leftmost pixel) selects the foreground, which is the higher of the
/// two indices.
fn encode_line(pixels: &[u8; 8]) -> (u8, u8) {
    let lo = pixels.iter().copied().min().unwrap_or(0);
    let hi = pixels.iter().copied().max().unwrap_or(0);
    let pattern = pixels
        .iter()
        .fold(0u8, |acc, &p| (acc << 1) | u8::from(p == hi));
    let color = ((hi + 1) << 4) | (lo + 1);
    (pattern, color)
}

/// Encode `grid` into a Screen 2 VRAM image.
///
/// The grid is expected to be 256x192 with at most two indices per 8-pixel
/// run. Scan-lines past the grid's height are written as pattern `0x00`
/// with color `0x11`; pixels past its width read as index 0. Each third of
/// the screen uses its own pattern and color bank, and the name table points
/// tile `(row, col)` at pattern `(row % 8) * 32 + col` of its bank.
pub fn encode_sc2(grid: &IndexGrid, include_header: bool) -> Vec<u8> {
    let mut vram = vec![0u8; VRAM_SIZE];

    for tile_row in 0..TILE_ROWS {
        let bank = tile_row / 8;
        let pattern_base = PATTERN_BASES[bank];
        let color_base = COLOR_BASES[bank];

        for tile_col in 0..TILE_COLUMNS {
            let name = (tile_row % 8) * TILE_COLUMNS + tile_col;
            vram[NAME_TABLE + tile_row * TILE_COLUMNS + tile_col] = name as u8;

            for line in 0..8 {
                let y = tile_row * 8 + line;
                let (pattern, color) = if y < grid.height() {
                    let mut pixels = [0u8; 8];
                    for (dx, slot) in pixels.iter_mut().enumerate() {
                        let x = tile_col * 8 + dx;
                        if x < grid.width() {
                            *slot = grid.get(x, y);
                        }
                    }
                    encode_line(&pixels)
                } else {
                    (0x00, 0x11)
                };
                let offset = name * 8 + line;
                vram[pattern_base + offset] = pattern;
                vram[color_base + offset] = color;
            }
        }
    }

    tracing::debug!(stage = "encode", include_header, "Encoded Screen 2 tables");
    with_header(vram, include_header)
}
