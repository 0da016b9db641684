//! VRAM layouts of Screen 2 and Screen 4.
//!
//! Both modes share a 16 KiB layout for the pattern, name and color tables.
//! They differ only in the sprite tables and in Screen 4's palette table:
//!
//! | Range | Screen 2 | Screen 4 |
//! |-------|----------|----------|
//! | `0x0000-0x17FF` | pattern generator | pattern generator |
//! | `0x1800-0x1AFF` | name table | name table |
//! | `0x1B00-0x1B7F` | sprite attributes | (unused) |
//! | `0x1B80-0x1B9F` | (unused) | palette table |
//! | `0x1C00-0x1DFF` | (unused) | sprite colors |
//! | `0x1E00-0x1E7F` | (unused) | sprite attributes |
//! | `0x2000-0x37FF` | color table | color table |
//! | `0x3800-0x3FFF` | sprite patterns | sprite patterns |
//!
//! Files may carry a 7-byte BSAVE header in front of the dump.

mod decode;
mod encoder;
mod sc4;

pub use decode::{decode_sc2, decode_sc4};
pub use encoder::encode_sc2;
pub use sc4::{decode_palette_table, encode_palette_table, sc2_to_sc4};

use crate::api::ConvertError;

/// Size of a raw VRAM dump.
pub const VRAM_SIZE: usize = 0x4000;

/// BSAVE header: type byte, start 0x0000, end 0x3FFF, exec 0x0000.
pub const HEADER: [u8; 7] = [0xFE, 0x00, 0x00, 0xFF, 0x3F, 0x00, 0x00];

/// Pattern generator bank bases, one per third of the screen.
pub const PATTERN_BASES: [usize; 3] = [0x0000, 0x0800, 0x1000];
/// Color table bank bases.
pub const COLOR_BASES: [usize; 3] = [0x2000, 0x2800, 0x3000];
pub const NAME_TABLE: usize = 0x1800;
pub const NAME_TABLE_END: usize = 0x1B00;
pub const SC2_SPRITE_ATTRIBUTES: usize = 0x1B00;
pub const SC4_PALETTE_TABLE: usize = 0x1B80;
pub const SC4_SPRITE_COLORS: usize = 0x1C00;
pub const SC4_SPRITE_ATTRIBUTES: usize = 0x1E00;
pub const SPRITE_ATTRIBUTES_LEN: usize = 0x80;
pub const COLOR_TABLE: usize = 0x2000;

/// Tiles per row and tile rows per screen.
pub const TILE_COLUMNS: usize = 32;
pub const TILE_ROWS: usize = 24;

/// Return the bare 16 KiB dump, dropping a header if present.
///
/// # Errors
///
/// - [`ConvertError::InvalidVramLength`] for any length other than 16384 or
///   16391
/// - [`ConvertError::InvalidHeader`] if 16391 bytes do not start with
///   [`HEADER`]
pub fn strip_header(data: &[u8]) -> Result<&[u8], ConvertError> {
    match data.len() {
        VRAM_SIZE => Ok(data),
        n if n == VRAM_SIZE + HEADER.len() => {
            if data.starts_with(&HEADER) {
                Ok(&data[HEADER.len()..])
            } else {
                Err(ConvertError::InvalidHeader)
            }
        }
        n => Err(ConvertError::InvalidVramLength(n)),
    }
}

/// Prepend [`HEADER`] to a bare dump when requested.
pub fn with_header(vram: Vec<u8>, include_header: bool) -> Vec<u8> {
    if !include_header {
        return vram;
    }
    let mut out = Vec::with_capacity(HEADER.len() + vram.len());
    out.extend_from_slice(&HEADER);
    out.extend_from_slice(&vram);
    out
}
