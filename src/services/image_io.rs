//! Reading source images and writing PNG previews.

use std::io::Cursor;
use std::path::Path;

use image::RgbImage;
use sc2_quantize::{IndexGrid, Palette};

use crate::error::CliError;

/// Decode any supported image file to 8-bit RGB, dropping alpha.
pub fn load_rgb(path: &Path) -> Result<RgbImage, CliError> {
    let image = image::open(path).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgb8())
}

/// Encode an index grid as a 4-bit indexed PNG with `palette` as PLTE.
pub fn encode_indexed_png(grid: &IndexGrid, palette: &Palette) -> Result<Vec<u8>, CliError> {
    let plte: Vec<u8> = palette.colors().iter().flat_map(|c| c.to_bytes()).collect();
    let packed = pack_nbits(grid.indices(), grid.width() as u32, 4);

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, grid.width() as u32, grid.height() as u32);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Four);
        encoder.set_compression(png::Compression::Best);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CliError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| CliError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|e| CliError::io(path, e))
}

/// Write `data`, creating parent directories as needed.
pub fn write_bytes(path: &Path, data: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
    }
    std::fs::write(path, data).map_err(|e| CliError::io(path, e))
}
