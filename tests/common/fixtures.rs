//! Test fixtures: sample images and profiles written to scratch directories.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// A profile exercising most fields.
pub const SAMPLE_PROFILE: &str = r##"
format: sc4
suffix: _p
oversize: shrink
undersize: pad
background: 0,0,0
eightdot: fast
palette:
  15: "#F0F0F0"
"##;

/// Full-size image with horizontal color bands.
pub fn banded_image() -> RgbImage {
    RgbImage::from_fn(256, 192, |x, y| match y / 48 {
        0 => Rgb([0, 0, 0]),
        1 => Rgb([255, 255, 255]),
        2 => Rgb([(x % 256) as u8, 80, 160]),
        _ => Rgb([219, 101, 89]),
    })
}

pub fn solid_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Save `image` as `dir/name` and return the path.
pub fn write_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("write test png");
    path
}

/// Scratch directory with `a.png` and `b.png` plus a non-PNG file.
pub fn input_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_png(dir.path(), "b.png", &banded_image());
    write_png(dir.path(), "a.png", &solid_image(256, 192, [0, 0, 0]));
    std::fs::write(dir.path().join("notes.txt"), "not an image").expect("write txt");
    dir
}
