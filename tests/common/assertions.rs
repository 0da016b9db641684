//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// BSAVE header in front of a VRAM dump.
pub const HEADER: [u8; 7] = [0xFE, 0x00, 0x00, 0xFF, 0x3F, 0x00, 0x00];

/// Assert `data` is a headed 16 KiB VRAM dump.
pub fn assert_headed_vram(data: &[u8]) {
    assert_eq!(data.len(), 16384 + 7, "unexpected VRAM length");
    assert_eq!(&data[..7], &HEADER, "missing BSAVE header");
}

/// Assert `data` is a bare 16 KiB VRAM dump.
pub fn assert_bare_vram(data: &[u8]) {
    assert_eq!(data.len(), 16384, "unexpected VRAM length");
}

/// Assert `data` starts with the PNG signature.
pub fn assert_png(data: &[u8]) {
    assert!(
        data.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG, got {} bytes starting with {:?}",
        data.len(),
        &data[..8.min(data.len())]
    );
}
