//! Which palette pairs may be mixed in a dither pattern.
//!
//! Hue-complementary pairs (greens against reds and magenta, blues against
//! yellows, cyan against reds) produce visibly noisy checkerboards on real
//! hardware, so they never become blend candidates.

use crate::palette::PALETTE_LEN;

/// Curated table for indices 0..=12 (`1` = allowed).
///
/// Gray (13) and white (14) are not listed and mix with everything.
#[rustfmt::skip]
const CURATED: [[u8; 13]; 13] = [
    //  0  1  2  3  4  5  6  7  8  9 10 11 12
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], // 0 black
    [1, 1, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0], // 1 medium green
    [1, 1, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0], // 2 light green
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1], // 3 dark blue
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1], // 4 light blue
    [1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1], // 5 dark red
    [1, 1, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 1], // 6 cyan
    [1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1], // 7 medium red
    [1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1], // 8 light red
    [1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1], // 9 dark yellow
    [1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1], // 10 light yellow
    [1, 1, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0], // 11 dark green
    [1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1], // 12 magenta
];

const fn expand(curated: &[[u8; 13]; 13]) -> [[bool; PALETTE_LEN]; PALETTE_LEN] {
    let mut out = [[true; PALETTE_LEN]; PALETTE_LEN];
    let mut a = 0;
    while a < 13 {
        let mut b = 0;
        while b < 13 {
            out[a][b] = curated[a][b] != 0 || a == b || a == 0 || b == 0;
            b += 1;
        }
        a += 1;
    }
    out
}

/// Full 15x15 allow matrix, symmetric.
pub static PAIR_ALLOW: [[bool; PALETTE_LEN]; PALETTE_LEN] = expand(&CURATED);

/// True if indices `a` and `b` may be blended.
#[inline]
pub fn pair_allowed(a: usize, b: usize) -> bool {
    PAIR_ALLOW[a][b]
}
