//! Domain-critical regression tests for sc2-quantize.
//!
//! These tests pin the hardware-facing guarantees of the converter: buffer
//! sizes, the two-colors-per-run rule as it appears in the encoded tables,
//! and the exact bytes of well-known inputs.

#[cfg(test)]
mod domain_tests {
    use image::{Rgb as Px, RgbImage};
    use pretty_assertions::assert_eq;

    use crate::api::{ConvertError, ConvertOptions, Sc2Converter};
    use crate::block::{enforce_block_constraint, EightDotMode};
    use crate::color::Rgb;
    use crate::dither::{build_candidates, PixelClassifier};
    use crate::palette::{Palette, PaletteFamily};
    use crate::preprocess::OversizeMode;
    use crate::vram::{
        sc2_to_sc4, strip_header, COLOR_BASES, PATTERN_BASES, VRAM_SIZE,
    };

    const MODES: [EightDotMode; 3] = [EightDotMode::Fast, EightDotMode::Basic, EightDotMode::Best];

    /// A busy test card: gradients, hard edges and every palette color.
    fn test_card() -> RgbImage {
        let palette = Palette::default();
        RgbImage::from_fn(256, 192, |x, y| {
            if y < 64 {
                Px([x as u8, (y * 4) as u8, 255 - x as u8])
            } else if y < 128 {
                palette.color(((x / 5 + y / 3) % 15) as usize).into()
            } else {
                let v = ((x ^ y) * 3) as u8;
                Px([v, v.wrapping_mul(7), 255 - v])
            }
        })
    }

    fn converter(options: ConvertOptions) -> Sc2Converter {
        Sc2Converter::new(options).unwrap()
    }

    // ========================================================================
    // Output sizes
    // ========================================================================

    /// If this breaks, it means: a table was written out of bounds or the
    /// header is applied twice / not at all.
    #[test]
    fn test_output_lengths_for_all_modes() {
        let image = test_card();
        for mode in MODES {
            for header in [true, false] {
                let conv = converter(ConvertOptions::new().eightdot_mode(mode).include_header(header));
                let expected = VRAM_SIZE + if header { 7 } else { 0 };
                assert_eq!(conv.to_sc2(&image).unwrap().len(), expected, "{mode:?} header={header}");
                assert_eq!(conv.to_sc4(&image).unwrap().len(), expected, "{mode:?} header={header}");
            }
        }
    }

    // ========================================================================
    // Two colors per run, as seen by the hardware
    // ========================================================================

    /// If this breaks, it means: the encoder or the enforcer lets a third
    /// color into an 8-pixel run. Checked on the encoded bytes, so a bug in
    /// either stage shows up.
    #[test]
    fn test_encoded_runs_use_at_most_two_colors() {
        let image = test_card();
        for mode in MODES {
            let conv = converter(ConvertOptions::new().eightdot_mode(mode).include_header(false));
            let vram = conv.to_sc2(&image).unwrap();

            for bank in 0..3 {
                for offset in 0..0x800 {
                    let pattern = vram[PATTERN_BASES[bank] + offset];
                    let color = vram[COLOR_BASES[bank] + offset];
                    let (fg, bg) = (color >> 4, color & 0x0F);
                    let mut used = Vec::new();
                    for bit in 0..8 {
                        let code = if pattern & (0x80 >> bit) != 0 { fg } else { bg };
                        if !used.contains(&code) {
                            used.push(code);
                        }
                    }
                    assert!(used.len() <= 2, "{mode:?} bank {bank} offset {offset:#x}");
                    assert!(!used.contains(&0), "code 0 must never be written");
                }
            }
        }
    }

    /// If this breaks, it means: the enforcer leaves work for a second pass,
    /// i.e. its reassignment does not settle on the chosen pair.
    #[test]
    fn test_enforcer_idempotent_on_real_grid() {
        let palette = Palette::default();
        let image = test_card();
        for mode in MODES {
            let mut classifier =
                PixelClassifier::new(build_candidates(&palette, true), &palette, false);
            let mut grid = classifier.classify(&image);
            let selector = mode.selector().unwrap();

            enforce_block_constraint(&mut grid, &image, &palette, selector.as_ref());
            let once = grid.clone();
            enforce_block_constraint(&mut grid, &image, &palette, selector.as_ref());
            assert_eq!(grid, once, "{mode:?}");
        }
    }

    // ========================================================================
    // Known byte patterns
    // ========================================================================

    /// If this breaks, it means: the fg/bg nibble order or the "bit set =
    /// higher index" rule changed.
    #[test]
    fn test_solid_black_bytes_for_every_mode() {
        let image = RgbImage::from_pixel(256, 192, Px([0, 0, 0]));
        for mode in MODES {
            let vram = converter(ConvertOptions::new().eightdot_mode(mode).include_header(false))
                .to_sc2(&image)
                .unwrap();
            assert!(vram[0x0000..0x1800].iter().all(|&b| b == 0xFF), "{mode:?}");
            assert!(vram[0x2000..0x3800].iter().all(|&b| b == 0x11), "{mode:?}");
        }
    }

    /// If this breaks, it means: flat single-color input is no longer
    /// independent of the 8-dot strategy, so a strategy touches compliant
    /// runs.
    #[test]
    fn test_flat_color_identical_across_modes() {
        for color in [[62, 184, 73], [90, 90, 90], [250, 10, 200]] {
            let image = RgbImage::from_pixel(256, 192, Px(color));
            let outputs: Vec<Vec<u8>> = MODES
                .iter()
                .map(|&mode| {
                    converter(ConvertOptions::new().eightdot_mode(mode).dither(false))
                        .to_sc2(&image)
                        .unwrap()
                })
                .collect();
            assert_eq!(outputs[0], outputs[1], "{color:?}");
            assert_eq!(outputs[1], outputs[2], "{color:?}");
        }
    }

    // ========================================================================
    // Screen 4 remap
    // ========================================================================

    /// If this breaks, it means: the remap moved or clobbered one of the
    /// tables both screen modes share.
    #[test]
    fn test_sc4_preserves_shared_tables() {
        let conv = converter(ConvertOptions::new());
        let sc2 = conv.to_sc2(&test_card()).unwrap();
        let sc4 = sc2_to_sc4(&sc2, conv.palette(), true).unwrap();

        let (a, b) = (strip_header(&sc2).unwrap(), strip_header(&sc4).unwrap());
        for range in [0x0000..0x1800, 0x1800..0x1B00, 0x2000..0x3800, 0x3800..0x4000] {
            assert_eq!(&a[range.clone()], &b[range.clone()], "{range:x?}");
        }
    }

    /// If this breaks, it means: `to_sc4` and the standalone remap disagree,
    /// e.g. one ignores palette overrides.
    #[test]
    fn test_to_sc4_matches_remap_with_overrides() {
        let options = ConvertOptions::new()
            .msx2_palette(true)
            .palette_override(2, Rgb::new(0, 255, 0));
        let conv = converter(options);
        let image = test_card();

        let direct = conv.to_sc4(&image).unwrap();
        let remapped = sc2_to_sc4(&conv.to_sc2(&image).unwrap(), conv.palette(), true).unwrap();
        assert_eq!(direct, remapped);
        // Code 2 packed as B=0, R=0, G=7.
        assert_eq!(&direct[7 + 0x1B84..7 + 0x1B86], &[0x00, 0x07]);
    }

    // ========================================================================
    // Palette overrides and previews
    // ========================================================================

    /// If this breaks, it means: the preview renders with the base palette
    /// instead of the palette in effect.
    #[test]
    fn test_override_reaches_preview() {
        let conv = converter(ConvertOptions::new().palette_override(5, Rgb::new(255, 0, 0)));
        let image = RgbImage::from_pixel(256, 192, Px([255, 0, 0]));
        let preview = conv.preview(&image).unwrap();
        assert!(preview.pixels().all(|p| p.0 == [255, 0, 0]));
    }

    /// If this breaks, it means: the preview no longer reflects the encoded
    /// tables and may show colors the hardware cannot display together.
    #[test]
    fn test_preview_matches_hardware_constraint() {
        let conv = converter(ConvertOptions::new().eightdot_mode(EightDotMode::Fast));
        let preview = conv.preview(&test_card()).unwrap();
        for y in 0..192 {
            for bx in 0..32 {
                let mut seen: Vec<[u8; 3]> = Vec::new();
                for x in bx * 8..bx * 8 + 8 {
                    let p = preview.get_pixel(x, y).0;
                    if !seen.contains(&p) {
                        seen.push(p);
                    }
                }
                assert!(seen.len() <= 2, "run ({bx},{y})");
            }
        }
    }

    /// If this breaks, it means: MSX2 and MSX1 palettes were swapped.
    #[test]
    fn test_msx2_palette_selected() {
        let conv = converter(ConvertOptions::new().msx2_palette(true));
        assert_eq!(conv.palette(), &Palette::base(PaletteFamily::Msx2));
    }

    // ========================================================================
    // Fail-fast behavior
    // ========================================================================

    /// If this breaks, it means: invalid tone parameters are accepted and
    /// silently produce output.
    #[test]
    fn test_invalid_gamma_produces_no_output() {
        for gamma in [0.0, -0.5] {
            assert_eq!(
                Sc2Converter::new(ConvertOptions::new().gamma(gamma)).unwrap_err(),
                ConvertError::InvalidGamma(gamma)
            );
        }
    }

    #[test]
    fn test_oversize_policy() {
        let image = RgbImage::from_pixel(320, 240, Px([10, 10, 10]));
        assert!(matches!(
            converter(ConvertOptions::new()).to_sc2(&image),
            Err(ConvertError::Oversize { width: 320, height: 240 })
        ));
        let vram = converter(ConvertOptions::new().oversize_mode(OversizeMode::Shrink))
            .to_sc2(&image)
            .unwrap();
        assert_eq!(vram.len(), VRAM_SIZE + 7);
    }
}
