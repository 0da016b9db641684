use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use sc2_quantize::{ConvertOptions, Rgb};

use super::modes::{EightDot, OutputFormat, Oversize, Undersize};
use crate::error::CliError;

/// Conversion settings loaded from a YAML profile.
///
/// Every field is optional; unset fields fall back to the converter
/// defaults. Command-line flags are turned into a profile of their own and
/// layered on top with [`ConvertProfile::overlay`].
///
/// ```yaml
/// format: sc4
/// oversize: shrink
/// undersize: pad
/// background: "#102030"
/// eightdot: best
/// gamma: 0.9
/// palette:
///   5: 255,0,0
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertProfile {
    pub format: Option<OutputFormat>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub oversize: Option<Oversize>,
    pub undersize: Option<Undersize>,
    /// Padding color, `R,G,B` or `#RRGGBB`
    pub background: Option<String>,
    pub eightdot: Option<EightDot>,
    pub gamma: Option<f32>,
    pub contrast: Option<f32>,
    pub hue_shift: Option<f32>,
    pub posterize_colors: Option<u32>,
    pub msx2_palette: Option<bool>,
    pub header: Option<bool>,
    pub dither: Option<bool>,
    pub skip_dither_application: Option<bool>,
    /// Color overrides keyed by 1-based color code
    pub palette: BTreeMap<u8, String>,
}

impl ConvertProfile {
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, CliError> {
        serde_yaml::from_str(content).map_err(|source| CliError::Profile {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let profile = Self::from_yaml(&content, path)?;
        tracing::info!(path = %path.display(), "Loaded profile");
        Ok(profile)
    }

    /// Fields set in `top` win; palette overrides are merged per code.
    pub fn overlay(self, top: ConvertProfile) -> ConvertProfile {
        let mut palette = self.palette;
        palette.extend(top.palette);
        ConvertProfile {
            format: top.format.or(self.format),
            prefix: top.prefix.or(self.prefix),
            suffix: top.suffix.or(self.suffix),
            oversize: top.oversize.or(self.oversize),
            undersize: top.undersize.or(self.undersize),
            background: top.background.or(self.background),
            eightdot: top.eightdot.or(self.eightdot),
            gamma: top.gamma.or(self.gamma),
            contrast: top.contrast.or(self.contrast),
            hue_shift: top.hue_shift.or(self.hue_shift),
            posterize_colors: top.posterize_colors.or(self.posterize_colors),
            msx2_palette: top.msx2_palette.or(self.msx2_palette),
            header: top.header.or(self.header),
            dither: top.dither.or(self.dither),
            skip_dither_application: top.skip_dither_application.or(self.skip_dither_application),
            palette,
        }
    }

    /// Build converter options; color text is parsed here.
    pub fn to_options(&self) -> Result<ConvertOptions, CliError> {
        let mut options = ConvertOptions::new();
        if let Some(mode) = self.oversize {
            options = options.oversize_mode(mode.into());
        }
        if let Some(mode) = self.undersize {
            options = options.undersize_mode(mode.into());
        }
        if let Some(text) = &self.background {
            options = options.background_color(parse_color(text)?);
        }
        if let Some(mode) = self.eightdot {
            options = options.eightdot_mode(mode.into());
        }
        options.gamma = self.gamma;
        options.contrast = self.contrast;
        options.hue_shift = self.hue_shift;
        options.posterize_colors = self.posterize_colors;
        if let Some(enabled) = self.msx2_palette {
            options = options.msx2_palette(enabled);
        }
        if let Some(enabled) = self.header {
            options = options.include_header(enabled);
        }
        if let Some(enabled) = self.dither {
            options = options.dither(enabled);
        }
        if let Some(enabled) = self.skip_dither_application {
            options = options.skip_dither_application(enabled);
        }
        for (&code, text) in &self.palette {
            options = options.palette_override(code, parse_color(text)?);
        }
        Ok(options)
    }
}

pub fn parse_color(text: &str) -> Result<Rgb, CliError> {
    text.parse().map_err(|source| CliError::Color {
        text: text.to_string(),
        source,
    })
}

/// Split a `N=COLOR` palette argument.
pub fn parse_palette_arg(arg: &str) -> Result<(u8, String), CliError> {
    let (code, color) = arg
        .split_once('=')
        .ok_or_else(|| CliError::PaletteArg(arg.to_string()))?;
    let code: u8 = code
        .trim()
        .parse()
        .map_err(|_| CliError::PaletteArg(arg.to_string()))?;
    Ok((code, color.trim().to_string()))
}
