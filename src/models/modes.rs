use clap::ValueEnum;
use serde::Deserialize;

use sc2_quantize::{EightDotMode, OversizeMode, UndersizeMode};

/// Target file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Sc2,
    Sc4,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Sc2 => "sc2",
            OutputFormat::Sc4 => "sc4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Oversize {
    Error,
    Shrink,
    Crop,
}

impl From<Oversize> for OversizeMode {
    fn from(value: Oversize) -> Self {
        match value {
            Oversize::Error => OversizeMode::Error,
            Oversize::Shrink => OversizeMode::Shrink,
            Oversize::Crop => OversizeMode::Crop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Undersize {
    Error,
    Pad,
}

impl From<Undersize> for UndersizeMode {
    fn from(value: Undersize) -> Self {
        match value {
            Undersize::Error => UndersizeMode::Error,
            Undersize::Pad => UndersizeMode::Pad,
        }
    }
}

/// 8-dot strategy as spelled on the command line and in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EightDot {
    #[serde(alias = "FAST")]
    Fast,
    #[serde(alias = "BASIC")]
    Basic,
    #[serde(alias = "BEST")]
    Best,
    #[serde(alias = "NONE")]
    None,
}

impl From<EightDot> for EightDotMode {
    fn from(value: EightDot) -> Self {
        match value {
            EightDot::Fast => EightDotMode::Fast,
            EightDot::Basic => EightDotMode::Basic,
            EightDot::Best => EightDotMode::Best,
            EightDot::None => EightDotMode::None,
        }
    }
}
