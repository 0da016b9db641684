//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;

/// Error type for parsing color strings.
///
/// Returned when a `R,G,B` triplet or `#RRGGBB` hex string cannot be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Wrong number of components (must be exactly 3)
    ComponentCount(usize),
    /// A component is not a valid number
    InvalidComponent(String),
    /// A component is outside 0..=255
    OutOfRange(u32),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::ComponentCount(count) => {
                write!(
                    f,
                    "color must have exactly three components (got {})",
                    count
                )
            }
            ParseColorError::InvalidComponent(part) => {
                write!(f, "invalid color component: {}", part)
            }
            ParseColorError::OutOfRange(value) => {
                write!(f, "color component {} is not between 0 and 255", value)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Override targets a color code outside 1..=15
    OverrideOutOfRange {
        /// The 1-based color code that was requested
        index: u8,
    },
    /// Invalid color text in an override
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::OverrideOutOfRange { index } => {
                write!(f, "palette index {} is out of range (1-15)", index)
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
