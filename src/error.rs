use std::path::PathBuf;

use sc2_quantize::{ConvertError, PaletteError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input path does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Unsupported file type (expected .png): {}", .0.display())]
    UnsupportedInput(PathBuf),

    #[error("No PNG files were found in the provided inputs.")]
    NoInputs,

    #[error("Duplicate output name would occur: {0}")]
    DuplicateOutput(String),

    #[error("Output files already exist (use --force to overwrite):\n{}", format_paths(.0))]
    OutputExists(Vec<PathBuf>),

    #[error("Invalid color '{text}': {source}")]
    Color {
        text: String,
        source: ParseColorError,
    },

    #[error("Invalid palette override '{0}' (expected N=COLOR with N in 1-15)")]
    PaletteArg(String),

    #[error("Failed to read profile {}: {source}", path.display())]
    Profile {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("{}: {source}", path.display())]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_exists_lists_every_path() {
        let err = CliError::OutputExists(vec![PathBuf::from("a.sc2"), PathBuf::from("b.sc2")]);
        assert_eq!(
            err.to_string(),
            "Output files already exist (use --force to overwrite):\na.sc2\nb.sc2"
        );
    }

    #[test]
    fn test_convert_error_names_file() {
        let err = CliError::Convert {
            path: PathBuf::from("in/cat.png"),
            source: ConvertError::Undersize {
                width: 10,
                height: 10,
            },
        };
        assert!(err.to_string().starts_with("in/cat.png: Input is smaller than 256x192"));
    }
}
