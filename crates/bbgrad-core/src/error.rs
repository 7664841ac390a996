//! Error types for loading presets.

use std::path::PathBuf;

/// Errors raised while reading a gradient preset.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// The YAML did not parse or did not match the preset shape.
    #[error("{}invalid preset: {message}", path_prefix(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A stop is not a valid hex color.
    #[error("{}stop {index} is not a valid color: '{value}'", path_prefix(.path))]
    InvalidColor {
        index: usize,
        value: String,
        path: Option<PathBuf>,
    },

    /// The preset file could not be read.
    #[error("failed to read preset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PresetError {
    /// Attaches the file the preset came from.
    pub(crate) fn with_path(self, file: PathBuf) -> Self {
        match self {
            PresetError::Parse { message, .. } => PresetError::Parse {
                path: Some(file),
                message,
            },
            PresetError::InvalidColor { index, value, .. } => PresetError::InvalidColor {
                index,
                value,
                path: Some(file),
            },
            io @ PresetError::Io { .. } => io,
        }
    }
}

fn path_prefix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("{}: ", p.display()),
        None => String::new(),
    }
}

impl From<serde_yaml::Error> for PresetError {
    fn from(err: serde_yaml::Error) -> Self {
        PresetError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}
