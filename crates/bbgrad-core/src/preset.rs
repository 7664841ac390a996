//! YAML gradient presets.
//!
//! A preset stores a stop list and render options so a signature style can be
//! reused. Every key is optional; missing keys fall back to the defaults.
//!
//! ```yaml
//! stops: ["#85B9FF", "#B59CFF", "#D064FF"]
//! include_spaces: false
//! escape_brackets: true
//! format: hex        # or rgb
//! budget: 600
//! ```
//!
//! Unlike interactive editing, a preset with a malformed stop is rejected
//! outright: there is no previous value to fall back to.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::capacity::DEFAULT_BUDGET;
use crate::color::{normalize, Color};
use crate::error::PresetError;
use crate::options::{ColorFormat, RenderOptions};
use crate::session::Session;
use crate::stops::{StopList, DEFAULT_STOPS};

/// Parsed, validated preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub stops: Vec<Color>,
    pub options: RenderOptions,
    pub budget: usize,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            stops: DEFAULT_STOPS.to_vec(),
            options: RenderOptions::default(),
            budget: DEFAULT_BUDGET,
        }
    }
}

/// On-disk shape. Stops stay strings so errors can point at the bad one.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PresetFile {
    stops: Option<Vec<String>>,
    include_spaces: Option<bool>,
    escape_brackets: Option<bool>,
    format: Option<ColorFormat>,
    budget: Option<usize>,
}

impl Preset {
    /// Parses a preset from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, PresetError> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: PresetFile = serde_yaml::from_str(yaml)?;
        let defaults = Self::default();

        let stops = match file.stops {
            Some(raw) => raw
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    normalize(value).ok_or_else(|| PresetError::InvalidColor {
                        index,
                        value: value.clone(),
                        path: None,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.stops,
        };

        let options = RenderOptions {
            include_spaces: file
                .include_spaces
                .unwrap_or(defaults.options.include_spaces),
            escape_brackets: file
                .escape_brackets
                .unwrap_or(defaults.options.escape_brackets),
            format: file.format.unwrap_or(defaults.options.format),
        };

        Ok(Self {
            stops,
            options,
            budget: file.budget.unwrap_or(defaults.budget),
        })
    }

    /// Reads and parses a preset file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading preset");
        Self::from_yaml(&content).map_err(|e| e.with_path(path.to_path_buf()))
    }

    /// Serializes back to YAML, stops as canonical hex.
    pub fn to_yaml(&self) -> Result<String, PresetError> {
        let file = PresetFile {
            stops: Some(self.stops.iter().map(Color::to_hex).collect()),
            include_spaces: Some(self.options.include_spaces),
            escape_brackets: Some(self.options.escape_brackets),
            format: Some(self.options.format),
            budget: Some(self.budget),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// A session configured from this preset.
    pub fn into_session(self) -> Session {
        Session::new()
            .with_stops(StopList::from_colors(self.stops))
            .with_options(self.options)
            .with_budget(self.budget)
    }
}
