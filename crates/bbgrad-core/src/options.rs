//! Formatting options shared by the compiler, preview and estimator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// How a color is written inside the `[COLOR=...]` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `[COLOR=#RRGGBB]`
    #[default]
    Hex,
    /// `[COLOR=rgb(R, G, B)]`
    Rgb,
}

impl ColorFormat {
    /// Encodes a color for use as the tag value.
    pub fn encode(self, color: Color) -> String {
        match self {
            ColorFormat::Hex => color.to_hex(),
            ColorFormat::Rgb => format!("rgb({}, {}, {})", color.r, color.g, color.b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            other => Err(format!("unknown color format '{}' (expected hex or rgb)", other)),
        }
    }
}

/// Options controlling which characters are colored and how tags are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Whitespace characters also receive a color.
    pub include_spaces: bool,
    /// Literal `[` / `]` in the text become `&#91;` / `&#93;`.
    pub escape_brackets: bool,
    pub format: ColorFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_spaces: false,
            escape_brackets: true,
            format: ColorFormat::Hex,
        }
    }
}

impl RenderOptions {
    pub fn include_spaces(mut self, include: bool) -> Self {
        self.include_spaces = include;
        self
    }

    pub fn escape_brackets(mut self, escape: bool) -> Self {
        self.escape_brackets = escape;
        self
    }

    pub fn format(mut self, format: ColorFormat) -> Self {
        self.format = format;
        self
    }

    /// Whether `ch` is a gradient target under these options.
    pub fn is_target(&self, ch: char) -> bool {
        self.include_spaces || !ch.is_whitespace()
    }
}
