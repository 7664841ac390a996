//! Per-character preview colors.
//!
//! The preview is a projection of the compiler's math: the same target
//! selection and the same interpolation, without any markup. Preview sinks
//! (a browser, a terminal) get one [`PreviewGlyph`] per input character.
//!
//! # Example
//!
//! ```rust
//! use bbgrad_core::{preview, Color, Preview};
//!
//! let stops = [Color::BLACK, Color::WHITE];
//! let Preview::Glyphs(glyphs) = preview("a b", &stops, false) else {
//!     panic!("expected glyphs");
//! };
//! assert_eq!(glyphs[0].color, Some(Color::BLACK));
//! assert_eq!(glyphs[1].color, None); // the space is not a target
//! assert_eq!(glyphs[2].color, Some(Color::WHITE));
//! ```

use console::Style;

use crate::color::Color;
use crate::compile::INSUFFICIENT_STOPS;
use crate::gradient::Gradient;

/// Display color for characters that are not gradient targets.
pub const NEUTRAL: Color = Color::new(0xD9, 0xD9, 0xD9);

/// Text shown in place of an empty preview.
pub const EMPTY_PLACEHOLDER: &str = "Preview will appear here…";

/// One character of the preview and its resolved color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewGlyph {
    pub ch: char,
    /// `None` when the character is not colored.
    pub color: Option<Color>,
}

impl PreviewGlyph {
    /// The glyph's color, or [`NEUTRAL`] when uncolored.
    pub fn color_or_neutral(&self) -> Color {
        self.color.unwrap_or(NEUTRAL)
    }
}

/// What a preview sink should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// No text yet.
    Empty,
    /// Fewer than two valid stops.
    NeedsStops,
    /// One entry per input character, in order.
    Glyphs(Vec<PreviewGlyph>),
}

impl Preview {
    /// The message a sink shows instead of glyphs, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Preview::Empty => Some(EMPTY_PLACEHOLDER),
            Preview::NeedsStops => Some(INSUFFICIENT_STOPS),
            Preview::Glyphs(_) => None,
        }
    }

    pub fn glyphs(&self) -> &[PreviewGlyph] {
        match self {
            Preview::Glyphs(glyphs) => glyphs,
            _ => &[],
        }
    }

    /// Renders the preview with terminal colors.
    ///
    /// Colors are mapped onto the 256-color palette. Messages are dimmed.
    pub fn to_ansi(&self) -> String {
        match self.message() {
            Some(message) => Style::new().dim().apply_to(message).to_string(),
            None => render_glyphs(self.glyphs()),
        }
    }
}

/// Resolves the display color of every character of `text`.
pub fn preview(text: &str, stops: &[Color], include_spaces: bool) -> Preview {
    if text.is_empty() {
        return Preview::Empty;
    }
    let Some(gradient) = Gradient::new(stops) else {
        return Preview::NeedsStops;
    };

    let chars: Vec<char> = text.chars().collect();
    let colors = gradient.colorize(&chars, |ch| include_spaces || !ch.is_whitespace());
    Preview::Glyphs(
        chars
            .into_iter()
            .zip(colors)
            .map(|(ch, color)| PreviewGlyph { ch, color })
            .collect(),
    )
}

/// Renders glyphs with per-character foreground colors.
pub fn render_glyphs(glyphs: &[PreviewGlyph]) -> String {
    let mut out = String::new();
    for glyph in glyphs {
        let ansi = rgb_to_ansi256(glyph.color_or_neutral().to_tuple());
        let style = Style::new().fg(console::Color::Color256(ansi));
        out.push_str(&style.apply_to(glyph.ch).to_string());
    }
    out
}

/// Nearest xterm 256-color index for an RGB triplet.
///
/// Grays go to the 24-step grayscale ramp, everything else to the 6×6×6 cube.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((u16::from(r) - 8) * 24 / 247) as u8
        }
    } else {
        let red = (u16::from(r) * 5 / 255) as u8;
        let green = (u16::from(g) * 5 / 255) as u8;
        let blue = (u16::from(b) * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;
    use crate::options::RenderOptions;

    fn stops() -> Vec<Color> {
        vec![Color::new(255, 0, 0), Color::new(0, 0, 255)]
    }

    #[test]
    fn empty_text_shows_placeholder() {
        let p = preview("", &stops(), true);
        assert_eq!(p, Preview::Empty);
        assert_eq!(p.message(), Some(EMPTY_PLACEHOLDER));
        assert!(p.glyphs().is_empty());
    }

    #[test]
    fn needs_two_stops() {
        let p = preview("hi", &[Color::WHITE], true);
        assert_eq!(p, Preview::NeedsStops);
        assert_eq!(p.message(), Some(INSUFFICIENT_STOPS));
    }

    #[test]
    fn every_character_has_a_glyph() {
        let p = preview("a b c", &stops(), false);
        let chars: String = p.glyphs().iter().map(|g| g.ch).collect();
        assert_eq!(chars, "a b c");
        assert_eq!(p.glyphs()[1].color, None);
        assert_eq!(p.glyphs()[1].color_or_neutral(), NEUTRAL);
    }

    #[test]
    fn all_whitespace_is_all_neutral() {
        let p = preview("   ", &stops(), false);
        assert!(p.glyphs().iter().all(|g| g.color.is_none()));
    }

    #[test]
    fn matches_compiler_colors() {
        let options = RenderOptions::default().include_spaces(true).escape_brackets(false);
        let p = preview("xyz", &stops(), true);
        let markup = compile("xyz", &stops(), &options).markup;
        for glyph in p.glyphs() {
            let color = glyph.color.unwrap();
            assert!(markup.contains(&format!("[COLOR={}]{}[/COLOR]", color, glyph.ch)));
        }
    }

    #[test]
    fn ansi_render_keeps_text() {
        let p = preview("ab", &stops(), true);
        let plain = console::strip_ansi_codes(&p.to_ansi()).to_string();
        assert_eq!(plain, "ab");
    }

    #[test]
    fn ansi256_mapping() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
        assert!((232..=255).contains(&rgb_to_ansi256(NEUTRAL.to_tuple())));
    }
}
