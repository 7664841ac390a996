//! Gradient-to-markup compiler.
//!
//! [`compile`] wraps every target character of the input in its own color tag:
//!
//! ```text
//! "Hi"  →  [COLOR=#FF0000]H[/COLOR][COLOR=#0000FF]i[/COLOR]
//! ```
//!
//! The function is pure: the same text, stops and options always produce the
//! same markup. The capacity estimator relies on that, since it recompiles
//! synthetic inputs repeatedly.
//!
//! # Degraded outputs
//!
//! | Input | Markup | Colored |
//! |-------|--------|---------|
//! | empty text | `""` | 0 |
//! | fewer than 2 stops | [`INSUFFICIENT_STOPS`] | 0 |
//! | no target characters | the text itself (escaped if requested) | 0 |
//!
//! # Example
//!
//! ```rust
//! use bbgrad_core::{compile, Color, RenderOptions};
//!
//! let stops = [Color::new(255, 0, 0), Color::new(0, 0, 255)];
//! let out = compile("Hi", &stops, &RenderOptions::default());
//! assert_eq!(out.markup, "[COLOR=#FF0000]H[/COLOR][COLOR=#0000FF]i[/COLOR]");
//! assert_eq!(out.colored_count, 2);
//! ```

use crate::color::Color;
use crate::gradient::Gradient;
use crate::options::RenderOptions;

/// Markup returned in place of a gradient when fewer than two stops are valid.
pub const INSUFFICIENT_STOPS: &str = "Add at least 2 valid colors.";

const OPEN_PREFIX: &str = "[COLOR=";
const CLOSE_TAG: &str = "[/COLOR]";

/// Result of a compilation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compiled {
    pub markup: String,
    /// Number of characters that received a color tag.
    pub colored_count: usize,
}

impl Compiled {
    /// Markup length in UTF-16 code units, the unit forum text fields count in.
    pub fn len(&self) -> usize {
        markup_len(&self.markup)
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }

    /// True when the markup is the insufficient-stops message.
    pub fn needs_stops(&self) -> bool {
        self.colored_count == 0 && self.markup == INSUFFICIENT_STOPS
    }
}

/// Length of a markup string in UTF-16 code units.
pub fn markup_len(markup: &str) -> usize {
    markup.encode_utf16().count()
}

/// Compiles `text` into gradient markup.
pub fn compile(text: &str, stops: &[Color], options: &RenderOptions) -> Compiled {
    if text.is_empty() {
        return Compiled::default();
    }

    let Some(gradient) = Gradient::new(stops) else {
        return Compiled {
            markup: INSUFFICIENT_STOPS.to_string(),
            colored_count: 0,
        };
    };

    let chars: Vec<char> = text.chars().collect();
    let colors = gradient.colorize(&chars, |ch| options.is_target(ch));

    // Per colored char: "[COLOR=" + "#RRGGBB" + "]" + glyph + "[/COLOR]"
    let mut markup = String::with_capacity(text.len() * 24);
    let mut colored_count = 0;

    for (&ch, color) in chars.iter().zip(&colors) {
        match color {
            Some(color) => {
                colored_count += 1;
                markup.push_str(OPEN_PREFIX);
                markup.push_str(&options.format.encode(*color));
                markup.push(']');
                push_glyph(&mut markup, ch, options.escape_brackets);
                markup.push_str(CLOSE_TAG);
            }
            None => push_glyph(&mut markup, ch, options.escape_brackets),
        }
    }

    Compiled {
        markup,
        colored_count,
    }
}

/// Escapes literal brackets in `text`, leaving everything else untouched.
pub fn escape_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_glyph(&mut out, ch, true);
    }
    out
}

/// Appends a content character, entity-encoding brackets when asked.
fn push_glyph(out: &mut String, ch: char, escape: bool) {
    match ch {
        '[' if escape => out.push_str("&#91;"),
        ']' if escape => out.push_str("&#93;"),
        _ => out.push(ch),
    }
}
