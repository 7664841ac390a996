//! Reader for `[COLOR=...]` markup.
//!
//! Turns BBCode color markup (ours or hand-written) back into characters and
//! colors so it can be previewed. Only the `COLOR` tag is understood:
//!
//! - `[COLOR=#RRGGBB]`, `[COLOR=#RGB]`, `[COLOR=rgb(R, G, B)]` open a color
//! - `[/COLOR]` closes the innermost open color
//! - tag names are case-insensitive
//! - `&#91;` and `&#93;` decode to `[` and `]`
//!
//! Anything else, including an open tag with no matching close, an orphan
//! close or a tag with an unparseable color, is kept as literal text.
//!
//! # Example
//!
//! ```rust
//! use bbgrad_core::{parse_markup, Color};
//!
//! let glyphs = parse_markup("[COLOR=#FF0000]H[/COLOR]i &#91;");
//! assert_eq!(glyphs[0].color, Some(Color::new(255, 0, 0)));
//! assert_eq!(glyphs[1].color, None);
//! assert_eq!(glyphs[3].ch, '[');
//! ```

use crate::color::{normalize, Color};
use crate::preview::PreviewGlyph;

const TAG_NAME: &str = "color";

/// Parses markup into glyphs with their colors.
pub fn parse_markup(markup: &str) -> Vec<PreviewGlyph> {
    let tokens: Vec<Token<'_>> = Tokenizer::new(markup).collect();
    let mut glyphs = Vec::with_capacity(markup.len());
    let mut stack: Vec<Color> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Text(text) => push_text(&mut glyphs, text, stack.last().copied()),
            Token::Open { color, raw } => {
                if has_matching_close(&tokens[i + 1..]) {
                    stack.push(*color);
                } else {
                    push_text(&mut glyphs, raw, stack.last().copied());
                }
            }
            Token::Close(raw) => {
                if stack.pop().is_none() {
                    push_text(&mut glyphs, raw, None);
                }
            }
            Token::Literal(raw) => push_text(&mut glyphs, raw, stack.last().copied()),
        }
    }

    glyphs
}

/// The text content of markup, with tags removed and entities decoded.
pub fn plain_text(markup: &str) -> String {
    parse_markup(markup).iter().map(|g| g.ch).collect()
}

/// Whether a close tag balances the open tag preceding `tokens`.
fn has_matching_close(tokens: &[Token<'_>]) -> bool {
    let mut depth = 1;
    for token in tokens {
        match token {
            Token::Open { .. } => depth += 1,
            Token::Close(_) => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// Emits `text` as glyphs, decoding bracket entities.
fn push_text(glyphs: &mut Vec<PreviewGlyph>, text: &str, color: Option<Color>) {
    let mut rest = text;
    while !rest.is_empty() {
        let (ch, len) = if rest.starts_with("&#91;") {
            ('[', 5)
        } else if rest.starts_with("&#93;") {
            (']', 5)
        } else {
            match rest.chars().next() {
                Some(ch) => (ch, ch.len_utf8()),
                None => break,
            }
        };
        glyphs.push(PreviewGlyph { ch, color });
        rest = &rest[len..];
    }
}

/// Parses the value of a `COLOR=` attribute.
fn parse_color_value(value: &str) -> Option<Color> {
    let value = value.trim();
    let lower = value.to_ascii_lowercase();
    if let Some(inner) = lower.strip_prefix("rgb(").and_then(|v| v.strip_suffix(')')) {
        let mut channels = inner.split(',').map(|part| part.trim().parse::<u8>());
        let r = channels.next()?.ok()?;
        let g = channels.next()?.ok()?;
        let b = channels.next()?.ok()?;
        if channels.next().is_some() {
            return None;
        }
        return Some(Color::new(r, g, b));
    }
    if value.starts_with('#') {
        normalize(value)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// `[COLOR=value]` with a parseable value.
    Open { color: Color, raw: &'a str },
    /// `[/COLOR]`
    Close(&'a str),
    /// Bracketed text that is not a color tag.
    Literal(&'a str),
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn classify(content: &str, raw: &'a str) -> Token<'a> {
        if let Some(name) = content.strip_prefix('/') {
            if name.trim().eq_ignore_ascii_case(TAG_NAME) {
                return Token::Close(raw);
            }
            return Token::Literal(raw);
        }
        if let Some((name, value)) = content.split_once('=') {
            if name.trim().eq_ignore_ascii_case(TAG_NAME) {
                if let Some(color) = parse_color_value(value) {
                    return Token::Open { color, raw };
                }
            }
        }
        Token::Literal(raw)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = &self.input[self.pos..];
        if remaining.is_empty() {
            return None;
        }

        let Some(bracket_pos) = remaining.find('[') else {
            self.pos = self.input.len();
            return Some(Token::Text(remaining));
        };
        if bracket_pos > 0 {
            self.pos += bracket_pos;
            return Some(Token::Text(&remaining[..bracket_pos]));
        }

        let Some(close_pos) = remaining.find(']') else {
            self.pos = self.input.len();
            return Some(Token::Text(remaining));
        };

        // A second '[' before the ']' means this one is a lone glyph.
        if remaining[1..close_pos].contains('[') {
            self.pos += 1;
            return Some(Token::Text(&remaining[..1]));
        }

        let raw = &remaining[..=close_pos];
        self.pos += close_pos + 1;
        Some(Self::classify(&remaining[1..close_pos], raw))
    }
}
