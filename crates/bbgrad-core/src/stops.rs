//! Editable, ordered list of gradient stops.
//!
//! Each [`Stop`] keeps the text the user typed alongside the last color that
//! text successfully parsed to. Typing an invalid value never drops the stop
//! from the gradient: it keeps rendering with its last-known-valid color until
//! the input parses again.
//!
//! ```rust
//! use bbgrad_core::{Color, StopList};
//!
//! let mut stops = StopList::new();
//! stops.push("#000");
//! stops.push("#fff");
//!
//! assert!(!stops.set(1, "#ff"));           // half-typed, rejected
//! assert_eq!(stops.colors()[1], Color::WHITE); // still white
//! assert!(stops.get(1).unwrap().is_invalid());
//! ```

use crate::color::{normalize, Color};

/// Color given to a stop pushed with unparseable text.
pub const FALLBACK_STOP: Color = Color::new(0x85, 0xB9, 0xFF);

/// Color of a stop added with no particular value.
pub const NEW_STOP: Color = Color::WHITE;

/// Stops a fresh editor starts with.
pub const DEFAULT_STOPS: [Color; 3] = [
    Color::new(0x85, 0xB9, 0xFF),
    Color::new(0xB5, 0x9C, 0xFF),
    Color::new(0xD0, 0x64, 0xFF),
];

/// A single stop: its raw input and last valid color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    input: String,
    color: Color,
    invalid: bool,
}

impl Stop {
    fn from_color(color: Color) -> Self {
        Self {
            input: color.to_hex(),
            color,
            invalid: false,
        }
    }

    /// The text as last entered.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last-known-valid color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the current input fails to parse.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }
}

/// Ordered stop list; order defines gradient direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopList {
    stops: Vec<Stop>,
}

impl StopList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A list seeded with [`DEFAULT_STOPS`].
    pub fn with_defaults() -> Self {
        Self::from_colors(DEFAULT_STOPS)
    }

    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            stops: colors.into_iter().map(Stop::from_color).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    /// The colors to render with, in order.
    pub fn colors(&self) -> Vec<Color> {
        self.stops.iter().map(Stop::color).collect()
    }

    /// Display labels, `Stop 1`, `Stop 2`, ... following the current order.
    pub fn labels(&self) -> Vec<String> {
        (1..=self.stops.len()).map(|i| format!("Stop {}", i)).collect()
    }

    /// Appends a stop parsed from `text`, or [`FALLBACK_STOP`] if it doesn't parse.
    pub fn push(&mut self, text: &str) -> Color {
        let color = normalize(text).unwrap_or(FALLBACK_STOP);
        self.stops.push(Stop::from_color(color));
        color
    }

    /// Appends a white stop.
    pub fn add_default(&mut self) {
        self.stops.push(Stop::from_color(NEW_STOP));
    }

    /// Updates a stop from typed text.
    ///
    /// Returns `true` if the text parsed. On failure the stop keeps its
    /// previous color and is flagged invalid. Out-of-range indices return
    /// `false` and change nothing.
    pub fn set(&mut self, index: usize, text: &str) -> bool {
        let Some(stop) = self.stops.get_mut(index) else {
            return false;
        };
        stop.input = text.to_string();
        match normalize(text) {
            Some(color) => {
                stop.color = color;
                stop.input = color.to_hex();
                stop.invalid = false;
                true
            }
            None => {
                stop.invalid = true;
                false
            }
        }
    }

    /// Sets a stop to an already-valid color (color picker path).
    pub fn set_color(&mut self, index: usize, color: Color) -> bool {
        match self.stops.get_mut(index) {
            Some(stop) => {
                *stop = Stop::from_color(color);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<Stop> {
        (index < self.stops.len()).then(|| self.stops.remove(index))
    }

    /// Swaps a stop with its predecessor.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.stops.len() {
            return false;
        }
        self.stops.swap(index - 1, index);
        true
    }

    /// Swaps a stop with its successor.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.stops.len() {
            return false;
        }
        self.stops.swap(index, index + 1);
        true
    }

    /// Moves the stop at `from` so that it ends up at `to` (drag and drop).
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from >= self.stops.len() || to >= self.stops.len() {
            return false;
        }
        let stop = self.stops.remove(from);
        self.stops.insert(to, stop);
        true
    }

    pub fn reverse(&mut self) {
        self.stops.reverse();
    }

    /// Replaces every stop.
    pub fn replace(&mut self, colors: impl IntoIterator<Item = Color>) {
        *self = Self::from_colors(colors);
    }
}
