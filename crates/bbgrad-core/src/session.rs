//! Editor state and the report rendered from it.
//!
//! A [`Session`] holds everything a front end edits: the text, the stop list,
//! the options and the budget. Every mutation bumps [`Session::revision`] so a
//! front end can tell whether its last [`Report`] is stale. [`Session::render`]
//! is pure and computes the whole report from scratch.
//!
//! ```rust
//! use bbgrad_core::Session;
//!
//! let mut session = Session::new();
//! session.set_text("Hello");
//! let report = session.render();
//! assert_eq!(report.char_count, 5);
//! assert_eq!(report.colored_count, 5);
//! assert!(!report.over_budget);
//! ```

use crate::capacity::{estimate_capacity, DEFAULT_BUDGET};
use crate::color::Color;
use crate::compile::compile;
use crate::options::{ColorFormat, RenderOptions};
use crate::preview::{preview, Preview};
use crate::rainbow::rainbow_for_text;
use crate::stops::StopList;

/// Mutable editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    text: String,
    stops: StopList,
    options: RenderOptions,
    budget: usize,
    revision: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty text, default stops and options, default budget.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            stops: StopList::with_defaults(),
            options: RenderOptions::default(),
            budget: DEFAULT_BUDGET,
            revision: 0,
        }
    }

    pub fn with_stops(mut self, stops: StopList) -> Self {
        self.stops = stops;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stops(&self) -> &StopList {
        &self.stops
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Incremented by every mutating call.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.touch();
    }

    pub fn clear_text(&mut self) {
        self.set_text(String::new());
    }

    pub fn set_include_spaces(&mut self, include: bool) {
        self.options.include_spaces = include;
        self.touch();
    }

    pub fn set_escape_brackets(&mut self, escape: bool) {
        self.options.escape_brackets = escape;
        self.touch();
    }

    pub fn set_format(&mut self, format: ColorFormat) {
        self.options.format = format;
        self.touch();
    }

    pub fn set_budget(&mut self, budget: usize) {
        self.budget = budget;
        self.touch();
    }

    /// Applies an edit to the stop list.
    ///
    /// ```rust
    /// # use bbgrad_core::Session;
    /// let mut session = Session::new();
    /// session.edit_stops(|stops| stops.reverse());
    /// assert_eq!(session.revision(), 1);
    /// ```
    pub fn edit_stops<R>(&mut self, edit: impl FnOnce(&mut StopList) -> R) -> R {
        let result = edit(&mut self.stops);
        self.touch();
        result
    }

    /// Replaces the stops with a rainbow sized to the current text.
    pub fn apply_rainbow(&mut self) {
        let colors = rainbow_for_text(&self.text, self.options.include_spaces);
        self.edit_stops(|stops| stops.replace(colors));
    }

    /// Computes everything a front end displays.
    pub fn render(&self) -> Report {
        let stops: Vec<Color> = self.stops.colors();
        let compiled = compile(&self.text, &stops, &self.options);
        let markup_len = compiled.len();
        let can_add = estimate_capacity(&self.text, &stops, &self.options, self.budget);

        Report {
            char_count: self.text.chars().count(),
            colored_count: compiled.colored_count,
            markup_len,
            budget: self.budget,
            over_budget: markup_len > self.budget,
            can_add,
            preview: preview(&self.text, &stops, self.options.include_spaces),
            markup: compiled.markup,
            revision: self.revision,
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
        tracing::trace!(revision = self.revision, "session changed");
    }
}

/// Snapshot of a rendered session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub markup: String,
    pub colored_count: usize,
    /// Input length in characters.
    pub char_count: usize,
    /// Markup length in UTF-16 code units.
    pub markup_len: usize,
    pub budget: usize,
    pub over_budget: bool,
    /// Filler characters that still fit in the budget.
    pub can_add: usize,
    pub preview: Preview,
    /// Session revision this report was rendered from.
    pub revision: u64,
}

impl Report {
    /// Nothing meaningful to copy when the markup is empty.
    pub fn can_copy(&self) -> bool {
        !self.markup.is_empty()
    }

    /// `Output: 123 / 600`
    pub fn budget_label(&self) -> String {
        format!("Output: {} / {}", self.markup_len, self.budget)
    }
}
