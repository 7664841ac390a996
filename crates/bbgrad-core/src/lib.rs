//! # bbgrad-core - Gradient BBCode Compiler
//!
//! `bbgrad-core` turns plain text into forum BBCode where every character is
//! wrapped in its own `[COLOR=...]` tag, following a multi-stop linear RGB
//! gradient. It also measures the markup against a forum's length limit and
//! estimates how much more text would fit.
//!
//! ## Core Concepts
//!
//! - [`Color`]: 8-bit RGB color, parsed with [`normalize`] from `#RGB`/`#RRGGBB`
//! - [`Gradient`]: Piecewise-linear interpolation over two or more stops
//! - [`compile`]: Text to `[COLOR=...]` markup, see [`RenderOptions`]
//! - [`estimate_capacity`]: How many more characters fit in the budget
//! - [`preview`]: The colored characters a front end displays
//! - [`parse_markup`]: Reads `[COLOR=...]` markup back into colored glyphs
//! - [`StopList`] and [`Session`]: Editor state with last-known-valid stops
//! - [`Preset`]: Stops and options loaded from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use bbgrad_core::{compile, Color, RenderOptions};
//!
//! let stops = [Color::BLACK, Color::WHITE];
//! let out = compile("Hi", &stops, &RenderOptions::default());
//!
//! assert_eq!(out.markup, "[COLOR=#000000]H[/COLOR][COLOR=#FFFFFF]i[/COLOR]");
//! assert_eq!(out.colored_count, 2);
//! assert_eq!(out.len(), 48);
//! ```
//!
//! ## Whitespace and Brackets
//!
//! Whitespace is passed through uncolored unless
//! [`RenderOptions::include_spaces`] is set, and does not consume a gradient
//! position. Literal `[` and `]` are written as `&#91;` and `&#93;` by default
//! so the forum does not read them as tags.
//!
//! ```rust
//! use bbgrad_core::{compile, Color, ColorFormat, RenderOptions};
//!
//! let stops = [Color::new(255, 0, 0), Color::new(0, 0, 255)];
//! let options = RenderOptions::default().format(ColorFormat::Rgb);
//! let out = compile("a b", &stops, &options);
//!
//! assert_eq!(
//!     out.markup,
//!     "[COLOR=rgb(255, 0, 0)]a[/COLOR] [COLOR=rgb(0, 0, 255)]b[/COLOR]"
//! );
//! ```
//!
//! ## Previewing
//!
//! ```rust
//! use bbgrad_core::{parse_markup, preview, Color, Preview};
//!
//! let stops = [Color::BLACK, Color::WHITE];
//! let shown = preview("ab", &stops, false);
//! assert_eq!(shown.glyphs()[1].color, Some(Color::WHITE));
//!
//! // Markup read back from the forum gives the same glyphs.
//! let read = parse_markup("[COLOR=#000000]a[/COLOR][COLOR=#FFFFFF]b[/COLOR]");
//! assert_eq!(Preview::Glyphs(read), shown);
//! ```
//!
//! ## Editor State
//!
//! ```rust
//! use bbgrad_core::{Session, StopList};
//!
//! let mut session = Session::new();
//! session.set_text("Hello");
//! session.edit_stops(|stops: &mut StopList| stops.set(0, "#ff")); // rejected
//!
//! let report = session.render();
//! assert_eq!(report.colored_count, 5);
//! assert!(session.stops().get(0).unwrap().is_invalid());
//! ```

pub mod capacity;
pub mod color;
pub mod compile;
mod error;
pub mod gradient;
pub mod markup;
pub mod options;
pub mod preset;
pub mod preview;
pub mod rainbow;
pub mod session;
pub mod stops;

pub use capacity::{estimate_capacity, DEFAULT_BUDGET, FILLER, MAX_TRY};
pub use color::{from_hsl, from_hsv, lerp, normalize, to_hex, to_hsv, Color, ColorParseError, Hsv};
pub use compile::{compile, escape_brackets, markup_len, Compiled, INSUFFICIENT_STOPS};
pub use error::PresetError;
pub use gradient::{count_targets, Gradient};
pub use markup::{parse_markup, plain_text};
pub use options::{ColorFormat, RenderOptions};
pub use preset::Preset;
pub use preview::{preview, render_glyphs, rgb_to_ansi256, Preview, PreviewGlyph, NEUTRAL};
pub use rainbow::{rainbow_for_text, rainbow_stops};
pub use session::{Report, Session};
pub use stops::{Stop, StopList, DEFAULT_STOPS};
