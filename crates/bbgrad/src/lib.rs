//! The `bbgrad` command-line front end.
//!
//! Parsing lives in [`cli`], handlers in [`commands`]. Handlers receive their
//! stdin, clipboard and output streams through [`commands::Context`] so they
//! can be driven from tests.

pub mod cli;
pub mod commands;
pub mod input;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use commands::{run, Context};
