//! Subcommand handlers.
//!
//! Handlers write markup to `stdout` and everything else to `stderr`, so
//! `bbgrad render ... > sig.txt` captures only the BBCode.

use std::io::Write;

use anyhow::Context as _;
use bbgrad_clipboard::{copy_or_fallback, ClipboardWriter};
use bbgrad_core::{markup_len, parse_markup, render_glyphs, Preset, Session, StopList};

use crate::cli::{Command, InspectArgs, RenderArgs};
use crate::input::{resolve_text, StdinReader};
use crate::output::{format_copy, format_inspect, format_stats};

/// The outside world a handler talks to.
pub struct Context<'a> {
    pub stdin: &'a dyn StdinReader,
    pub clipboard: &'a dyn ClipboardWriter,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

pub fn run(command: Command, ctx: &mut Context<'_>) -> anyhow::Result<()> {
    match command {
        Command::Render(args) => render(args, ctx),
        Command::Inspect(args) => inspect(args, ctx),
    }
}

/// Builds the session: preset (or defaults), then flag overrides.
pub fn build_session(args: &RenderArgs, text: String) -> anyhow::Result<Session> {
    let preset = match &args.preset {
        Some(path) => Preset::from_file(path)
            .with_context(|| format!("could not load preset {}", path.display()))?,
        None => Preset::default(),
    };

    let mut session = preset.into_session();
    session.set_text(text);

    if let Some(format) = args.format {
        session.set_format(format.into());
    }
    if let Some(include) = args.include_spaces_flag() {
        session.set_include_spaces(include);
    }
    if let Some(escape) = args.escape_flag() {
        session.set_escape_brackets(escape);
    }
    if let Some(budget) = args.budget {
        session.set_budget(budget);
    }

    // Rainbow sizing depends on include_spaces, so stops come last.
    if !args.stops.is_empty() {
        session.edit_stops(|list| list.replace(args.stops.iter().copied()));
    }
    if args.rainbow {
        session.apply_rainbow();
    }
    if args.reverse {
        session.edit_stops(StopList::reverse);
    }
    Ok(session)
}

fn render(args: RenderArgs, ctx: &mut Context<'_>) -> anyhow::Result<()> {
    let text = resolve_text(args.text.clone(), ctx.stdin, "text")?;
    let session = build_session(&args, text)?;
    let report = session.render();
    tracing::debug!(
        stops = session.stops().len(),
        markup_len = report.markup_len,
        "rendered"
    );

    writeln!(ctx.stdout, "{}", report.markup).context("failed to write markup")?;

    if args.preview {
        writeln!(ctx.stderr, "{}", report.preview.to_ansi())?;
    }
    if !args.quiet {
        writeln!(ctx.stderr, "{}", format_stats(&report))?;
    }
    if args.copy {
        if report.can_copy() {
            let outcome = copy_or_fallback(ctx.clipboard, &report.markup);
            writeln!(ctx.stderr, "{}", format_copy(&outcome))?;
        } else {
            writeln!(ctx.stderr, "Nothing to copy.")?;
        }
    }
    Ok(())
}

fn inspect(args: InspectArgs, ctx: &mut Context<'_>) -> anyhow::Result<()> {
    let markup = resolve_text(args.markup, ctx.stdin, "markup")?;
    let glyphs = parse_markup(&markup);
    writeln!(ctx.stdout, "{}", render_glyphs(&glyphs)).context("failed to write preview")?;
    writeln!(ctx.stderr, "{}", format_inspect(&glyphs, markup_len(&markup)))?;
    Ok(())
}
