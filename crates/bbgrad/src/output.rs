//! Stats and status lines printed to stderr.

use bbgrad_clipboard::CopyOutcome;
use bbgrad_core::{PreviewGlyph, Report};
use console::Style;

/// The counters shown next to the output.
///
/// ```text
/// Chars: 5
/// Colored: 5
/// BBCode len: 120
/// Output: 120 / 600 ok
/// Can add: 20
/// ```
pub fn format_stats(report: &Report) -> String {
    let badge = if report.over_budget {
        Style::new().for_stderr().yellow().bold().apply_to("over")
    } else {
        Style::new().for_stderr().green().apply_to("ok")
    };
    let label = Style::new().for_stderr().dim();

    let lines = [
        format!("{} {}", label.apply_to("Chars:"), report.char_count),
        format!("{} {}", label.apply_to("Colored:"), report.colored_count),
        format!("{} {}", label.apply_to("BBCode len:"), report.markup_len),
        format!("{} {}", report.budget_label(), badge),
        format!("{} {}", label.apply_to("Can add:"), report.can_add),
    ];
    lines.join("\n")
}

/// Counters for `inspect`.
pub fn format_inspect(glyphs: &[PreviewGlyph], markup_len: usize) -> String {
    let colored = glyphs.iter().filter(|g| g.color.is_some()).count();
    let label = Style::new().for_stderr().dim();
    [
        format!("{} {}", label.apply_to("Chars:"), glyphs.len()),
        format!("{} {}", label.apply_to("Colored:"), colored),
        format!("{} {}", label.apply_to("BBCode len:"), markup_len),
    ]
    .join("\n")
}

/// One line describing what happened to a copy request.
pub fn format_copy(outcome: &CopyOutcome) -> String {
    match outcome {
        CopyOutcome::Copied => Style::new()
            .for_stderr()
            .green()
            .apply_to("Copied BBCode ✓")
            .to_string(),
        CopyOutcome::Manual { reason } => format!(
            "{} ({}). The markup is on stdout: copy it manually.",
            Style::new()
                .for_stderr()
                .yellow()
                .apply_to("Clipboard unavailable"),
            reason
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbgrad_core::{Color, Session};
    use console::strip_ansi_codes;

    fn report(text: &str, budget: usize) -> Report {
        let mut session = Session::new().with_budget(budget);
        session.set_text(text);
        session.render()
    }

    #[test]
    fn stats_within_budget() {
        let stats = format_stats(&report("Hello", 600));
        assert_eq!(
            strip_ansi_codes(&stats),
            "Chars: 5\nColored: 5\nBBCode len: 120\nOutput: 120 / 600 ok\nCan add: 20"
        );
    }

    #[test]
    fn stats_over_budget() {
        let stats = format_stats(&report("Hello", 100));
        let plain = strip_ansi_codes(&stats);
        assert!(plain.contains("Output: 120 / 100 over"));
        assert!(plain.ends_with("Can add: 0"));
    }

    #[test]
    fn inspect_counts() {
        let glyphs = [
            PreviewGlyph { ch: 'a', color: Some(Color::WHITE) },
            PreviewGlyph { ch: ' ', color: None },
        ];
        assert_eq!(
            strip_ansi_codes(&format_inspect(&glyphs, 26)),
            "Chars: 2\nColored: 1\nBBCode len: 26"
        );
    }

    #[test]
    fn copy_messages() {
        assert!(strip_ansi_codes(&format_copy(&CopyOutcome::Copied)).starts_with("Copied BBCode"));
        let manual = format_copy(&CopyOutcome::Manual {
            reason: "no xclip".into(),
        });
        assert!(strip_ansi_codes(&manual).contains("(no xclip)"));
    }
}
