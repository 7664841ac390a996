//! Where text comes from: an argument or piped stdin.

use std::io::{self, IsTerminal, Read};

use anyhow::{bail, Context as _};

/// Abstraction over stdin so tests can simulate piping.
pub trait StdinReader {
    /// `true` when stdin is interactive rather than piped.
    fn is_terminal(&self) -> bool;

    fn read_to_string(&self) -> io::Result<String>;
}

/// Real stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Mock stdin for tests.
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: String,
}

impl MockStdin {
    /// Interactive stdin with nothing piped.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: String::new(),
        }
    }

    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            is_terminal: false,
            content: content.into(),
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }
}

/// Resolves the input text: the argument if given, else piped stdin.
///
/// One trailing line break from stdin is dropped, since `echo` and editors
/// add it and it is not part of the text.
pub fn resolve_text(arg: Option<String>, stdin: &dyn StdinReader, what: &str) -> anyhow::Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    if stdin.is_terminal() {
        bail!("no {what} given: pass it as an argument or pipe it on stdin");
    }
    let mut text = stdin
        .read_to_string()
        .with_context(|| format!("failed to read {what} from stdin"))?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    tracing::debug!(chars = text.chars().count(), "read {} from stdin", what);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins_over_stdin() {
        let text = resolve_text(Some("arg".into()), &MockStdin::piped("piped"), "text").unwrap();
        assert_eq!(text, "arg");
    }

    #[test]
    fn reads_piped_stdin() {
        let text = resolve_text(None, &MockStdin::piped("hello\n"), "text").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn strips_one_crlf() {
        let text = resolve_text(None, &MockStdin::piped("a\n\r\n"), "text").unwrap();
        assert_eq!(text, "a\n");
    }

    #[test]
    fn keeps_inner_whitespace() {
        let text = resolve_text(None, &MockStdin::piped("  a b  "), "text").unwrap();
        assert_eq!(text, "  a b  ");
    }

    #[test]
    fn terminal_without_argument_fails() {
        let err = resolve_text(None, &MockStdin::terminal(), "markup").unwrap_err();
        assert!(err.to_string().contains("no markup given"));
    }

    #[test]
    fn empty_pipe_is_empty_text() {
        assert_eq!(resolve_text(None, &MockStdin::piped(""), "text").unwrap(), "");
    }
}
