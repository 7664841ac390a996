//! Clipboard writers.
//!
//! [`ClipboardWriter`] is the seam between the CLI and the operating system.
//! [`SystemClipboard`] pipes text into a platform command; [`MockClipboard`]
//! records what was copied so tests never touch the real clipboard.

use std::sync::Mutex;
use std::time::Duration;

use crate::platform::default_command;
use crate::shell::{pipe_to_command, ClipboardError};

/// How long a clipboard command may run before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Abstraction over clipboard access.
pub trait ClipboardWriter: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by a shell command such as `pbcopy`.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: Option<String>,
    timeout: Duration,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    /// Uses the platform's default command, if there is one.
    pub fn new() -> Self {
        Self {
            command: default_command().map(str::to_string),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Uses a custom command, e.g. `wl-copy` on Wayland.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let command = self.command.as_deref().ok_or(ClipboardError::Unsupported)?;
        tracing::debug!(command, bytes = text.len(), "copying to clipboard");
        pipe_to_command(command, text, self.timeout)
    }
}

/// Mock clipboard for testing.
#[derive(Debug, Default)]
pub struct MockClipboard {
    copied: Mutex<Vec<String>>,
    fail: bool,
}

impl MockClipboard {
    /// A clipboard that accepts every write.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail as unsupported.
    pub fn failing() -> Self {
        Self {
            copied: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Everything written so far, oldest first.
    pub fn copied(&self) -> Vec<String> {
        self.copied
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// The most recent write.
    pub fn last(&self) -> Option<String> {
        self.copied().pop()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unsupported);
        }
        if let Ok(mut copied) = self.copied.lock() {
            copied.push(text.to_string());
        }
        Ok(())
    }
}

/// What happened to a copy request.
#[derive(Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text is on the clipboard.
    Copied,
    /// Copying failed; the caller should offer the text for manual copy.
    Manual { reason: String },
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }
}

/// Copies `text`, turning any failure into [`CopyOutcome::Manual`].
///
/// Empty text is never copied.
pub fn copy_or_fallback(clipboard: &dyn ClipboardWriter, text: &str) -> CopyOutcome {
    if text.is_empty() {
        return CopyOutcome::Manual {
            reason: "nothing to copy".to_string(),
        };
    }
    match clipboard.write(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed, falling back to manual copy");
            CopyOutcome::Manual {
                reason: e.to_string(),
            }
        }
    }
}
