//! Copy text to the system clipboard.
//!
//! Text is piped into a platform command (`pbcopy` on macOS,
//! `xclip -selection clipboard` on Linux) with a timeout. Failures are
//! reported, never fatal: [`copy_or_fallback`] turns them into
//! [`CopyOutcome::Manual`] so the caller can show the text for manual copy.
//!
//! ```rust
//! use bbgrad_clipboard::{copy_or_fallback, CopyOutcome, MockClipboard};
//!
//! let clipboard = MockClipboard::new();
//! assert_eq!(copy_or_fallback(&clipboard, "[COLOR=#FF0000]a[/COLOR]"), CopyOutcome::Copied);
//! ```

pub mod platform;
pub mod shell;
pub mod writer;

pub use platform::default_command;
pub use shell::{pipe_to_command, ClipboardError};
pub use writer::{
    copy_or_fallback, ClipboardWriter, CopyOutcome, MockClipboard, SystemClipboard,
    DEFAULT_TIMEOUT,
};
