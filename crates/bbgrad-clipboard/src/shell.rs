use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use wait_timeout::ChildExt;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command is available on this platform")]
    Unsupported,
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error talking to `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("`{0}` failed with status {1}")]
    CommandFailed(String, ExitStatus),
}

/// Runs a shell command with `input` on its stdin and waits for it to exit.
///
/// The command's stdout is discarded. If `timeout` elapses first the process
/// is killed.
pub fn pipe_to_command(
    command_str: &str,
    input: &str,
    timeout: Duration,
) -> Result<(), ClipboardError> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_str);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_str);
        c
    };

    cmd.stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let io_err = |source| ClipboardError::Io {
        command: command_str.to_string(),
        source,
    };

    let mut child = cmd.spawn().map_err(|source| ClipboardError::Spawn {
        command: command_str.to_string(),
        source,
    })?;

    // Stdin is fed from its own thread so the timeout also covers a command
    // that never drains the pipe. Dropping stdin closes it and signals EOF.
    let stdin = child.stdin.take();
    let bytes = input.as_bytes().to_vec();
    let writer = thread::spawn(move || match stdin {
        Some(mut stdin) => stdin.write_all(&bytes),
        None => Ok(()),
    });

    match child.wait_timeout(timeout).map_err(io_err)? {
        Some(status) if status.success() => match writer.join() {
            Ok(Ok(())) => Ok(()),
            // Exited before reading everything: the text never fully arrived.
            Ok(Err(e)) => Err(io_err(e)),
            Err(_) => Err(io_err(std::io::Error::other("stdin writer panicked"))),
        },
        Some(status) => Err(ClipboardError::CommandFailed(command_str.to_string(), status)),
        None => {
            child.kill().map_err(io_err)?;
            // Reap so the killed process does not linger. The writer thread is
            // left detached: a grandchild may still hold the pipe open.
            let _ = child.wait();
            Err(ClipboardError::Timeout(command_str.to_string(), timeout))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    const SHORT: Duration = Duration::from_secs(5);

    #[test]
    fn pipes_input_to_command() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let cmd = format!("cat > '{}'", out.display());
        pipe_to_command(&cmd, "[COLOR=#FF0000]a[/COLOR]", SHORT).unwrap();
        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            "[COLOR=#FF0000]a[/COLOR]"
        );
    }

    #[test]
    fn timeout_kills_command() {
        let start = std::time::Instant::now();
        let res = pipe_to_command("sleep 2", "", Duration::from_millis(300));
        assert!(matches!(res, Err(ClipboardError::Timeout(_, _))));
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn timeout_covers_undrained_stdin() {
        let start = std::time::Instant::now();
        let big = "a".repeat(300_000);
        let res = pipe_to_command("sleep 3", &big, Duration::from_millis(200));
        assert!(matches!(res, Err(ClipboardError::Timeout(_, _))));
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn early_exit_with_unread_input_is_an_error() {
        let big = "a".repeat(300_000);
        let res = pipe_to_command("true", &big, SHORT);
        assert!(matches!(res, Err(ClipboardError::Io { .. })));
    }

    #[test]
    fn failure_includes_command() {
        match pipe_to_command("exit 3", "", SHORT) {
            Err(ClipboardError::CommandFailed(cmd, status)) => {
                assert_eq!(cmd, "exit 3");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn missing_program_fails() {
        let res = pipe_to_command("definitely-not-a-clipboard-tool", "x", SHORT);
        assert!(matches!(res, Err(ClipboardError::CommandFailed(_, _))));
    }
}
