/// The platform's copy-to-clipboard command (macOS).
#[cfg(target_os = "macos")]
pub fn default_command() -> Option<&'static str> {
    Some("pbcopy")
}

/// The platform's copy-to-clipboard command (Linux, X11).
#[cfg(target_os = "linux")]
pub fn default_command() -> Option<&'static str> {
    Some("xclip -selection clipboard")
}

/// Returns None on unsupported platforms.
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn default_command() -> Option<&'static str> {
    None
}
