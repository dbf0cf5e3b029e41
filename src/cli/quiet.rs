//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global quiet mode flag - suppresses the banner, warnings and prompts
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (interactive)
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// Check if stderr is a tty, i.e. whether colored messages make sense
pub fn stderr_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDERR_FILENO) == 1 }
}

/// Returns true if we should skip interactive prompts.
/// True when quiet mode is enabled OR stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
