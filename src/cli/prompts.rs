//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use crossterm::style::{Color, Stylize};

use super::quiet;

fn colored(msg: &str, color: Color) -> String {
    if quiet::stderr_is_tty() {
        msg.with(color).to_string()
    } else {
        msg.to_string()
    }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", colored(msg, Color::Yellow));
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", colored(msg, Color::Red));
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} password(s) COPIED TO CLIPBOARD ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Prompt user when the clipboard cannot be used. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!();
    false
}
