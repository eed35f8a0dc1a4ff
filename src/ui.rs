//! Stderr reporting for the release note binaries.
//!
//! Stdout carries only tool output, so every message here goes to stderr.

use std::io::IsTerminal;

/// Whether stderr output gets ANSI colors. Shared with the log subscriber.
pub fn stderr_color() -> bool {
    std::io::stderr().is_terminal()
}

/// Format an error line with an `ERROR:` prefix, red when `color` is set.
pub fn format_error(message: &str, color: bool) -> String {
    if color {
        format!("\x1b[31mERROR:\x1b[0m {}", message)
    } else {
        format!("ERROR: {}", message)
    }
}

/// Print an error message, in red when stderr is a terminal.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message, stderr_color()));
}

/// Print an error and its cause chain, one cause per line.
pub fn display_error_chain(err: &anyhow::Error) {
    display_error(&err.to_string());
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}
