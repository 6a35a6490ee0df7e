//! Messages for print mode. Kept on stderr so stdout carries only secrets.

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow)
pub fn warn(msg: &str) {
    eprintln!("{YELLOW}{msg}{RESET}");
}

/// Print clipboard copied confirmation
pub fn clipboard_copied() {
    eprintln!("*** -COPIED TO CLIPBOARD- ***");
}
