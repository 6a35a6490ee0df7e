//! Raw mode + alternate screen RAII guard.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Guard that owns the terminal for the interactive panel and restores it
/// when dropped.
pub struct ScreenGuard {
    was_enabled: bool,
}

impl ScreenGuard {
    /// Enable raw mode, switch to the alternate screen and hide the cursor.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { was_enabled: true };
        crate::exits::set_screen_active(true);
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            guard.disable();
            return Err(e);
        }
        Ok(guard)
    }

    /// Manually restore the terminal (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let mut out = io::stdout();
            let _ = execute!(out, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            let _ = out.flush();
            crate::exits::set_screen_active(false);
            self.was_enabled = false;
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
