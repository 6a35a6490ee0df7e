//! Interactive secret generator panel.

mod widget;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event};
use crossterm::queue;
use tracing::info;

use crate::clipboard::SystemClipboard;
use crate::config::Configuration;
use crate::error::Result;
use crate::rand::{self, Rand};
use crate::terminal::{RESET, ScreenGuard};
use crate::theme::{ColorSchemeQuery, Palette};

use widget::{LoopAction, Widget};

/// Redraw interval when no acknowledgment is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Run the panel until the user quits.
pub fn run(config: Configuration, scheme: &dyn ColorSchemeQuery) -> Result<()> {
    let mut widget = Widget::new(config, Rand::new(), SystemClipboard::new(), scheme);
    info!(entropy = rand::entropy_source(), "starting interactive panel");

    let _screen = ScreenGuard::new()?;
    let mut out = io::stdout();

    loop {
        let now = Instant::now();
        widget.tick(now);
        draw(&mut out, &widget.render(), widget.palette())?;

        // Wake exactly when the "Copied!" label is due to clear.
        let timeout = widget
            .next_deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now));
        if !event::poll(timeout)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && let LoopAction::Break = widget.handle_key(key, Instant::now())
        {
            break;
        }
    }

    info!("panel closed");
    Ok(())
}

fn draw(out: &mut impl Write, lines: &[String], palette: &Palette) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;
    for line in lines {
        // \x1b[K fills the rest of the row with the theme background
        write!(out, "{}{}{}\x1b[K\r\n", palette.background, palette.text, line)?;
    }
    write!(out, "{}{}\x1b[J{RESET}", palette.background, palette.text)?;
    out.flush()
}
