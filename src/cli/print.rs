//! Non-interactive mode: write secrets to stdout.

use std::io::{self, BufWriter, Write};
use std::time::Instant;

use tracing::debug;

use super::{Cli, prompts};
use crate::clipboard::{ClipboardController, ClipboardSink, SystemClipboard};
use crate::config::{Configuration, ConfigurationState};
use crate::error::Result;
use crate::rand::{self, Rand, RandomSource};

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.configuration()?;
    debug!(entropy = rand::entropy_source(), count = cli.number, "print mode");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let clipboard = cli.copy.then(SystemClipboard::new);
    write_secrets(&mut out, config, Rand::new(), cli.number, clipboard)
}

/// Write `count` secrets, one per line, and optionally copy the last one.
fn write_secrets<W, R, C>(
    out: &mut W,
    config: Configuration,
    rng: R,
    count: usize,
    clipboard: Option<C>,
) -> Result<()>
where
    W: Write,
    R: RandomSource,
    C: ClipboardSink,
{
    let mut state = ConfigurationState::new(config, rng);
    if state.pool().is_empty() {
        prompts::warn("No character classes enabled; secrets will be empty.");
    }

    for i in 0..count {
        if i > 0 {
            state.regenerate();
        }
        writeln!(out, "{}", state.secret().as_str())?;
    }
    out.flush()?;

    if let Some(sink) = clipboard {
        ClipboardController::new(sink).copy(state.secret(), Instant::now())?;
        prompts::clipboard_copied();
    }
    Ok(())
}
