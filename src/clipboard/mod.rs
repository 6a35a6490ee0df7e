//! Clipboard output with a timed "copied" acknowledgment.

mod ack;

use std::time::Instant;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::secret::Secret;

use ack::Acknowledgment;
#[cfg(test)]
pub(crate) use ack::ACK_WINDOW;

/// Somewhere secrets can be written as text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, opened on first write.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| Error::ClipboardUnavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        let Some(ctx) = self.ctx.as_mut() else {
            return Err(Error::ClipboardUnavailable("no clipboard context".into()));
        };
        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::ClipboardWrite(e.to_string()))
    }
}

pub struct ClipboardController<C> {
    sink: C,
    ack: Acknowledgment,
}

impl<C: ClipboardSink> ClipboardController<C> {
    pub fn new(sink: C) -> Self {
        Self {
            sink,
            ack: Acknowledgment::default(),
        }
    }

    /// Write `secret` to the clipboard and acknowledge for `ACK_WINDOW`.
    /// A failed write leaves the acknowledgment untouched.
    pub fn copy(&mut self, secret: &Secret, now: Instant) -> Result<()> {
        if let Err(e) = self.sink.write_text(secret.as_str()) {
            warn!(error = %e, "clipboard copy failed");
            return Err(e);
        }
        info!(chars = secret.len(), "secret copied to clipboard");
        self.ack.raise(now);
        Ok(())
    }

    pub fn tick(&mut self, now: Instant) {
        self.ack.tick(now);
    }

    pub fn acknowledged(&self) -> bool {
        self.ack.is_active()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.ack.next_deadline()
    }

    #[cfg(test)]
    pub(crate) fn sink(&self) -> &C {
        &self.sink
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::time::Duration;

    /// In-memory clipboard; `fail` makes every write error.
    #[derive(Default)]
    pub(crate) struct MemoryClipboard {
        pub(crate) contents: Option<String>,
        pub(crate) writes: usize,
        pub(crate) fail: bool,
    }

    impl ClipboardSink for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::ClipboardUnavailable("no display".into()));
            }
            self.contents = Some(text.to_owned());
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn copy_writes_and_acknowledges() {
        let t0 = Instant::now();
        let mut cb = ClipboardController::new(MemoryClipboard::default());
        cb.copy(&Secret::new("abc!".into()), t0).unwrap();

        assert_eq!(cb.sink.contents.as_deref(), Some("abc!"));
        assert!(cb.acknowledged());

        cb.tick(t0 + ACK_WINDOW);
        assert!(!cb.acknowledged());
    }

    #[test]
    fn copies_500ms_apart_hold_until_second_window_ends() {
        let t0 = Instant::now();
        let secret = Secret::new("xyz".into());
        let mut cb = ClipboardController::new(MemoryClipboard::default());

        cb.copy(&secret, t0).unwrap();
        let t1 = t0 + Duration::from_millis(500);
        cb.copy(&secret, t1).unwrap();

        for step in (0..1500).step_by(50) {
            cb.tick(t0 + Duration::from_millis(step));
            assert!(cb.acknowledged(), "cleared early at {step}ms");
        }
        cb.tick(t1 + ACK_WINDOW);
        assert!(!cb.acknowledged());
        assert_eq!(cb.sink.writes, 2);
    }

    #[test]
    fn failed_write_is_reported_without_acknowledging() {
        let sink = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let mut cb = ClipboardController::new(sink);
        let err = cb.copy(&Secret::new("abc".into()), Instant::now());
        assert!(matches!(err, Err(Error::ClipboardUnavailable(_))));
        assert!(!cb.acknowledged());
        assert!(cb.next_deadline().is_none());
    }
}
