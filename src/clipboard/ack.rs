//! Transient "copied" acknowledgment.
//!
//! Each raise gets its own scheduled clear tagged with a generation token.
//! A clear only takes effect if no newer raise happened since it was
//! scheduled, so the last copy always owns the full window.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::trace;

pub const ACK_WINDOW: Duration = Duration::from_millis(1000);

struct PendingClear {
    token: u64,
    due: Instant,
}

#[derive(Default)]
pub struct Acknowledgment {
    active: bool,
    token: u64,
    pending: VecDeque<PendingClear>,
}

impl Acknowledgment {
    pub fn raise(&mut self, now: Instant) {
        self.token = self.token.wrapping_add(1);
        self.active = true;
        self.pending.push_back(PendingClear {
            token: self.token,
            due: now + ACK_WINDOW,
        });
    }

    /// Fire every clear due at or before `now`.
    pub fn tick(&mut self, now: Instant) {
        while let Some(next) = self.pending.front() {
            if next.due > now {
                break;
            }
            let Some(fired) = self.pending.pop_front() else {
                break;
            };
            if fired.token == self.token {
                self.active = false;
            } else {
                trace!(stale = fired.token, current = self.token, "ignoring stale clear");
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// When the next scheduled clear fires, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.front().map(|p| p.due)
    }
}
