//! Quiet-period debounce for the search input.
//!
//! Keystrokes overwrite the pending query and restart the clock; the event
//! loop's periodic tick polls [`SearchDebounce::take_ready`] and fires the
//! search once the input has been stable for the quiet period. Clearing
//! the input goes through [`SearchDebounce::cancel`] so the caller can
//! drop back to headlines immediately instead of waiting out the delay.

use std::time::Duration;
use tokio::time::Instant;

/// How long the input must be stable before a search is issued.
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct SearchDebounce {
    quiet_period: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    query: String,
    last_keystroke: Instant,
}

impl SearchDebounce {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Record a keystroke. Replaces any pending query; only the most
    /// recent one survives.
    pub fn note(&mut self, query: impl Into<String>) {
        self.pending = Some(Pending {
            query: query.into(),
            last_keystroke: Instant::now(),
        });
    }

    /// Drop the pending query without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Return the pending query once the quiet period has elapsed since
    /// the last keystroke, consuming it. Returns None while the user is
    /// still typing (or nothing is pending).
    pub fn take_ready(&mut self) -> Option<String> {
        let elapsed = self.pending.as_ref()?.last_keystroke.elapsed();
        if elapsed >= self.quiet_period {
            self.pending.take().map(|p| p.query)
        } else {
            None
        }
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new(SEARCH_QUIET_PERIOD)
    }
}
