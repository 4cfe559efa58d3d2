//! Transient "copied" indicator for the code viewer.

use std::time::{Duration, Instant};

pub const DEFAULT_WINDOW: Duration = Duration::from_secs(2);

/// Shows "copied" for a fixed window after each trigger. A new trigger
/// restarts the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    window: Duration,
    copied_at: Option<Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl CopyFeedback {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            copied_at: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn trigger(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.window)
    }

    /// Drop expired state. Returns true if the indicator just turned off.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.copied_at.is_some() && !self.is_copied(now) {
            self.copied_at = None;
            return true;
        }
        false
    }
}
