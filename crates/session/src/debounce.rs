//! Submit guard for coalescing rapid filter changes.
//!
//! A helper for interactive front ends that submit on every keystroke. The
//! one-shot `cibaria` commands apply a single submission and do not need it.

use std::time::{Duration, Instant};

/// Window used by the recipe filter form
pub const DEFAULT_SUBMIT_WINDOW: Duration = Duration::from_millis(300);

/// Lets a submission through only if none was accepted within the window.
///
/// Rejected attempts do not move the window.
#[derive(Debug, Clone)]
pub struct SubmitGuard {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl SubmitGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Try to submit at `now`; true if the submission should proceed
    pub fn try_acquire_at(&mut self, now: Instant) -> bool {
        let ready = match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) >= self.window,
            None => true,
        };
        if ready {
            self.last_accepted = Some(now);
        }
        ready
    }

    pub fn try_acquire(&mut self) -> bool {
        self.try_acquire_at(Instant::now())
    }
}

impl Default for SubmitGuard {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_WINDOW)
    }
}
