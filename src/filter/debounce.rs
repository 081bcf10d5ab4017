//! Cancellable quiet-window timer
//!
//! `Debouncer` keeps only the most recent value pushed into it. A value is
//! released by [`Debouncer::settled`] once no newer value has arrived for the
//! quiet window. Superseded values are dropped, never released.
//!
//! `settled` is cancel-safe: dropping the future (for example the losing
//! branch of a `tokio::select!` that also listens for the next keystroke)
//! leaves the pending value in place.

use std::time::Duration;
use tokio::time::Instant;

/// Quiet window applied when none is configured
pub const DEFAULT_QUIET: Duration = Duration::from_millis(500);

/// Shortest accepted quiet window
pub const MIN_QUIET: Duration = Duration::from_millis(250);

/// Longest accepted quiet window
pub const MAX_QUIET: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Keeps the latest value until its quiet window has elapsed
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer; the window is clamped to 250–500 ms
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet: quiet.clamp(MIN_QUIET, MAX_QUIET),
            pending: None,
        }
    }

    /// Quiet window in effect
    #[must_use]
    pub const fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Replace the pending value and restart the quiet window
    pub fn push(&mut self, value: T) {
        self.pending = Some(Pending {
            value,
            deadline: Instant::now() + self.quiet,
        });
    }

    /// Whether a value is waiting for its window to elapse
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without releasing it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    /// Release the pending value immediately
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }

    /// Wait for the quiet window of the pending value, then release it
    ///
    /// Never resolves while nothing is pending.
    pub async fn settled(&mut self) -> T {
        let Some(deadline) = self.pending.as_ref().map(|pending| pending.deadline) else {
            return std::future::pending().await;
        };

        tokio::time::sleep_until(deadline).await;

        match self.pending.take() {
            Some(pending) => pending.value,
            None => std::future::pending().await,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET)
    }
}
