//! Trailing-edge debounce driven by caller-supplied instants

use std::time::{Duration, Instant};

/// Holds the latest payload until the quiet window has elapsed.
///
/// Every [`Debouncer::trigger`] restarts the window, so a burst of events
/// yields a single payload (the last one) from [`Debouncer::poll`].
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record an event, cancelling any pending one
    pub fn trigger(&mut self, payload: T, now: Instant) {
        self.pending = Some((now + self.window, payload));
    }

    /// Take the payload once its window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, p)| p),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending payload fires, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}
