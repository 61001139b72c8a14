//! Trailing-edge debouncing.
//!
//! A [`Debouncer`] holds at most one deadline. Every [`Debouncer::arm`] replaces
//! the previous deadline, so a burst of events fires once, `delay` after the
//! last event in the burst. The caller supplies time, which keeps the debouncer
//! free of clocks, threads and runtimes: an event loop asks for
//! [`Debouncer::deadline`], sleeps until then and calls [`Debouncer::poll`].

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an event at `at`, cancelling any pending deadline.
    pub fn arm(&mut self, at: Instant) {
        self.deadline = Some(at + self.delay);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` exactly once per armed deadline, when `now` has reached it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fire a pending deadline immediately.
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}
