//! Scan input debouncing
//!
//! Pistol scanners type a code one character at a time. Each input event
//! pushes the pending submission back by a fixed delay; only the value
//! present when the delay finally elapses is submitted, once.
//!
//! The debouncer is a plain value driven by the caller's clock, so the
//! event loop owns the only timer and tests need no sleeping.

use std::time::{Duration, Instant};

/// Default quiet period before a scan is submitted
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Single-slot cancellable delayed submission
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    buffer: String,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            buffer: String::new(),
            deadline: None,
        }
    }

    /// Quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Text typed since the last submission
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// When the pending value will be submitted, if anything is pending
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Record an input event
    ///
    /// Line breaks are dropped. Any pending deadline is superseded; a new one
    /// is only armed while the buffered value is non-blank.
    pub fn input(&mut self, chunk: &str, now: Instant) {
        self.buffer.extend(chunk.chars().filter(|c| !matches!(c, '\r' | '\n')));
        self.deadline = if self.buffer.trim().is_empty() {
            None
        } else {
            Some(now + self.delay)
        };
    }

    /// Take the value if its deadline has passed
    ///
    /// Returns the trimmed value and clears the input.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if deadline <= now => self.take(),
            _ => None,
        }
    }

    /// Submit whatever is pending right away (end of input)
    pub fn flush(&mut self) -> Option<String> {
        self.deadline.is_some().then(|| self.take()).flatten()
    }

    /// Drop pending input without submitting it
    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.deadline = None;
    }

    fn take(&mut self) -> Option<String> {
        let value = self.buffer.trim().to_string();
        self.cancel();
        (!value.is_empty()).then_some(value)
    }
}
