//! Scan capture buffer with debounce completion
//!
//! A keyboard-wedge scanner types its digits within single-digit
//! milliseconds and usually finishes with Enter. The buffer completes on
//! that explicit terminator or, failing one, when an idle window elapses
//! after the last keystroke - whichever fires first. Each new keystroke
//! cancels and re-arms the pending deadline, so there is at most one
//! pending completion per buffer.

use log::trace;
use std::time::{Duration, Instant};

/// Transient accumulator for one candidate code
pub struct ScanCapture {
    /// Characters received since the last completion
    buffer: String,

    /// When the armed buffer completes if no further key arrives
    deadline: Option<Instant>,

    /// Idle window after the last keystroke
    window: Duration,
}

impl ScanCapture {
    pub fn new(window: Duration) -> Self {
        Self {
            buffer: String::new(),
            deadline: None,
            window,
        }
    }

    /// Append a printable character and re-arm the deadline
    pub fn push_char(&mut self, ch: char, now: Instant) {
        self.buffer.push(ch);
        self.deadline = Some(now + self.window);
        trace!("Capture buffer now '{}'", self.buffer);
    }

    /// Explicit terminator: take the buffer as a candidate
    ///
    /// Returns None if nothing was buffered (a bare Enter).
    pub fn terminate(&mut self) -> Option<String> {
        self.deadline = None;
        if self.buffer.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.buffer))
    }

    /// Take the buffer as a candidate if the armed deadline has elapsed
    ///
    /// Called at the top of each event loop iteration.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.buffer.is_empty() {
                    None
                } else {
                    Some(std::mem::take(&mut self.buffer))
                }
            }
            _ => None,
        }
    }

    /// Time until the armed deadline, if any
    ///
    /// Used to bound the event loop's poll timeout.
    pub fn time_until_deadline(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Delete the last buffered character (manual editing)
    pub fn backspace(&mut self) {
        if self.buffer.pop().is_some() {
            trace!("Backspace, buffer now '{}'", self.buffer);
        }
        if self.buffer.is_empty() {
            self.deadline = None;
        }
    }

    /// Discard the whole pending buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.deadline = None;
    }

    /// Current pending text, mirrored by the input line display
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// True while a completion deadline is armed (drives the indicator)
    pub fn is_scanning(&self) -> bool {
        self.deadline.is_some()
    }
}
