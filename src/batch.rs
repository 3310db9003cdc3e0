//! Code collection for scanned UPC batches
//!
//! The batch is the ordered, deduplicated set of accepted codes. It is
//! capacity-bounded at five entries; submission is only possible when the
//! batch is exactly full.

use crate::submit::SubmitSink;
use crate::Result;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of codes required for a submission
pub const BATCH_CAPACITY: usize = 5;

/// A code is digits only; checksum correctness is not validated
static CODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "^\d+$" is always a valid pattern
    Regex::new(r"^\d+$").expect("Failed to compile code pattern")
});

/// Check whether a candidate string is an acceptable code
pub fn is_valid_code(candidate: &str) -> bool {
    CODE_PATTERN.is_match(candidate)
}

/// Outcome of attempting to add a candidate to the batch
///
/// Rejections are silent at the UI level; the variant names the reason so
/// callers can log it or show it in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Candidate appended to the batch
    Added,
    /// Candidate is empty or contains a non-digit character
    Invalid,
    /// Candidate already present in the batch
    Duplicate,
    /// Batch already holds the full five entries
    Full,
}

/// Ordered, deduplicated collection of accepted codes
#[derive(Debug, Default)]
pub struct CodeBatch {
    codes: Vec<String>,
}

impl CodeBatch {
    pub fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// Attempt to append a candidate code
    ///
    /// Capacity, uniqueness, and digits-only are all enforced here so the
    /// batch invariants hold no matter where the candidate came from.
    pub fn add(&mut self, candidate: &str) -> AddOutcome {
        if self.codes.len() >= BATCH_CAPACITY {
            debug!("Batch full, rejecting '{}'", candidate);
            return AddOutcome::Full;
        }
        if !is_valid_code(candidate) {
            debug!("Invalid candidate rejected: '{}'", candidate);
            return AddOutcome::Invalid;
        }
        if self.codes.iter().any(|c| c == candidate) {
            debug!("Duplicate candidate ignored: '{}'", candidate);
            return AddOutcome::Duplicate;
        }

        self.codes.push(candidate.to_string());
        debug!("Code added, batch now {}/{}", self.codes.len(), BATCH_CAPACITY);
        AddOutcome::Added
    }

    /// Remove the entry at `index`, preserving the order of the rest
    ///
    /// Out-of-bounds indices are a no-op returning false.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.codes.len() {
            debug!("Remove index {} out of range ({})", index, self.codes.len());
            return false;
        }
        let removed = self.codes.remove(index);
        debug!("Removed '{}', batch now {}/{}", removed, self.codes.len(), BATCH_CAPACITY);
        true
    }

    /// True when the batch holds exactly the five entries submission requires
    pub fn is_ready(&self) -> bool {
        self.codes.len() == BATCH_CAPACITY
    }

    /// Submit the batch to the sink
    ///
    /// No-op returning false unless exactly five entries are held. The batch
    /// is only cleared after the sink accepted it, so a failing sink leaves
    /// the codes intact.
    pub fn submit(&mut self, sink: &mut dyn SubmitSink) -> Result<bool> {
        if !self.is_ready() {
            debug!("Submit rejected with {}/{} codes", self.codes.len(), BATCH_CAPACITY);
            return Ok(false);
        }

        sink.submit(&self.codes)?;
        self.codes.clear();
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Accepted codes in insertion order
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}
