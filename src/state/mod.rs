//! Application state management
//!
//! The State struct is the central data structure for the pad, holding
//! configuration, the capture buffer, the code batch, the submission sink,
//! and UI flags. All mutation happens synchronously inside the event loop.

pub mod config;

use crate::batch::{AddOutcome, CodeBatch, BATCH_CAPACITY};
use crate::input::{HandlerAction, HandlerStack, KeyHandler, ScanCapture, ScanKeyHandler};
use crate::submit::{self, SubmitSink};
use crate::Result;
use config::Config;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Main application state for the entry pad
pub struct State {
    /// Configuration loaded from ~/.scanpad.cfg
    pub config: Config,

    /// Pending capture buffer with its debounce deadline
    pub capture: ScanCapture,

    /// Accepted codes, capacity 5, insertion-ordered and distinct
    pub batch: CodeBatch,

    /// Key handler stack for modal input (remove mode)
    pub handlers: HandlerStack,

    /// Transient status line shown under the list
    pub status: Option<String>,

    /// Set by the quit command; the event loop exits when it sees this
    pub quit: bool,

    /// Terminal bell requested for the next render
    bell_pending: bool,

    /// Submission sink receiving completed batches
    sink: Box<dyn SubmitSink>,
}

impl State {
    /// Create application state from the on-disk configuration
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        info!("Configuration loaded from {:?}", config.path());
        info!("  Debounce window: {} ms", config.debounce_ms());
        info!("  Manual edit: {}", config.manual_edit());

        let sink = submit::create_sink(config.submit_command());
        Ok(Self::with_sink(config, sink))
    }

    /// Create state with an explicit sink
    ///
    /// Tests inject a recording sink here.
    pub fn with_sink(config: Config, sink: Box<dyn SubmitSink>) -> Self {
        let window = config.debounce();
        Self {
            config,
            capture: ScanCapture::new(window),
            batch: CodeBatch::new(),
            handlers: HandlerStack::new(),
            status: None,
            quit: false,
            bell_pending: false,
            sink,
        }
    }

    /// Dispatch one key sequence
    ///
    /// Modal handlers get the key first; otherwise the default handler
    /// routes it. The top handler is popped for the duration of the call
    /// because it needs mutable access to the rest of the state, and only
    /// pushed back if it wants to stay active.
    pub fn dispatch_key(
        &mut self,
        key: &[u8],
        default_handler: &mut ScanKeyHandler,
    ) -> Result<HandlerAction> {
        if let Some(mut modal) = self.handlers.pop() {
            let action = modal.process_with_context(key, self)?;
            if action != HandlerAction::Remove {
                self.handlers.push(modal);
            }
            return Ok(action);
        }

        default_handler.process_key(key, self)
    }

    /// Feed a completed candidate to the batch
    ///
    /// Rejections are silent no-ops; the outcome only drives the status
    /// line and the debug log. The capture buffer was already cleared by
    /// the completion that produced the candidate, so the pending display
    /// is empty either way.
    pub fn accept_candidate(&mut self, candidate: String) {
        match self.batch.add(&candidate) {
            AddOutcome::Added => {
                if self.config.bell() {
                    self.bell_pending = true;
                }
                self.set_status(format!("added {}", candidate));
            }
            AddOutcome::Invalid => {
                debug!("Candidate '{}' discarded (not all digits)", candidate);
            }
            AddOutcome::Duplicate => {
                self.set_status(format!("duplicate {} ignored", candidate));
            }
            AddOutcome::Full => {
                self.set_status(format!("batch full, {} ignored", candidate));
            }
        }
    }

    /// Remove the batch entry at `index` (zero-based)
    ///
    /// The input line keeps the cursor after the redraw, so focus returns
    /// to the entry field without user interaction.
    pub fn remove_code(&mut self, index: usize) {
        if self.batch.remove(index) {
            self.set_status(format!("removed entry {}", index + 1));
        } else {
            debug!("Remove of entry {} was a no-op", index + 1);
        }
    }

    /// Submit the batch if it holds exactly five codes
    ///
    /// A premature submit is a silent no-op.
    pub fn submit(&mut self) -> Result<()> {
        if self.batch.submit(self.sink.as_mut())? {
            self.set_status(format!("batch of {} codes submitted", BATCH_CAPACITY));
        }
        Ok(())
    }

    /// Complete the capture buffer if its debounce deadline has elapsed
    ///
    /// Called at the top of each event loop iteration.
    pub fn run_expired(&mut self, now: Instant) {
        if let Some(candidate) = self.capture.poll(now) {
            debug!("Debounce window elapsed, candidate '{}'", candidate);
            self.accept_candidate(candidate);
        }
    }

    /// Time until the next debounce deadline
    ///
    /// Used to set the timeout for select/poll.
    pub fn time_until_deadline(&self, now: Instant) -> Option<Duration> {
        self.capture.time_until_deadline(now)
    }

    /// Set the transient status line
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Consume the pending bell request
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}
