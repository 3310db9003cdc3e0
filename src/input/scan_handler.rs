//! Default key handler for the entry pad
//!
//! Routes printable characters into the capture buffer, terminates the
//! buffer on Enter, and dispatches pad commands (submit, remove mode,
//! clear, quit) through the keymap.

use super::{HandlerAction, KeyAction, KeyHandler};
use crate::state::State;
use crate::Result;
use log::{debug, trace};
use std::collections::HashMap;
use std::time::Instant;

/// Base handler that processes all pad key bindings
///
/// Scanner bursts and manual typing both land here; there is no second
/// listener, so a keystroke is processed exactly once.
pub struct ScanKeyHandler {
    /// Key bindings map
    keymap: HashMap<Vec<u8>, KeyAction>,
}

impl ScanKeyHandler {
    /// Create a new scan key handler
    pub fn new(keymap: HashMap<Vec<u8>, KeyAction>) -> Self {
        debug!("Creating scan key handler with {} bindings", keymap.len());
        Self { keymap }
    }

    /// Process a key with the pad's key bindings
    pub fn process_key(&mut self, key: &[u8], state: &mut State) -> Result<HandlerAction> {
        if let Some(action) = self.keymap.get(key).cloned() {
            trace!("Key action: {:?}", action);
            return self.execute_action(&action, state);
        }

        // Not a command: printable characters feed the capture buffer
        if key.len() == 1 && key[0].is_ascii_graphic() {
            state.capture.push_char(key[0] as char, Instant::now());
            return Ok(HandlerAction::Handled);
        }

        // Unrecognized escape sequence or control byte
        Ok(HandlerAction::Passthrough)
    }

    /// Execute a pad command
    fn execute_action(&mut self, action: &KeyAction, state: &mut State) -> Result<HandlerAction> {
        use KeyAction::*;

        match action {
            // Enter - complete the pending buffer as a candidate
            AcceptEntry => {
                if let Some(candidate) = state.capture.terminate() {
                    state.accept_candidate(candidate);
                }
                Ok(HandlerAction::Handled)
            }

            // Manual editing of the pending buffer
            Backspace => {
                if state.config.manual_edit() {
                    state.capture.backspace();
                } else {
                    trace!("Manual edit disabled, backspace ignored");
                }
                Ok(HandlerAction::Handled)
            }

            ClearEntry => {
                if state.config.manual_edit() {
                    state.capture.clear();
                } else {
                    trace!("Manual edit disabled, clear ignored");
                }
                Ok(HandlerAction::Handled)
            }

            // Remove mode - push the modal handler onto the stack
            RemoveMode => {
                if state.batch.is_empty() {
                    debug!("Remove mode requested on empty batch");
                    state.set_status("nothing to remove");
                } else {
                    debug!("Entering remove mode");
                    state.set_status("remove which entry? (1-5)");
                    state
                        .handlers
                        .push(Box::new(super::remove_handler::RemoveHandler::new()));
                }
                Ok(HandlerAction::Handled)
            }

            Submit => {
                state.submit()?;
                Ok(HandlerAction::Handled)
            }

            Quit => {
                debug!("Quit requested");
                state.quit = true;
                Ok(HandlerAction::Handled)
            }
        }
    }
}

impl KeyHandler for ScanKeyHandler {
    fn process(&mut self, _key: &[u8]) -> Result<HandlerAction> {
        // This shouldn't be called directly - use process_key instead
        // which needs state access
        trace!("ScanKeyHandler::process called (passthrough)");
        Ok(HandlerAction::Passthrough)
    }

    fn process_with_context(&mut self, key: &[u8], state: &mut State) -> Result<HandlerAction> {
        self.process_key(key, state)
    }
}
