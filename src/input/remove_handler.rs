//! Modal handler for removing a batch entry
//!
//! Pushed onto the stack by the remove command. Consumes exactly one key:
//! a digit 1-5 removes that entry, anything else cancels the mode.

use super::{HandlerAction, KeyHandler};
use crate::state::State;
use crate::Result;
use log::debug;

/// One-shot handler selecting the entry to delete
pub struct RemoveHandler;

impl RemoveHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RemoveHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyHandler for RemoveHandler {
    fn process(&mut self, _key: &[u8]) -> Result<HandlerAction> {
        // This shouldn't be called directly - use process_with_context instead
        Ok(HandlerAction::Handled)
    }

    fn process_with_context(&mut self, key: &[u8], state: &mut State) -> Result<HandlerAction> {
        match key {
            [d @ b'1'..=b'5'] => {
                let index = (d - b'1') as usize;
                debug!("RemoveHandler: removing entry {}", index + 1);
                state.remove_code(index);
            }
            _ => {
                debug!("RemoveHandler: cancelled");
                state.set_status("remove cancelled");
            }
        }
        // One-shot: leave the stack either way
        Ok(HandlerAction::Remove)
    }
}
