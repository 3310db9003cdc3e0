//! Terminal rendering for the entry pad
//!
//! Full redraw per state change: pending input line, scan-in-progress
//! indicator, numbered code list with removal hints, submit enablement,
//! and the transient status line. The input line is drawn last so the
//! cursor lands at the end of the pending buffer - the terminal
//! equivalent of keeping the entry field focused.

use crate::batch::BATCH_CAPACITY;
use crate::state::State;
use crate::terminal::get_terminal_size;
use crate::{Result, APP_NAME, VERSION};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;

/// Clear screen and home the cursor
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Redraw the whole pad
pub fn render(state: &mut State) -> Result<()> {
    let stdout = io::stdout();
    let (cols, _) = get_terminal_size(stdout.as_raw_fd())?;
    let width = (cols as usize).clamp(20, 60);

    let mut out = String::new();
    out.push_str(CLEAR);

    if state.take_bell() {
        out.push('\x07');
    }

    out.push_str(&format!("{} {}\r\n", APP_NAME, VERSION));
    out.push_str(&"-".repeat(width));
    out.push_str("\r\n");

    // Code list with removal affordance
    out.push_str(&format!(
        "Codes ({}/{}):\r\n",
        state.batch.len(),
        BATCH_CAPACITY
    ));
    for (i, code) in state.batch.codes().iter().enumerate() {
        out.push_str(&format!("  {}. {}\r\n", i + 1, code));
    }
    for _ in state.batch.len()..BATCH_CAPACITY {
        out.push_str("  -\r\n");
    }

    // Submit control mirrors the exactly-5 invariant
    if state.batch.is_ready() {
        out.push_str("\r\nSubmit: ready (alt+s)\r\n");
    } else {
        out.push_str(&format!(
            "\r\nSubmit: disabled ({} of {} codes)\r\n",
            state.batch.len(),
            BATCH_CAPACITY
        ));
    }

    if let Some(ref status) = state.status {
        let mut line = format!("Status: {}", status);
        line.truncate(width);
        out.push_str(&line);
        out.push_str("\r\n");
    } else {
        out.push_str("\r\n");
    }

    out.push_str("alt+s submit | alt+x remove | ctrl+u clear | alt+q quit\r\n");

    // Entry line last: cursor stays at the end of the pending buffer
    let indicator = if state.capture.is_scanning() {
        "  [scanning...]"
    } else {
        ""
    };
    if indicator.is_empty() {
        out.push_str(&format!("Enter code: {}", state.capture.buffer()));
    } else {
        // Draw the indicator to the right, then pull the cursor back
        out.push_str(&format!(
            "Enter code: {}{}\x1b[{}D",
            state.capture.buffer(),
            indicator,
            indicator.len()
        ));
    }

    let mut handle = stdout.lock();
    handle.write_all(out.as_bytes())?;
    handle.flush()?;
    Ok(())
}
