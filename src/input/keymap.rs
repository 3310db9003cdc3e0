//! Default key bindings for scanpad

use std::collections::HashMap;

/// Key sequence type
pub type KeySequence = Vec<u8>;

/// Action identifier for key bindings
///
/// Each variant represents a pad command that can be triggered by a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Terminate the pending buffer (Enter from keyboard or scanner)
    AcceptEntry,
    /// Delete the last buffered character
    Backspace,
    /// Discard the whole pending buffer
    ClearEntry,
    /// Enter remove mode (next digit selects the entry to delete)
    RemoveMode,
    /// Submit the batch (only effective at exactly five codes)
    Submit,
    /// Exit the pad
    Quit,
}

/// Create the default keymap
pub fn create_default_keymap() -> HashMap<KeySequence, KeyAction> {
    let mut map = HashMap::new();

    // Terminator (scanners send CR, keyboards CR or LF)
    map.insert(b"\r".to_vec(), KeyAction::AcceptEntry);
    map.insert(b"\n".to_vec(), KeyAction::AcceptEntry);

    // Pending-buffer editing
    map.insert(b"\x08".to_vec(), KeyAction::Backspace);
    map.insert(b"\x7f".to_vec(), KeyAction::Backspace);
    map.insert(b"\x15".to_vec(), KeyAction::ClearEntry); // ctrl+u

    // Batch commands (alt+key)
    map.insert(b"\x1bs".to_vec(), KeyAction::Submit);
    map.insert(b"\x1bx".to_vec(), KeyAction::RemoveMode);

    // Quit
    map.insert(b"\x1bq".to_vec(), KeyAction::Quit);
    map.insert(b"\x03".to_vec(), KeyAction::Quit); // ctrl+c

    map
}

/// Split a raw stdin read into individual key sequences
///
/// A scanner burst delivers many bytes in one read ("12345\r"), so a chunk
/// cannot be treated as a single key. ESC starts a multi-byte sequence:
/// ESC [ ... terminates at the first alphabetic byte or '~' (CSI), anything
/// else after ESC is a two-byte alt combo. Every other byte stands alone.
pub fn split_key_sequences(bytes: &[u8]) -> Vec<&[u8]> {
    let mut keys = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != 0x1b {
            keys.push(&bytes[i..i + 1]);
            i += 1;
            continue;
        }

        // Bare ESC at end of chunk
        if i + 1 >= bytes.len() {
            keys.push(&bytes[i..]);
            break;
        }

        if bytes[i + 1] == b'[' {
            // CSI sequence: ESC [ params final
            let mut end = i + 2;
            while end < bytes.len() {
                let b = bytes[end];
                end += 1;
                if b.is_ascii_alphabetic() || b == b'~' {
                    break;
                }
            }
            keys.push(&bytes[i..end]);
            i = end;
        } else {
            // Alt combo: ESC + one byte
            keys.push(&bytes[i..i + 2]);
            i += 2;
        }
    }

    keys
}
