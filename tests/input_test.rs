//! Input system tests
//!
//! Tests key handler stack, key bindings, and burst splitting

use scanpad::input::{
    create_default_keymap, split_key_sequences, HandlerAction, HandlerStack, KeyAction, KeyHandler,
};
use scanpad::Result;

struct TestHandler {
    handled: bool,
}

impl KeyHandler for TestHandler {
    fn process(&mut self, key: &[u8]) -> Result<HandlerAction> {
        if key == b"x" {
            self.handled = true;
            Ok(HandlerAction::Remove)
        } else {
            Ok(HandlerAction::Passthrough)
        }
    }
}

#[test]
fn test_handler_stack() {
    let mut stack = HandlerStack::new();
    assert_eq!(stack.len(), 0);

    // Push handler
    stack.push(Box::new(TestHandler { handled: false }));
    assert_eq!(stack.len(), 1);

    // Process key that handler doesn't recognize
    let action = stack.process(b"a").unwrap();
    assert_eq!(action, HandlerAction::Passthrough);
    assert_eq!(stack.len(), 1);

    // Process key that handler handles and removes itself
    let action = stack.process(b"x").unwrap();
    assert_eq!(action, HandlerAction::Remove);
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_keymap_creation() {
    let keymap = create_default_keymap();

    // Terminator keys
    assert_eq!(keymap.get(&b"\r".to_vec()), Some(&KeyAction::AcceptEntry));
    assert_eq!(keymap.get(&b"\n".to_vec()), Some(&KeyAction::AcceptEntry));

    // Editing keys
    assert_eq!(keymap.get(&b"\x7f".to_vec()), Some(&KeyAction::Backspace));
    assert_eq!(keymap.get(&b"\x08".to_vec()), Some(&KeyAction::Backspace));
    assert_eq!(keymap.get(&b"\x15".to_vec()), Some(&KeyAction::ClearEntry));

    // Batch commands
    assert_eq!(keymap.get(&b"\x1bs".to_vec()), Some(&KeyAction::Submit));
    assert_eq!(keymap.get(&b"\x1bx".to_vec()), Some(&KeyAction::RemoveMode));

    // Quit keys
    assert_eq!(keymap.get(&b"\x1bq".to_vec()), Some(&KeyAction::Quit));
    assert_eq!(keymap.get(&b"\x03".to_vec()), Some(&KeyAction::Quit));

    // Digits deliberately have no binding: they flow to the capture buffer
    assert_eq!(keymap.get(&b"1".to_vec()), None);
}

#[test]
fn test_handler_stack_multiple() {
    let mut stack = HandlerStack::new();

    // Push two handlers
    stack.push(Box::new(TestHandler { handled: false }));
    stack.push(Box::new(TestHandler { handled: false }));
    assert_eq!(stack.len(), 2);

    // Top handler processes
    let action = stack.process(b"x").unwrap();
    assert_eq!(action, HandlerAction::Remove);
    assert_eq!(stack.len(), 1);

    // Now second handler processes
    let action = stack.process(b"x").unwrap();
    assert_eq!(action, HandlerAction::Remove);
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_split_scanner_burst() {
    // One read() can carry a whole burst including the terminator
    let keys = split_key_sequences(b"12345\r");
    assert_eq!(
        keys,
        vec![
            b"1".as_slice(),
            b"2".as_slice(),
            b"3".as_slice(),
            b"4".as_slice(),
            b"5".as_slice(),
            b"\r".as_slice()
        ]
    );
}

#[test]
fn test_split_alt_combo() {
    let keys = split_key_sequences(b"\x1bs1");
    assert_eq!(keys, vec![b"\x1bs".as_slice(), b"1".as_slice()]);
}

#[test]
fn test_split_csi_sequence() {
    // Arrow key arrives as a single sequence
    let keys = split_key_sequences(b"\x1b[A7");
    assert_eq!(keys, vec![b"\x1b[A".as_slice(), b"7".as_slice()]);
}

#[test]
fn test_split_bare_escape() {
    let keys = split_key_sequences(b"\x1b");
    assert_eq!(keys, vec![b"\x1b".as_slice()]);
}
