//! Input handling and key bindings
//!
//! The input system uses a stack-based handler architecture where handlers
//! can be pushed/popped to create modal interfaces (remove mode), with the
//! scan handler at the bottom feeding the capture buffer.

pub mod capture;
pub mod handler;
pub mod keymap;
pub mod remove_handler;
pub mod scan_handler;

pub use capture::ScanCapture;
pub use handler::{HandlerAction, HandlerStack, KeyHandler};
pub use keymap::{create_default_keymap, split_key_sequences, KeyAction};
pub use scan_handler::ScanKeyHandler;
