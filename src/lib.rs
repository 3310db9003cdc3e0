//! scanpad - Terminal UPC batch-entry pad
//!
//! Captures input from a keyboard-wedge barcode scanner (or manual typing),
//! collects up to five distinct numeric codes, and hands the full batch to a
//! configurable submission sink.

pub mod batch;
pub mod display;
pub mod error;
pub mod input;
pub mod platform;
pub mod state;
pub mod submit;
pub mod terminal;

pub use error::{Result, ScanError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "scanpad";
