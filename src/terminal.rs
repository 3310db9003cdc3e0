//! Terminal utilities

use crate::{Result, ScanError};
use nix::libc;
use std::os::unix::io::RawFd;

/// Get the terminal size for the given file descriptor
///
/// The renderer needs the width to truncate lines cleanly.
pub fn get_terminal_size(fd: RawFd) -> Result<(u16, u16)> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 {
        Ok((ws.ws_col, ws.ws_row))
    } else {
        // Default size if ioctl fails
        Ok((80, 24))
    }
}

/// Set raw mode on a terminal file descriptor
///
/// Raw mode is required to see every keypress of a scanner burst as it
/// arrives, including the carriage-return terminator.
pub fn set_raw_mode(fd: RawFd) -> Result<libc::termios> {
    let mut original_termios: libc::termios = unsafe { std::mem::zeroed() };
    if unsafe { libc::tcgetattr(fd, &mut original_termios) } != 0 {
        return Err(ScanError::Terminal(
            "Failed to read terminal attributes".to_string(),
        ));
    }

    let mut raw_termios = original_termios;

    unsafe {
        libc::cfmakeraw(&mut raw_termios);
    }
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw_termios) } != 0 {
        return Err(ScanError::Terminal(
            "Failed to enter raw mode".to_string(),
        ));
    }

    Ok(original_termios)
}

/// Restore terminal attributes
///
/// Called when the pad exits to return the terminal to normal state
pub fn restore_termios(fd: RawFd, termios: &libc::termios) {
    unsafe {
        libc::tcsetattr(fd, libc::TCSANOW, termios);
    }
}
