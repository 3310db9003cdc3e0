//! Platform detection utilities

use std::fs;

/// Detect if running in WSL (Windows Subsystem for Linux)
///
/// WSL does not support epoll on TTY file descriptors, so the event loop
/// falls back to select() there. Checks /proc/version and environment.
pub fn is_wsl() -> bool {
    if let Ok(contents) = fs::read_to_string("/proc/version") {
        let lower = contents.to_lowercase();
        if lower.contains("microsoft") || lower.contains("wsl") {
            return true;
        }
    }

    std::env::var("WSL_DISTRO_NAME").is_ok()
}
