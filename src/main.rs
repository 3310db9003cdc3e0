//! scanpad main entry point
//!
//! The pad's event loop monitors stdin for keystrokes (scanner hardware
//! emulates a keyboard) and wakes on the capture buffer's debounce
//! deadline to complete a burst that ended without a terminator.

use log::{debug, error, info};
use mio::{Events, Interest, Poll, Token};
use nix::libc;
use scanpad::display;
use scanpad::input::{create_default_keymap, split_key_sequences, HandlerAction, ScanKeyHandler};
use scanpad::platform::is_wsl;
use scanpad::state::State;
use scanpad::terminal::{restore_termios, set_raw_mode};
use scanpad::Result;
use std::io::{self, Read, Write};
use std::os::unix::io::{AsRawFd, RawFd};
use std::process;
use std::time::{Duration, Instant};

/// Token for stdin in mio poll
const STDIN: Token = Token(0);

/// Upper bound on the event loop timeout
const MAX_POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to scanpad.log file (stderr would fight the UI)
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("scanpad.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open scanpad.log for debug logging: {}", e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "scanpad version {} starting (debug mode, logging to scanpad.log)",
            scanpad::VERSION
        );
    } else {
        // Normal mode: minimal logging to stderr, only errors
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    // Run the application
    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    debug!("Initializing scanpad");

    // Verify stdin is a TTY - scanner input arrives as keystrokes
    let stdin_fd = io::stdin().as_raw_fd();
    if unsafe { libc::isatty(stdin_fd) } == 0 {
        eprintln!("Error: scanpad requires an interactive terminal (stdin is not a TTY)");
        eprintln!("Usage: Run scanpad directly in a terminal, not through pipes or redirects");
        process::exit(1);
    }

    // Raw mode lets the pad see each keystroke of a burst, including CR
    let original_termios = set_raw_mode(stdin_fd)?;

    // Ensure we restore terminal on exit
    let _guard = TermiosGuard {
        fd: stdin_fd,
        termios: original_termios,
    };

    // Load configuration and initialize state
    let mut state = State::new()?;
    info!("State initialized - config from {:?}", state.config.path());

    // Create the default key handler for pad commands and capture input
    let keymap = create_default_keymap();
    info!("Key handler initialized with {} bindings", keymap.len());
    let mut scan_handler = ScanKeyHandler::new(keymap);

    // WSL doesn't support epoll on TTY file descriptors, so use select() instead
    let use_select = is_wsl();

    // Set up event loop infrastructure based on platform
    let mut mio_poll = if !use_select {
        debug!("Using mio::Poll for event loop");
        let poll = Poll::new()?;

        // Register stdin for reading
        let mut stdin_source = mio::unix::SourceFd(&stdin_fd);
        poll.registry()
            .register(&mut stdin_source, STDIN, Interest::READABLE)?;

        Some((poll, Events::with_capacity(16)))
    } else {
        debug!("Using select() for event loop (WSL mode)");
        None
    };

    info!("scanpad ready - entering event loop");
    display::render(&mut state)?;

    // Main event loop: keystrokes and the debounce deadline are the only
    // wakeup sources
    loop {
        // Complete any capture whose idle window elapsed, and redraw right
        // away so the indicator clears and the list reflects the accept
        let before = Instant::now();
        let had_deadline = state.time_until_deadline(before).is_some();
        state.run_expired(before);
        if had_deadline && state.time_until_deadline(Instant::now()).is_none() {
            display::render(&mut state)?;
        }
        let mut dirty = false;

        // Timeout: wake at the debounce deadline, capped for responsiveness
        let timeout = state
            .time_until_deadline(Instant::now())
            .map(|d| d.min(MAX_POLL_TIMEOUT))
            .unwrap_or(MAX_POLL_TIMEOUT);

        if use_select {
            // WSL mode: use select() for I/O monitoring
            use nix::sys::select::{select, FdSet};
            use nix::sys::time::{TimeVal, TimeValLike};
            use std::os::unix::io::BorrowedFd;

            let stdin_borrowed = unsafe { BorrowedFd::borrow_raw(stdin_fd) };

            // Rebuild FdSet each iteration (select() modifies it)
            let mut read_fds = FdSet::new();
            read_fds.insert(stdin_borrowed);

            let mut tv = TimeVal::milliseconds(timeout.as_millis() as i64);

            match select(None, Some(&mut read_fds), None, None, Some(&mut tv)) {
                Ok(_n) => {
                    if read_fds.contains(stdin_borrowed) {
                        if handle_stdin(&mut state, &mut scan_handler)? {
                            dirty = true;
                        }
                    }
                }
                Err(nix::errno::Errno::EINTR) => {
                    debug!("select() interrupted by signal");
                }
                Err(e) => {
                    error!("select() error: {:?}", e);
                    return Err(io::Error::from_raw_os_error(e as i32).into());
                }
            }
        } else if let Some((ref mut poll, ref mut events)) = mio_poll {
            poll.poll(events, Some(timeout))?;

            for event in events.iter() {
                if event.token() == STDIN && handle_stdin(&mut state, &mut scan_handler)? {
                    dirty = true;
                }
            }
        }

        // A burst may have completed while we were reading it
        state.run_expired(Instant::now());

        if state.quit {
            info!("Quit requested, leaving event loop");
            let mut stdout = io::stdout();
            stdout.write_all(b"\r\n")?;
            stdout.flush()?;
            return Ok(());
        }

        if dirty {
            display::render(&mut state)?;
        }
    }
}

/// Handle user input from stdin
///
/// A single read may carry a whole scanner burst, so the chunk is split
/// into individual key sequences before dispatch. Modal handlers (remove
/// mode) get the key first; otherwise the default handler routes it.
///
/// Returns true if any key was processed (the display needs a redraw).
fn handle_stdin(state: &mut State, scan_handler: &mut ScanKeyHandler) -> Result<bool> {
    let mut buf = [0u8; 4096];

    let n = io::stdin().read(&mut buf)?;
    if n == 0 {
        // EOF on stdin: treat like quit
        state.quit = true;
        return Ok(false);
    }

    let input = buf[..n].to_vec();
    let mut processed = false;

    for key in split_key_sequences(&input) {
        processed = true;

        if state.dispatch_key(key, scan_handler)? == HandlerAction::Passthrough {
            // Unbound key with no buffer meaning: ignore
            debug!("Ignoring unbound key {:?}", key);
        }
    }

    Ok(processed)
}

/// RAII guard to restore terminal on exit
///
/// Ensures the terminal is always returned to normal mode even if the
/// pad crashes
struct TermiosGuard {
    fd: RawFd,
    termios: libc::termios,
}

impl Drop for TermiosGuard {
    fn drop(&mut self) {
        restore_termios(self.fd, &self.termios);
        debug!("Terminal attributes restored");
    }
}
