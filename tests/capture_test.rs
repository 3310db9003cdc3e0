//! Scan capture tests
//!
//! Tests the burst-completion heuristic (terminator or debounce window,
//! whichever fires first) with injected instants so timing is
//! deterministic

use scanpad::input::ScanCapture;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_millis(50);

#[test]
fn test_burst_with_terminator() {
    let mut capture = ScanCapture::new(WINDOW);
    let t0 = Instant::now();

    // Scanner-speed burst: 1 ms between characters
    for (i, ch) in ['1', '2', '3', '4'].into_iter().enumerate() {
        capture.push_char(ch, t0 + Duration::from_millis(i as u64));
    }
    assert!(capture.is_scanning());

    // Enter completes the buffer before the window elapses
    assert_eq!(capture.terminate(), Some("1234".to_string()));
    assert_eq!(capture.buffer(), "");
    assert!(!capture.is_scanning());
}

#[test]
fn test_burst_completed_by_window() {
    let mut capture = ScanCapture::new(WINDOW);
    let t0 = Instant::now();

    capture.push_char('9', t0);
    capture.push_char('8', t0 + Duration::from_millis(2));

    // Window measured from the last keystroke
    assert!(capture.poll(t0 + Duration::from_millis(30)).is_none());
    assert_eq!(
        capture.poll(t0 + Duration::from_millis(52)),
        Some("98".to_string())
    );
    assert!(!capture.is_scanning());
}

#[test]
fn test_gaps_force_separate_candidates() {
    let mut capture = ScanCapture::new(WINDOW);
    let t0 = Instant::now();
    let mut candidates = Vec::new();

    // Five keys with 200 ms gaps: each gap completes a candidate
    for i in 0..5u64 {
        let at = t0 + Duration::from_millis(i * 200);
        if let Some(c) = capture.poll(at) {
            candidates.push(c);
        }
        capture.push_char(char::from(b'1' + i as u8), at);
    }
    if let Some(c) = capture.poll(t0 + Duration::from_secs(2)) {
        candidates.push(c);
    }

    assert_eq!(candidates, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_bare_terminator_yields_nothing() {
    let mut capture = ScanCapture::new(WINDOW);
    assert_eq!(capture.terminate(), None);
}

#[test]
fn test_terminator_disarms_deadline() {
    let mut capture = ScanCapture::new(WINDOW);
    let t0 = Instant::now();

    capture.push_char('7', t0);
    assert_eq!(capture.terminate(), Some("7".to_string()));

    // The old deadline must not produce a second, empty candidate
    assert_eq!(capture.poll(t0 + Duration::from_millis(60)), None);
}

#[test]
fn test_backspace_and_clear() {
    let mut capture = ScanCapture::new(WINDOW);
    let t0 = Instant::now();

    capture.push_char('1', t0);
    capture.push_char('2', t0);
    capture.backspace();
    assert_eq!(capture.buffer(), "1");

    capture.clear();
    assert_eq!(capture.buffer(), "");
    assert!(!capture.is_scanning());
}

#[test]
fn test_deadline_drives_poll_timeout() {
    let mut capture = ScanCapture::new(WINDOW);
    let t0 = Instant::now();

    assert!(capture.time_until_deadline(t0).is_none());

    capture.push_char('1', t0);
    let remaining = capture
        .time_until_deadline(t0 + Duration::from_millis(10))
        .unwrap();
    assert_eq!(remaining, Duration::from_millis(40));

    // Past the deadline the remaining time saturates at zero
    let late = capture
        .time_until_deadline(t0 + Duration::from_millis(90))
        .unwrap();
    assert_eq!(late, Duration::ZERO);
}
