//! OSC 52 clipboard integration.
//!
//! Copies go through the terminal itself using the OSC 52 escape sequence,
//! so they work over SSH and inside multiplexers without talking to a
//! display server. The terminal emulator decides whether to honor the
//! request; terminals that don't support OSC 52 silently drop it.

use std::io::Write;

use base64::{Engine as _, engine::general_purpose};
use log::debug;

/// Sink for clipboard writes. The event loop owns one; tests swap in a
/// recorder.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str);
}

/// Builds the OSC 52 sequence that asks the terminal to set its clipboard.
pub fn osc52_sequence(text: &str) -> String {
    let payload = general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{payload}\x07")
}

/// Writes OSC 52 sequences straight to stdout. Best effort: there is no
/// way to observe whether the terminal honored the request.
pub struct Osc52Clipboard;

impl ClipboardWriter for Osc52Clipboard {
    fn write(&mut self, text: &str) {
        let mut out = std::io::stdout();
        let _ = out.write_all(osc52_sequence(text).as_bytes());
        let _ = out.flush();
        debug!("Wrote {} bytes to clipboard via OSC 52", text.len());
    }
}

/// Test double that records every write instead of touching the terminal.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
}

#[cfg(test)]
impl ClipboardWriter for RecordingClipboard {
    fn write(&mut self, text: &str) {
        self.writes.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_encodes_payload() {
        // "hello" base64-encodes to aGVsbG8=
        assert_eq!(osc52_sequence("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_osc52_sequence_round_trips_unicode() {
        let seq = osc52_sequence("café ☕");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
        let payload = &seq[7..seq.len() - 1];
        let decoded = general_purpose::STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "café ☕");
    }

    #[test]
    fn test_osc52_sequence_empty_text() {
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn test_recording_clipboard_captures_writes() {
        let mut clipboard = RecordingClipboard::default();
        clipboard.write("first");
        clipboard.write("second");
        assert_eq!(clipboard.writes, vec!["first", "second"]);
    }
}
