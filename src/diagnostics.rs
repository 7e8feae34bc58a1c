//! Diagnostics: human-readable status lines for a serial console.
//!
//! The line formats are for humans watching a terminal - they are not a
//! machine-parseable protocol and carry no stability guarantee.

use core::fmt::Write as _;

use heapless::String;

use crate::clock::TimeOfDay;

/// Banner emitted once per sweep position while the clock is unconfirmed.
pub const TIME_NOT_SET_LINE: &str = "~~~ Time Not Set ~~~";

/// Trait for the sink diagnostic lines go to.
///
/// Implementations should handle any hardware errors internally - this
/// method cannot fail. Lines arrive without a trailing newline; the sink
/// appends whatever its transport wants.
pub trait DiagnosticSink {
    /// Writes one line of status text.
    fn write_line(&mut self, line: &str);
}

/// A sink that discards everything, for builds with no console attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentDiagnostics;

impl DiagnosticSink for SilentDiagnostics {
    fn write_line(&mut self, _line: &str) {}
}

/// Formats the once-per-second status line.
///
/// # Arguments
/// * `time` - The time just rendered
/// * `work_micros` - Measured processing time of the previous pass
///
/// # Returns
/// `Current Time: HH:MM:SS -- CPU Work: ####µs`
pub fn status_line(time: TimeOfDay, work_micros: u64) -> String<64> {
    let mut line = String::new();
    // 64 bytes comfortably holds the longest possible line
    let _ = write!(
        line,
        "Current Time: {:02}:{:02}:{:02} -- CPU Work: {:04}\u{b5}s",
        time.hour, time.minute, time.second, work_micros
    );
    line
}
