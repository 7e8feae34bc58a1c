//! RTT-backed diagnostic sink.

use bcd_clock::DiagnosticSink;
use rtt_target::rprintln;

/// Prints status lines over RTT. Requires `rtt_init_print!` to have run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RttConsole;

impl DiagnosticSink for RttConsole {
    fn write_line(&mut self, line: &str) {
        rprintln!("{}", line);
    }
}
