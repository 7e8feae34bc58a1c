//! Startup sweep: the attract pattern shown until the clock is confirmed.
//!
//! A ping-pong traversal of the four nibble-bit-pair positions. Each
//! position lights the pair of LEDs at bit `p` and bit `p + 4` in every
//! register at once, so all three digit groups animate in lockstep. The
//! machine is externally ticked - it never waits; the driver feeds it the
//! current instant and transmits whatever frame falls due.

use crate::frame::DisplayFrame;
use crate::time::{TimeDuration, TimeInstant};

/// Ping-pong position sequence over the four bit-pair positions.
const SWEEP_POSITIONS: [u8; 6] = [0, 1, 2, 3, 2, 1];

/// Builds the one-byte pattern for a sweep position.
///
/// Bits `position` and `position + 4` are cleared, the rest set: the
/// registers sink current, so exactly the two LEDs of that nibble pair
/// light up.
#[inline]
pub const fn pattern_for(position: u8) -> u8 {
    !(1 << position | 1 << (position + 4))
}

/// Externally-ticked sweep state machine.
///
/// [`step`] emits the position-0 frame on the first call and a new frame
/// each time the hold interval elapses, cycling through the position
/// sequence indefinitely. Between holds it emits nothing. Stopping the
/// sweep is the driver's call - confirming the clock simply means no
/// further steps are taken.
///
/// [`step`]: SweepAnimation::step
#[derive(Debug)]
pub struct SweepAnimation<I: TimeInstant> {
    hold: I::Duration,
    index: usize,
    last_advance: Option<I>,
}

impl<I: TimeInstant> SweepAnimation<I> {
    /// Creates a sweep that holds each position for `hold`.
    pub fn new(hold: I::Duration) -> Self {
        Self {
            hold,
            index: 0,
            last_advance: None,
        }
    }

    /// Advances the machine to `now`, returning a frame when one is due.
    ///
    /// # Returns
    /// `Some(frame)` on the first call and on every hold expiry thereafter,
    /// `None` in between.
    pub fn step(&mut self, now: I) -> Option<DisplayFrame> {
        match self.last_advance {
            None => {
                self.last_advance = Some(now);
                Some(self.current_frame())
            }
            Some(since) if now.duration_since(since).as_millis() >= self.hold.as_millis() => {
                self.index = (self.index + 1) % SWEEP_POSITIONS.len();
                self.last_advance = Some(now);
                Some(self.current_frame())
            }
            Some(_) => None,
        }
    }

    fn current_frame(&self) -> DisplayFrame {
        let byte = u32::from(pattern_for(SWEEP_POSITIONS[self.index]));
        DisplayFrame::from_mask(byte * 0x0001_0101)
    }
}
