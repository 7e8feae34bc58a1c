//! Display frames: the serialized form a time of day takes on the wire.

use crate::bcd;
use crate::clock::TimeOfDay;

/// Physical order of the three registers along the daisy chain.
///
/// The first byte shifted out ends up in the register furthest from the
/// data pin once all 24 bits are clocked through. Which digit group that
/// register shows depends on how the board is routed, so the order is
/// configuration rather than a constant. Verify against target hardware;
/// if hours and seconds appear swapped, use the other variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChainOrder {
    /// Shift the hour byte first, then minute, then second.
    #[default]
    HourFirst,
    /// Shift the second byte first, then minute, then hour.
    SecondFirst,
}

/// One complete display refresh: three register bytes, ready to shift out.
///
/// Bytes are held in logical order - hour, minute, second - regardless of
/// [`ChainOrder`]; the order is applied at transmission time. Each byte
/// built from a time value is the bitwise complement of its packed BCD
/// encoding, because the registers sink current: a 0 bit lights an LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    bytes: [u8; 3],
}

impl DisplayFrame {
    /// The all-off frame (every bit high, so no LED sinks current).
    pub const BLANK: Self = Self {
        bytes: [0xFF, 0xFF, 0xFF],
    };

    /// Builds the frame for a time of day: packed BCD per field, inverted
    /// for the active-low sink.
    #[inline]
    pub const fn from_time(time: TimeOfDay) -> Self {
        Self {
            bytes: [
                !bcd::pack(time.hour),
                !bcd::pack(time.minute),
                !bcd::pack(time.second),
            ],
        }
    }

    /// Builds a frame from a raw 24-bit mask, without BCD or inversion
    /// semantics.
    ///
    /// Mask bits 23..16 become the first logical byte, 15..8 the second,
    /// 7..0 the third; the top 8 bits of the mask are ignored. This is the
    /// path the startup sweep uses to draw arbitrary patterns.
    #[inline]
    pub const fn from_mask(mask: u32) -> Self {
        Self {
            bytes: [(mask >> 16) as u8, (mask >> 8) as u8, mask as u8],
        }
    }

    /// The frame bytes in logical hour, minute, second order.
    #[inline]
    pub const fn bytes(&self) -> [u8; 3] {
        self.bytes
    }

    /// The frame bytes in the order they go onto the wire.
    #[inline]
    pub const fn wire_bytes(&self, order: ChainOrder) -> [u8; 3] {
        let [hour, minute, second] = self.bytes;
        match order {
            ChainOrder::HourFirst => [hour, minute, second],
            ChainOrder::SecondFirst => [second, minute, hour],
        }
    }
}
