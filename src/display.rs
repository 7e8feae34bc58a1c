//! Display output: hardware seams for the shift-register chain and its
//! enable line, plus [`ClockDisplay`] which serializes frames onto them.

use crate::clock::TimeOfDay;
use crate::frame::{ChainOrder, DisplayFrame};

/// Trait for the serial side of the daisy-chained shift registers.
///
/// Implementations should handle any hardware errors internally - these
/// methods cannot fail. Bit-banged GPIO and hardware SPI both fit behind
/// this seam.
pub trait ShiftRegisterBus {
    /// Clocks one byte into the chain, most significant bit first.
    fn shift_out(&mut self, byte: u8);

    /// Drives the latch/strobe line that commits shifted bits to the
    /// register outputs.
    fn set_latch(&mut self, high: bool);
}

/// Trait for the global display-enable line.
///
/// The line is PWM-driven for brightness control and active-low on the
/// register side, so duty 0 is brightest and 255 is dark. Implementations
/// receive the final duty value - the inversion already happened in the
/// brightness mapping.
pub trait DisplayEnable {
    /// Sets the PWM duty cycle on the enable line.
    fn set_duty(&mut self, duty: u8);
}

/// Serializer owning the display-side hardware.
///
/// Converts time values (or raw masks) into [`DisplayFrame`]s and clocks
/// them out with an atomic latch commit: the latch is held low while all
/// 24 bits stream through, then driven high once, so the three registers
/// present their new outputs simultaneously and no partial frame is ever
/// visible.
///
/// # Type Parameters
///
/// * `B` - Shift-register bus implementation
/// * `E` - Display-enable (brightness) output implementation
pub struct ClockDisplay<B: ShiftRegisterBus, E: DisplayEnable> {
    bus: B,
    enable: E,
    order: ChainOrder,
}

impl<B: ShiftRegisterBus, E: DisplayEnable> ClockDisplay<B, E> {
    /// Creates a display over the given bus and enable outputs.
    ///
    /// `order` selects which end of the chain receives the hour byte; see
    /// [`ChainOrder`].
    pub fn new(bus: B, enable: E, order: ChainOrder) -> Self {
        Self { bus, enable, order }
    }

    /// Renders a time of day: BCD-encoded, inverted, transmitted, latched.
    pub fn render(&mut self, time: TimeOfDay) {
        self.render_frame(DisplayFrame::from_time(time));
    }

    /// Transmits a raw 24-bit mask without BCD or inversion semantics.
    ///
    /// Used by the startup sweep to draw arbitrary patterns; see
    /// [`DisplayFrame::from_mask`] for the bit layout.
    pub fn render_raw(&mut self, mask: u32) {
        self.render_frame(DisplayFrame::from_mask(mask));
    }

    /// Transmits a prebuilt frame.
    pub fn render_frame(&mut self, frame: DisplayFrame) {
        self.bus.set_latch(false);
        for byte in frame.wire_bytes(self.order) {
            self.bus.shift_out(byte);
        }
        self.bus.set_latch(true);
    }

    /// Forwards a PWM duty value to the enable line.
    pub fn set_duty(&mut self, duty: u8) {
        self.enable.set_duty(duty);
    }

    /// The configured chain order.
    pub fn chain_order(&self) -> ChainOrder {
        self.order
    }

    /// Borrows the underlying bus (test inspection, mostly).
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Borrows the underlying enable output.
    pub fn enable(&self) -> &E {
        &self.enable
    }
}
