//! Display-side bindings: bit-banged 74HC595 chain and PWM enable line.

use bcd_clock::{DisplayEnable, ShiftRegisterBus};
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Bit-banged serial interface to the 74HC595 chain.
///
/// Three push-pull GPIO outputs: serial data, shift clock, and the latch
/// (storage register clock). The RP2040 toggles GPIO far below the '595's
/// maximum shift rate, so no explicit setup/hold delays are needed.
pub struct BitBangBus<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    data: D,
    clock: C,
    latch: L,
}

impl<D, C, L> BitBangBus<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    /// Create a bus over the three chain control pins
    ///
    /// # Arguments
    /// * `data` - Serial data into the first register (SER)
    /// * `clock` - Shift clock (SRCLK)
    /// * `latch` - Storage register clock / latch (RCLK)
    pub fn new(data: D, clock: C, latch: L) -> Self {
        Self { data, clock, latch }
    }
}

impl<D, C, L> ShiftRegisterBus for BitBangBus<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    fn shift_out(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            if byte >> bit & 1 == 1 {
                let _ = self.data.set_high();
            } else {
                let _ = self.data.set_low();
            }
            let _ = self.clock.set_high();
            let _ = self.clock.set_low();
        }
    }

    fn set_latch(&mut self, high: bool) {
        if high {
            let _ = self.latch.set_high();
        } else {
            let _ = self.latch.set_low();
        }
    }
}

/// PWM channel driving the chain's active-low output-enable line.
///
/// The library hands over a final 0-255 duty (already inverted for the
/// active-low line); this just rescales it to the channel's resolution.
pub struct PwmEnable<P: SetDutyCycle> {
    channel: P,
}

impl<P: SetDutyCycle> PwmEnable<P> {
    pub fn new(channel: P) -> Self {
        Self { channel }
    }
}

impl<P: SetDutyCycle> DisplayEnable for PwmEnable<P> {
    fn set_duty(&mut self, duty: u8) {
        let _ = self.channel.set_duty_cycle_fraction(u16::from(duty), 255);
    }
}
