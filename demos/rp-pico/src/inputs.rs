//! Input bindings: ADC brightness pot and pull-up buttons.

use bcd_clock::{BrightnessInput, ButtonInput, PinLevel};
use embedded_hal::digital::InputPin;
use embedded_hal_0_2::adc::OneShot;
use rp_pico::hal::adc::Adc;

/// Brightness pot on one of the RP2040 ADC inputs.
pub struct AdcPot<P> {
    adc: Adc,
    pin: P,
}

impl<P> AdcPot<P>
where
    Adc: OneShot<Adc, u16, P>,
{
    pub fn new(adc: Adc, pin: P) -> Self {
        Self { adc, pin }
    }
}

impl<P> BrightnessInput for AdcPot<P>
where
    Adc: OneShot<Adc, u16, P>,
{
    fn read_raw(&mut self) -> u16 {
        // The RP2040 ADC is 12-bit; the brightness map expects the 10-bit
        // scale, so drop the two noisy low bits.
        let raw = self.adc.read(&mut self.pin).unwrap_or(0);
        raw >> 2
    }
}

/// Adjustment button on a pull-up input, pressed when the pin reads low.
pub struct PullUpButton<P: InputPin> {
    pin: P,
}

impl<P: InputPin> PullUpButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> ButtonInput for PullUpButton<P> {
    fn level(&mut self) -> PinLevel {
        // A read error counts as released; a failing pin must not be able
        // to adjust the clock.
        if self.pin.is_low().unwrap_or(false) {
            PinLevel::Low
        } else {
            PinLevel::High
        }
    }
}
