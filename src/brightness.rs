//! Brightness: maps the pot reading onto the display enable line.

/// Full-scale value of the analog brightness input.
pub const ANALOG_FULL_SCALE: u16 = 1023;

/// Trait for the analog input the brightness pot sits on.
///
/// Implementations should handle any hardware errors internally - this
/// method cannot fail.
pub trait BrightnessInput {
    /// Reads the raw analog value, `0..=1023`.
    fn read_raw(&mut self) -> u16;
}

/// Maps a raw pot reading to the PWM duty for the enable line.
///
/// Linear map from the `0..=1023` analog scale onto `0..=255`, then
/// inverted: the enable line is active-low, so a lower duty means a
/// brighter display. Readings above full scale clamp. Stateless - the
/// driver applies this on every pass, so the display tracks the pot with
/// no smoothing.
#[inline]
pub fn duty_for_reading(raw: u16) -> u8 {
    let clamped = u32::from(raw.min(ANALOG_FULL_SCALE));
    let level = (clamped * 255 / u32::from(ANALOG_FULL_SCALE)) as u8;
    255 - level
}
