//! DS3231 wall-clock binding.

use bcd_clock::{TimeOfDay, WallClock};
use ds323x::ic::DS3231;
use ds323x::interface::I2cInterface;
use ds323x::{Ds323x, NaiveTime, Rtcc, Timelike};
use embedded_hal::i2c::I2c;

/// Battery-backed wall clock on a DS3231.
///
/// The [`WallClock`] seam is infallible, so the binding caches the last
/// good read and serves it again whenever the bus misbehaves; a transient
/// I2C glitch shows a second of stale time instead of garbage.
pub struct Ds3231Clock<I2C>
where
    I2C: I2c,
{
    rtc: Ds323x<I2cInterface<I2C>, DS3231>,
    last_good: TimeOfDay,
}

impl<I2C> Ds3231Clock<I2C>
where
    I2C: I2c,
{
    /// Probes for a DS3231 on the bus with an initial time read.
    ///
    /// # Returns
    /// `None` when the chip does not answer - the clock is non-functional
    /// without it, so callers should report and halt.
    pub fn detect(i2c: I2C) -> Option<Self> {
        let mut rtc = Ds323x::new_ds3231(i2c);
        let first = rtc.time().ok()?;
        Some(Self {
            rtc,
            last_good: from_naive(first),
        })
    }
}

fn from_naive(time: NaiveTime) -> TimeOfDay {
    TimeOfDay::new(time.hour() as u8, time.minute() as u8, time.second() as u8)
}

impl<I2C> WallClock for Ds3231Clock<I2C>
where
    I2C: I2c,
{
    fn now(&mut self) -> TimeOfDay {
        if let Ok(time) = self.rtc.time() {
            self.last_good = from_naive(time);
        }
        self.last_good
    }

    fn adjust(&mut self, time: TimeOfDay) {
        if let Some(naive) = NaiveTime::from_hms_opt(
            u32::from(time.hour),
            u32::from(time.minute),
            u32::from(time.second),
        ) {
            let _ = self.rtc.set_time(&naive);
        }
        self.last_good = time;
    }

    fn has_lost_power(&mut self) -> bool {
        // Oscillator-stop flag: set when backup power failed. Treat a read
        // error as lost power so the operator gets asked to confirm.
        let stopped = self.rtc.has_been_stopped().unwrap_or(true);
        if stopped {
            let _ = self.rtc.clear_has_been_stopped_flag();
        }
        stopped
    }
}
