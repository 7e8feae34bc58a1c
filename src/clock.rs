//! Wall-clock time: the [`TimeOfDay`] value type and the [`WallClock`]
//! hardware seam backed by a battery-backed RTC.

/// A time of day as hours, minutes, and seconds.
///
/// The wall clock owns the authoritative value; the driver only ever holds
/// a transient copy per poll. Fields are plain and public - this is a value
/// type, not a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// Hour of day, `0..=23`
    pub hour: u8,
    /// Minute of hour, `0..=59`
    pub minute: u8,
    /// Second of minute, `0..=59`
    pub second: u8,
}

impl TimeOfDay {
    /// Creates a time of day from trusted field values.
    ///
    /// No range validation is performed - rendering and adjustment operate
    /// on values that come from the wall clock or from wrapped modular
    /// arithmetic, so they are in range by construction. Use [`try_new`]
    /// when the values arrive from something less trustworthy.
    ///
    /// [`try_new`]: TimeOfDay::try_new
    #[inline]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Creates a time of day, validating every field.
    ///
    /// Intended for [`WallClock`] implementations that want to reject a
    /// corrupted bus read before it enters the rendering path.
    ///
    /// # Errors
    ///
    /// Returns a [`TimeOfDayError`] naming the first out-of-range field.
    pub const fn try_new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeOfDayError> {
        if hour > 23 {
            return Err(TimeOfDayError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeOfDayError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(TimeOfDayError::SecondOutOfRange(second));
        }
        Ok(Self::new(hour, minute, second))
    }

    /// Returns this time with the minute advanced by one, wrapping 59 to 0.
    ///
    /// The hour is deliberately untouched - the two-button adjustment UI
    /// increments each field independently, so no carry is performed.
    #[inline]
    #[must_use]
    pub const fn with_next_minute(self) -> Self {
        Self {
            minute: (self.minute + 1) % 60,
            ..self
        }
    }

    /// Returns this time with the hour advanced by one, wrapping 23 to 0.
    #[inline]
    #[must_use]
    pub const fn with_next_hour(self) -> Self {
        Self {
            hour: (self.hour + 1) % 24,
            ..self
        }
    }
}

/// Errors from validated [`TimeOfDay`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeOfDayError {
    /// Hour was outside `0..=23`; carries the rejected value
    HourOutOfRange(u8),
    /// Minute was outside `0..=59`; carries the rejected value
    MinuteOutOfRange(u8),
    /// Second was outside `0..=59`; carries the rejected value
    SecondOutOfRange(u8),
}

impl core::fmt::Display for TimeOfDayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeOfDayError::HourOutOfRange(v) => write!(f, "Hour out of range: {v} (valid 0-23)"),
            TimeOfDayError::MinuteOutOfRange(v) => {
                write!(f, "Minute out of range: {v} (valid 0-59)")
            }
            TimeOfDayError::SecondOutOfRange(v) => {
                write!(f, "Second out of range: {v} (valid 0-59)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeOfDayError {}

/// Trait for the battery-backed wall clock the display follows.
///
/// Implementations should handle any hardware errors internally - these
/// methods cannot fail. A typical RTC binding caches the last good read and
/// returns it again when the bus misbehaves.
pub trait WallClock {
    /// Reads the current time of day.
    fn now(&mut self) -> TimeOfDay;

    /// Writes an adjusted time of day back to the clock.
    fn adjust(&mut self, time: TimeOfDay);

    /// Reports whether the clock lost backup power since it was last set.
    ///
    /// Firmware queries this once at startup: when power was retained it
    /// confirms the driver immediately instead of letting the startup sweep
    /// run. The driver itself never calls this.
    fn has_lost_power(&mut self) -> bool;
}
