//! Button input: raw pin seam and the press-edge debounce state machine.

use crate::time::{TimeDuration, TimeInstant};

/// Logic level of a digital input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    /// Pin reads low. Buttons are wired active-low, so this means pressed.
    Low,
    /// Pin reads high (released, for a pulled-up button).
    High,
}

impl PinLevel {
    /// `true` for [`PinLevel::Low`].
    #[inline]
    pub const fn is_low(self) -> bool {
        matches!(self, PinLevel::Low)
    }
}

/// Trait for a raw digital button input.
///
/// Implementations should handle any hardware errors internally - this
/// method cannot fail. Return the electrical level as read; the debouncer
/// applies the active-low interpretation.
pub trait ButtonInput {
    /// Reads the current pin level.
    fn level(&mut self) -> PinLevel;
}

/// Press-edge debouncer for one button.
///
/// Two states: idle and pressed. A low read in idle fires a single trigger
/// if the previous press edge is older than the debounce window (the first
/// ever press always fires), and the machine stays in pressed - further low
/// reads emit nothing, so a held button never auto-repeats. A high read
/// drops straight back to idle; release edges carry no bounce worth
/// filtering on this hardware, only press edges are debounced.
#[derive(Debug)]
pub struct DebouncedButton<I: TimeInstant> {
    pressed: bool,
    last_edge: Option<I>,
    window: I::Duration,
}

impl<I: TimeInstant> DebouncedButton<I> {
    /// Creates a debouncer with the given press-edge window.
    pub fn new(window: I::Duration) -> Self {
        Self {
            pressed: false,
            last_edge: None,
            window,
        }
    }

    /// Feeds one raw pin sample into the state machine.
    ///
    /// # Arguments
    /// * `level` - Raw pin level from the [`ButtonInput`]
    /// * `now` - Current monotonic instant
    ///
    /// # Returns
    /// `true` exactly when a debounced press edge fires.
    pub fn update(&mut self, level: PinLevel, now: I) -> bool {
        match level {
            PinLevel::Low => {
                if self.pressed {
                    return false;
                }
                let accepted = match self.last_edge {
                    None => true,
                    Some(edge) => {
                        now.duration_since(edge).as_millis() > self.window.as_millis()
                    }
                };
                if accepted {
                    self.pressed = true;
                    self.last_edge = Some(now);
                }
                accepted
            }
            PinLevel::High => {
                self.pressed = false;
                false
            }
        }
    }

    /// Whether the machine currently holds a consumed press.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
