#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimeOfDay`**: Hours, minutes, seconds - the value the display shows
//! - **`DisplayFrame`**: Three register bytes (BCD, inverted for the active-low sink)
//! - **`ChainOrder`**: Which end of the register chain gets the hour byte
//! - **`ClockDisplay`**: Serializes frames onto the chain with an atomic latch commit
//! - **`DebouncedButton`**: Press-edge debouncer, one per adjustment button
//! - **`SweepAnimation`**: Attract pattern shown until the clock is confirmed
//! - **`ClockDriver`**: The poll loop - brightness, buttons, rollover-gated rendering
//! - **`WallClock`**, **`ShiftRegisterBus`**, **`DisplayEnable`**, **`BrightnessInput`**,
//!   **`ButtonInput`**, **`DiagnosticSink`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your monotonic timer
//!
//! All hardware traits are infallible by contract: implementations handle bus
//! and pin errors internally, because a clock with no error path to a user
//! can only keep going.

pub mod bcd;
pub mod brightness;
pub mod button;
pub mod clock;
pub mod diagnostics;
pub mod display;
pub mod driver;
pub mod frame;
pub mod sweep;
pub mod time;

pub use brightness::{ANALOG_FULL_SCALE, BrightnessInput, duty_for_reading};
pub use button::{ButtonInput, DebouncedButton, PinLevel};
pub use clock::{TimeOfDay, TimeOfDayError, WallClock};
pub use diagnostics::{DiagnosticSink, SilentDiagnostics, TIME_NOT_SET_LINE, status_line};
pub use display::{ClockDisplay, DisplayEnable, ShiftRegisterBus};
pub use driver::{
    ClockConfig, ClockDriver, ClockState, DEBOUNCE_WINDOW_MS, POLL_INTERVAL_MS, SWEEP_HOLD_MS,
    ServiceOutcome,
};
pub use frame::{ChainOrder, DisplayFrame};
pub use sweep::SweepAnimation;
pub use time::{TimeDuration, TimeInstant, TimeSource};
