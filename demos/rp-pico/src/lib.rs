//! RP2040 hardware bindings for the bcd-clock driver.
//!
//! Each module implements one of the library's hardware seams over
//! rp2040-hal: the bit-banged 74HC595 chain, the PWM enable line, the ADC
//! pot, the pull-up buttons, the DS3231 wall clock, and the hardware timer.

#![no_std]

pub mod console;
pub mod display;
pub mod inputs;
pub mod rtc;
pub mod time;
