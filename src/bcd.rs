//! Packed binary-coded-decimal helpers.
//!
//! Each decimal digit occupies one 4-bit nibble: tens in the high nibble,
//! ones in the low nibble. This is the register format battery-backed RTC
//! chips speak natively and the format the display chain expects one byte
//! per digit pair.

/// Packs a two-digit decimal value into one BCD byte.
///
/// The high nibble holds `value / 10`, the low nibble `value % 10`.
/// Callers guarantee `value <= 99` (clock fields stay well inside that);
/// larger inputs produce a garbage high nibble rather than an error.
///
/// # Arguments
/// * `value` - Decimal value in `0..=99`
///
/// # Returns
/// The packed BCD byte, e.g. `pack(59) == 0x59`
#[inline]
pub const fn pack(value: u8) -> u8 {
    (value / 10) << 4 | (value % 10)
}

/// Unpacks a BCD byte back into its decimal value.
///
/// Inverse of [`pack`] for well-formed input (both nibbles `<= 9`).
///
/// # Arguments
/// * `byte` - Packed BCD byte
///
/// # Returns
/// The decimal value, e.g. `unpack(0x23) == 23`
#[inline]
pub const fn unpack(byte: u8) -> u8 {
    (byte >> 4) * 10 + (byte & 0x0F)
}
