//! Fixed-point math utilities for data definitions.
//!
//! Fractional designer values (speeds, ranges, cooldowns, build times)
//! are stored as fixed-point so that every platform reading the same
//! data file ends up with bit-identical numbers.

use fixed::types::I32F32;

/// Fixed-point number type for all fractional data values.
///
/// Uses 32 bits for integer part and 32 bits for fractional part.
/// Range: approximately -2,147,483,648 to 2,147,483,647
/// Precision: approximately 0.00000000023
pub type Fixed = I32F32;

/// Serde support for fixed-point numbers written as decimals.
///
/// Designers author values like `move_speed: 3.5`; the decimal is parsed
/// once at load time and converted to [`Fixed`]. Values outside the
/// fixed-point range are rejected rather than wrapped.
pub mod fixed_decimal {
    use super::Fixed;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    /// Serialize a fixed-point number as a decimal.
    pub fn serialize<S>(value: &Fixed, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(value.to_num::<f64>())
    }

    /// Deserialize a fixed-point number from a decimal.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Fixed, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Fixed::checked_from_num(value)
            .ok_or_else(|| D::Error::custom(format!("{value} is out of fixed-point range")))
    }
}

/// Convert seconds to whole simulation ticks, rounding up.
///
/// Negative durations clamp to zero.
#[must_use]
pub fn seconds_to_ticks(seconds: Fixed, tick_rate: u32) -> u32 {
    if seconds <= Fixed::ZERO {
        return 0;
    }
    let ticks = seconds
        .saturating_mul(Fixed::saturating_from_num(tick_rate))
        .saturating_ceil();
    ticks.saturating_to_num::<u32>()
}
