//! Common Validation Utilities
//!
//! Pure helpers shared by the validators and the reading assembler: range
//! checks and fixed-precision rounding. No allocation, no panics.

use crate::errors::{GaugeError, GaugeResult};

/// Check if a value is within the specified inclusive range
pub fn check_range(value: f32, min: f32, max: f32) -> GaugeResult<()> {
    if value < min || value > max {
        Err(GaugeError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Round to `decimals` places, halves away from zero
///
/// Precision is fixed by the caller regardless of magnitude. Values whose
/// scaled form would overflow are returned unchanged.
pub fn round_to(value: f32, decimals: u32) -> f32 {
    let scale = (0..decimals).fold(1.0f32, |acc, _| acc * 10.0);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    libm::roundf(scaled) / scale
}

/// Replace NaN and infinity with zero
pub fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::Validatable;

    #[test]
    fn range_check_is_inclusive() {
        assert!(check_range(-90.0, -90.0, 90.0).is_ok());
        assert!(check_range(90.0, -90.0, 90.0).is_ok());
        assert!(check_range(90.01, -90.0, 90.0).is_err());
        assert!(check_range(-0.5, 0.0, 300.0).is_err());
    }

    #[test]
    fn nan_slips_through_range_check() {
        // NaN compares false both ways, so it must be caught before this
        assert!(check_range(f32::NAN, 0.0, 1.0).is_ok());
        assert!(!f32::NAN.is_valid());
    }

    #[test]
    fn rounding_precision() {
        assert_eq!(round_to(12.3456, 2), 12.35);
        assert_eq!(round_to(-12.3456, 2), -12.35);
        assert_eq!(round_to(184.96, 1), 185.0);
        assert_eq!(round_to(7.0, 0), 7.0);
    }

    #[test]
    fn rounding_leaves_huge_values_alone() {
        assert_eq!(round_to(f32::MAX, 2), f32::MAX);
    }

    #[test]
    fn finite_or_zero_scrubs() {
        assert_eq!(finite_or_zero(f32::NAN), 0.0);
        assert_eq!(finite_or_zero(f32::NEG_INFINITY), 0.0);
        assert_eq!(finite_or_zero(3.5), 3.5);
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f32.is_valid());
        assert!(!f32::INFINITY.is_valid());
    }
}
