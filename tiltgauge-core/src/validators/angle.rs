//! Pitch angle validator
//!
//! Validates calibrated pitch angles against the arm's mechanical range:
//! a pivoted arm cannot rotate past vertical in either direction.

use crate::{
    constants::geometry::{ANGLE_MAX_DEG, ANGLE_MIN_DEG},
    errors::{GaugeError, GaugeResult},
    validators::{Validatable, Validator, ValidatorConstraints},
};

use super::utils;

/// Pitch validator for degrees from horizontal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleValidator {
    /// Minimum valid pitch in degrees
    min_deg: f32,

    /// Maximum valid pitch in degrees
    max_deg: f32,
}

impl Default for AngleValidator {
    fn default() -> Self {
        Self {
            min_deg: ANGLE_MIN_DEG,
            max_deg: ANGLE_MAX_DEG,
        }
    }
}

impl AngleValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self { min_deg: min, max_deg: max }
    }
}

impl Validator for AngleValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> GaugeResult<()> {
        if !value.is_valid() {
            return Err(GaugeError::NonFiniteResult);
        }

        utils::check_range(value, self.min_deg, self.max_deg)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_deg,
            max_value: self.max_deg,
        }
    }
}
