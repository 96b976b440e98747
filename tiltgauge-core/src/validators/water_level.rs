//! Water level validator
//!
//! Validates converted water levels against the installation envelope:
//! the float cannot report below the datum or above the top of the mount.

use crate::{
    constants::geometry::{WATER_LEVEL_MAX_CM, WATER_LEVEL_MIN_CM},
    errors::{GaugeError, GaugeResult},
    validators::{Validatable, Validator, ValidatorConstraints},
};

use super::utils;

/// Water level validator for centimeters above datum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterLevelValidator {
    min_cm: f32,
    max_cm: f32,
}

impl Default for WaterLevelValidator {
    fn default() -> Self {
        Self {
            min_cm: WATER_LEVEL_MIN_CM,
            max_cm: WATER_LEVEL_MAX_CM,
        }
    }
}

impl WaterLevelValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self { min_cm: min, max_cm: max }
    }
}

impl Validator for WaterLevelValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> GaugeResult<()> {
        if !value.is_valid() {
            return Err(GaugeError::NonFiniteResult);
        }

        utils::check_range(value, self.min_cm, self.max_cm)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_cm,
            max_value: self.max_cm,
        }
    }
}
