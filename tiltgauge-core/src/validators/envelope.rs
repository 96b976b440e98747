//! Operating envelope: pitch and water level checked together

use crate::{
    constants::geometry::{ANGLE_MAX_DEG, ANGLE_MIN_DEG, WATER_LEVEL_MAX_CM, WATER_LEVEL_MIN_CM},
    errors::GaugeResult,
    validators::{AngleValidator, Validator, WaterLevelValidator},
};

/// Plausible operating envelope of the mechanism
///
/// Bounds are inclusive. Deployments with a different mount override them
/// through configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationEnvelope {
    /// Lowest valid pitch (degrees)
    pub angle_min_deg: f32,
    /// Highest valid pitch (degrees)
    pub angle_max_deg: f32,
    /// Lowest valid water level (cm)
    pub level_min_cm: f32,
    /// Highest valid water level (cm)
    pub level_max_cm: f32,
}

impl Default for ValidationEnvelope {
    fn default() -> Self {
        Self {
            angle_min_deg: ANGLE_MIN_DEG,
            angle_max_deg: ANGLE_MAX_DEG,
            level_min_cm: WATER_LEVEL_MIN_CM,
            level_max_cm: WATER_LEVEL_MAX_CM,
        }
    }
}

impl ValidationEnvelope {
    /// Override the pitch bounds
    pub fn with_angle_range(mut self, min_deg: f32, max_deg: f32) -> Self {
        self.angle_min_deg = min_deg;
        self.angle_max_deg = max_deg;
        self
    }

    /// Override the water level bounds
    pub fn with_level_range(mut self, min_cm: f32, max_cm: f32) -> Self {
        self.level_min_cm = min_cm;
        self.level_max_cm = max_cm;
        self
    }

    /// Validator for the pitch bounds
    pub fn angle_validator(&self) -> AngleValidator {
        AngleValidator::new_with_limits(self.angle_min_deg, self.angle_max_deg)
    }

    /// Validator for the water level bounds
    pub fn level_validator(&self) -> WaterLevelValidator {
        WaterLevelValidator::new_with_limits(self.level_min_cm, self.level_max_cm)
    }

    /// Both values must pass; the angle is checked first
    pub fn check(&self, angle_deg: f32, level_cm: f32) -> GaugeResult<()> {
        self.angle_validator().validate(angle_deg)?;
        self.level_validator().validate(level_cm)
    }
}
