//! Plausibility Validators
//!
//! ## Overview
//!
//! A reading is only as good as the mechanism it describes. The float arm
//! is rigid and pivoted, so a few physical facts bound every honest output:
//!
//! - the arm cannot rotate past vertical: pitch stays within [-90°, 90°]
//! - the float cannot sit below the datum or above the installation: water
//!   level stays within [0, 300] cm for the reference mount
//!
//! Anything outside those bounds means a fault somewhere upstream (loose
//! mount, stale calibration offset, corrupted sample) and the reading is
//! flagged. Out-of-range values are reported, not suppressed: the numbers
//! are still useful when diagnosing what went wrong.
//!
//! ## Validation Layers
//!
//! ### 1. Numeric validity
//! NaN and infinity are rejected before any range check.
//!
//! ### 2. Range
//! Per-quantity bounds from [`constants::geometry`](crate::constants::geometry).
//!
//! ## Usage Example
//!
//! ```rust
//! use tiltgauge_core::validators::{AngleValidator, Validator, ValidationEnvelope};
//!
//! let angle = AngleValidator::default();
//! assert!(angle.validate(12.5).is_ok());
//! assert!(angle.validate(95.0).is_err());
//!
//! let envelope = ValidationEnvelope::default();
//! assert!(envelope.check(12.5, 150.0).is_ok());
//! ```

mod angle;
mod envelope;
mod water_level;
pub mod utils;

pub use angle::AngleValidator;
pub use envelope::ValidationEnvelope;
pub use water_level::WaterLevelValidator;

use crate::errors::GaugeResult;

/// Core validator trait, one implementation per reported quantity
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single value
    fn validate(&self, value: Self::Value) -> GaugeResult<()>;

    /// Get physical constraints for this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Physical constraints for a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Minimum valid value (physics limit)
    pub min_value: f32,

    /// Maximum valid value (physics limit)
    pub max_value: f32,
}

/// Trait for values that can be checked for numeric validity
pub trait Validatable {
    /// Check if the value is numerically valid (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
