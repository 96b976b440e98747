//! Lever-Arm Geometry
//!
//! Converts a calibrated pitch angle into a water level. The float is a
//! sphere on the end of a rigid arm; the arm pivots at a known height above
//! a fixed datum.
//!
//! ```text
//!   pivot ●───────────── L_arm ─────────────○ float (radius R)
//!         │╲ θ                              ┆
//!  H_pivot│  ╲  H_sub = L_arm · sin θ        ┆
//!         │                                  ┆
//!  ───────┴──────────── datum ───────────────┴──
//!
//!  L_water = H_pivot − H_sub − R_float
//! ```
//!
//! ## Modeling Assumptions
//!
//! - the arm is rigid and the pivot frictionless
//! - the float's lowest point just touches the surface (buoyancy and
//!   immersion depth are ignored)
//! - small-to-moderate angles; this is a first-order approximation, not a
//!   guarantee of physical accuracy at the extremes

use crate::{
    constants::geometry::{
        CM_PER_M, DEFAULT_ARM_LENGTH_M, DEFAULT_FLOAT_RADIUS_M, DEFAULT_PIVOT_HEIGHT_M,
    },
    errors::{GaugeError, GaugeResult},
};

/// Installation geometry plus the zero-offset from calibration
///
/// Supplied by configuration and read-only to the core. A fresh calibration
/// run produces a new offset; persisting it is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalibrationProfile {
    /// Additive pitch correction (degrees)
    pub offset_deg: f32,
    /// Pivot to float center (m)
    pub arm_length_m: f32,
    /// Pivot above datum (m)
    pub pivot_height_m: f32,
    /// Float sphere radius (m)
    pub float_radius_m: f32,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            offset_deg: 0.0,
            arm_length_m: DEFAULT_ARM_LENGTH_M,
            pivot_height_m: DEFAULT_PIVOT_HEIGHT_M,
            float_radius_m: DEFAULT_FLOAT_RADIUS_M,
        }
    }
}

impl CalibrationProfile {
    /// Profile for a given installation, zero offset
    pub fn new(arm_length_m: f32, pivot_height_m: f32, float_radius_m: f32) -> Self {
        Self { offset_deg: 0.0, arm_length_m, pivot_height_m, float_radius_m }
    }

    /// Same geometry with a new calibration offset
    pub fn with_offset(mut self, offset_deg: f32) -> Self {
        self.offset_deg = offset_deg;
        self
    }

    /// Check the geometry describes a buildable mechanism
    pub fn validate(&self) -> GaugeResult<()> {
        let all_finite = [self.offset_deg, self.arm_length_m, self.pivot_height_m, self.float_radius_m]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(GaugeError::InvalidConfig {
                reason: "calibration profile contains a non-finite value",
            });
        }
        if self.arm_length_m <= 0.0 {
            return Err(GaugeError::InvalidConfig { reason: "arm length must be positive" });
        }
        if self.float_radius_m < 0.0 {
            return Err(GaugeError::InvalidConfig { reason: "float radius cannot be negative" });
        }
        Ok(())
    }

    /// Water level for a calibrated angle using this geometry (cm)
    pub fn water_level_cm(&self, angle_deg: f32) -> f32 {
        water_level_cm(angle_deg, self.arm_length_m, self.pivot_height_m, self.float_radius_m)
    }
}

/// Water level above datum for a pitch angle (cm)
///
/// Pure function of the lever-arm model; see the module docs for the
/// assumptions it makes.
pub fn water_level_cm(angle_deg: f32, arm_length_m: f32, pivot_height_m: f32, float_radius_m: f32) -> f32 {
    let submersion_m = arm_length_m * libm::sinf(angle_deg.to_radians());
    let level_m = pivot_height_m - submersion_m - float_radius_m;
    level_m * CM_PER_M
}
