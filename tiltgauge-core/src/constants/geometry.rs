//! Lever-Arm Geometry and Operating Envelope
//!
//! Reference dimensions of the float-arm installation and the range of
//! outputs the mechanism can physically produce.

// ===== REFERENCE INSTALLATION =====

/// Arm length from pivot to float center (m).
pub const DEFAULT_ARM_LENGTH_M: f32 = 1.5;

/// Height of the pivot above the level datum (m).
pub const DEFAULT_PIVOT_HEIGHT_M: f32 = 2.0;

/// Radius of the spherical float (m).
pub const DEFAULT_FLOAT_RADIUS_M: f32 = 0.15;

/// Centimeters per meter.
pub const CM_PER_M: f32 = 100.0;

// ===== PLAUSIBILITY ENVELOPE =====

/// Lowest plausible calibrated pitch (degrees).
///
/// The arm cannot rotate past vertical without leaving its mount.
pub const ANGLE_MIN_DEG: f32 = -90.0;

/// Highest plausible calibrated pitch (degrees).
pub const ANGLE_MAX_DEG: f32 = 90.0;

/// Lowest plausible water level relative to datum (cm).
pub const WATER_LEVEL_MIN_CM: f32 = 0.0;

/// Highest plausible water level relative to datum (cm).
///
/// Pivot height plus arm length with margin for the reference installation.
pub const WATER_LEVEL_MAX_CM: f32 = 300.0;

// ===== OUTPUT PRECISION =====

/// Decimal places reported for pitch angles.
pub const ANGLE_DECIMALS: u32 = 2;

/// Decimal places reported for water levels.
pub const WATER_LEVEL_DECIMALS: u32 = 1;
