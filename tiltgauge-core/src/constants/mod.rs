//! Constants for TiltGauge Core
//!
//! Centralized, documented constants used throughout the gauge. Every
//! numeric default lives here with its unit and source, so configuration
//! types can point at a single definition.
//!
//! ## Organization
//!
//! - **Filter**: complementary filter weight and numeric guards
//! - **Geometry**: reference lever-arm dimensions and operating envelope
//! - **Sampling**: cadence and sample counts for reads and calibration
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Include the unit in the name
//! 3. Reference the datasheet or deployment where the value comes from

/// Complementary filter parameters.
pub mod filter;

/// Lever-arm reference geometry and plausibility envelope.
pub mod geometry;

/// Sampling cadence for reads and calibration runs.
pub mod sampling;

// Re-export commonly used constants for convenience
pub use filter::{DEFAULT_FILTER_ALPHA, DEFAULT_MAX_DT_US, SUGGESTED_MAX_DT_US, US_PER_SECOND};

pub use geometry::{
    DEFAULT_ARM_LENGTH_M, DEFAULT_PIVOT_HEIGHT_M, DEFAULT_FLOAT_RADIUS_M,
    ANGLE_MIN_DEG, ANGLE_MAX_DEG, WATER_LEVEL_MIN_CM, WATER_LEVEL_MAX_CM,
};

pub use sampling::{
    READ_SAMPLE_COUNT, READ_SAMPLE_INTERVAL_MS,
    CALIBRATION_SAMPLE_COUNT, CALIBRATION_SAMPLE_INTERVAL_MS, CALIBRATION_SETTLE_MS,
};
