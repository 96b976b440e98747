//! Complementary Filter Parameters
//!
//! Tuned values for fusing gyroscope integration with the accelerometer
//! gravity reference.

/// Microseconds per second.
pub const US_PER_SECOND: u64 = 1_000_000;

/// Default gyro weight of the complementary filter.
///
/// 0.98 keeps 98% of the gyro-integrated angle each step and pulls 2%
/// toward the accelerometer angle. Higher values respond more slowly to the
/// absolute reference and let drift live longer.
///
/// Source: tuned on the float-arm prototype; not derived
pub const DEFAULT_FILTER_ALPHA: f32 = 0.98;

/// Default cap on the gyro integration interval (µs); 0 means uncapped.
///
/// The full elapsed time is integrated by default, including the idle gap
/// before the first update of a cycle. Deployments with long gaps between
/// cycles can set a cap such as [`SUGGESTED_MAX_DT_US`].
pub const DEFAULT_MAX_DT_US: u64 = 0;

/// Cap for gauges that idle between cycles: fifty times the read cadence.
pub const SUGGESTED_MAX_DT_US: u64 = 1_000_000;

/// Squared-magnitude floor (g²) below which an accelerometer component is
/// treated as absent.
///
/// When both the horizontal component (ax² + az²) and ay² fall below this
/// floor the gravity vector carries no direction (free fall or a dead
/// accelerometer) and the accelerometer angle is undefined.
pub const DEGENERATE_GRAVITY_EPS: f32 = 1.0e-6;
