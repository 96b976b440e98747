//! Sampling Cadence
//!
//! Sample counts and spacing for regular reads and calibration runs.

// ===== REGULAR READS =====

/// Filter updates averaged into one reading.
pub const READ_SAMPLE_COUNT: usize = 10;

/// Spacing between filter updates during a read (ms).
///
/// 10 samples × 20 ms ≈ 200 ms latency per reading.
pub const READ_SAMPLE_INTERVAL_MS: u32 = 20;

// ===== CALIBRATION =====

/// Filter updates averaged into a calibration offset.
pub const CALIBRATION_SAMPLE_COUNT: usize = 100;

/// Spacing between filter updates during calibration (ms).
///
/// 100 samples × 50 ms ≈ 5 s of sampling.
pub const CALIBRATION_SAMPLE_INTERVAL_MS: u32 = 50;

/// Settling delay before calibration sampling starts (ms).
///
/// Lets the arm and fluid surface stop moving after the operator positions it.
pub const CALIBRATION_SETTLE_MS: u32 = 2000;

/// Calibration progress is reported every this many samples.
pub const CALIBRATION_PROGRESS_EVERY: usize = 10;
