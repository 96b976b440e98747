//! Core engine for TiltGauge
//!
//! Turns raw 6-axis IMU samples from a pivoted float arm into a calibrated,
//! fault-checked water-level reading. Designed for edge devices with limited
//! resources.
//!
//! Data flow:
//!
//! ```text
//! SampleSource ─→ ComplementaryFilter ─→ Sampler (average)
//!                                            │
//!                   (Calibrator, offline) ───┤
//!                                            ↓
//!                         geometry::water_level_cm ─→ ReadingAssembler ─→ Reading
//! ```
//!
//! Key constraints:
//! - No heap allocation (angle runs are folded into running statistics)
//! - Single-threaded, blocking; the only suspension points are the timed
//!   delays between samples
//! - A bad cycle degrades to a `FAULT` reading, it never panics the caller
//!
//! ```no_run
//! use tiltgauge_core::{TiltGauge, CalibrationProfile, SamplingConfig};
//! use tiltgauge_core::time::{MonotonicClock, StdDelay};
//! # use tiltgauge_core::{GaugeResult, RawSample, SampleSource};
//! # struct Imu;
//! # impl SampleSource for Imu {
//! #     fn acquire(&mut self) -> GaugeResult<RawSample> { Ok(RawSample::at_rest()) }
//! # }
//!
//! let mut gauge = TiltGauge::new(Imu, MonotonicClock::new(), StdDelay);
//! let profile = CalibrationProfile::default();
//!
//! let reading = gauge.read(&profile, SamplingConfig::default().sample_count);
//! println!("{:.1} cm ({:?})", reading.water_level_cm, reading.status);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod calibration;
pub mod constants;
pub mod errors;
pub mod filter;
pub mod gauge;
pub mod geometry;
pub mod reading;
pub mod sample;
pub mod sampler;
pub mod time;
pub mod validators;

// Public API
pub use calibration::{CalibrationConfig, CalibrationProgress, CalibrationReport, Calibrator};
pub use errors::{Axis, GaugeError, GaugeResult};
pub use filter::{ComplementaryFilter, FilterConfig, FilterState};
pub use gauge::TiltGauge;
pub use geometry::{water_level_cm, CalibrationProfile};
pub use reading::{Reading, ReadingAssembler, ReadingStatus};
pub use sample::{RawSample, SampleSource};
pub use sampler::{AngleAccumulator, AngleStats, Sampler, SamplingConfig};
pub use validators::{AngleValidator, ValidationEnvelope, Validator, WaterLevelValidator};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
