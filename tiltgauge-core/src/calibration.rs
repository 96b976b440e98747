//! Zero-Offset Calibration
//!
//! With the arm held horizontal and the water still, the true pitch is 0°.
//! Whatever the filter reports in that pose is systematic bias (mount tilt,
//! accelerometer offset), so the calibration offset is simply its negation:
//!
//! ```text
//! settle (2 s) → reset filter → 100 updates @ 50 ms → offset = −mean
//! ```
//!
//! Preconditions are operational, not checked in code: the operator holds
//! the arm level and waits for the surface to calm. The run reports
//! progress for operator feedback but never persists its result; the caller
//! stores the offset in its [`CalibrationProfile`](crate::CalibrationProfile).

use embedded_hal::delay::DelayNs;

use crate::{
    constants::sampling::{
        CALIBRATION_PROGRESS_EVERY, CALIBRATION_SAMPLE_COUNT, CALIBRATION_SAMPLE_INTERVAL_MS,
        CALIBRATION_SETTLE_MS,
    },
    errors::GaugeResult,
    filter::ComplementaryFilter,
    sample::SampleSource,
    sampler::{AngleStats, Sampler},
    time::TimeSource,
};

/// Calibration run parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalibrationConfig {
    /// Wait before sampling so mechanical transients decay (ms)
    pub settle_ms: u32,
    /// Filter updates averaged into the offset
    pub sample_count: usize,
    /// Delay between updates (ms)
    pub interval_ms: u32,
    /// Report progress every this many samples (0 = only on completion)
    pub progress_every: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            settle_ms: CALIBRATION_SETTLE_MS,
            sample_count: CALIBRATION_SAMPLE_COUNT,
            interval_ms: CALIBRATION_SAMPLE_INTERVAL_MS,
            progress_every: CALIBRATION_PROGRESS_EVERY,
        }
    }
}

impl CalibrationConfig {
    /// Set the settling delay
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Set the number of samples
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the delay between samples
    pub fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }
}

/// Coarse progress of a running calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationProgress {
    /// Samples taken so far
    pub completed: usize,
    /// Samples in the run
    pub total: usize,
}

impl CalibrationProgress {
    /// Run has taken every sample
    pub fn is_done(&self) -> bool {
        self.completed >= self.total
    }
}

/// Outcome of a calibration run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationReport {
    /// Offset to add to filtered angles (degrees)
    pub offset_deg: f32,
    /// Mean filtered angle in the reference pose (degrees)
    pub mean_angle_deg: f32,
    /// Peak-to-peak spread over the run (degrees)
    pub spread_deg: f32,
    /// Samples averaged
    pub samples: usize,
}

impl CalibrationReport {
    fn from_stats(stats: &AngleStats) -> Self {
        Self {
            offset_deg: -stats.mean_deg,
            mean_angle_deg: stats.mean_deg,
            spread_deg: stats.spread_deg(),
            samples: stats.count,
        }
    }
}

/// Runs the calibration procedure against a filter
#[derive(Debug, Clone, Copy, Default)]
pub struct Calibrator {
    config: CalibrationConfig,
}

impl Calibrator {
    /// Calibrator with the given run parameters
    pub fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    /// Run parameters
    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Settle, reset the filter, sample, and return the offset
    ///
    /// `on_progress` fires every `progress_every` samples and once more on
    /// completion if the last sample was not already reported.
    pub fn run<S, C, D, F>(
        &self,
        sampler: &mut Sampler<'_, S, C, D>,
        filter: &mut ComplementaryFilter,
        mut on_progress: F,
    ) -> GaugeResult<CalibrationReport>
    where
        S: SampleSource,
        C: TimeSource,
        D: DelayNs,
        F: FnMut(CalibrationProgress),
    {
        let total = self.config.sample_count;
        let every = self.config.progress_every;
        gauge_info!("Calibration: {} samples, hold arm horizontal and water still", total);

        sampler.pause_ms(self.config.settle_ms);
        filter.reset(sampler.now());

        let stats = sampler.run(filter, total, self.config.interval_ms, |completed, _| {
            let milestone = every > 0 && completed % every == 0;
            if milestone || completed == total {
                gauge_info!("Calibration progress: {}/{}", completed, total);
                on_progress(CalibrationProgress { completed, total });
            }
        })?;

        let report = CalibrationReport::from_stats(&stats);
        gauge_info!(
            "Calibration complete: mean {:.2}°, offset {:.2}°, spread {:.2}°",
            report.mean_angle_deg,
            report.offset_deg,
            report.spread_deg
        );
        Ok(report)
    }
}
