//! Sensor handle: one physical IMU, its filter state, and its host
//! collaborators.
//!
//! Everything a cycle touches lives on the handle, so several gauges can
//! run side by side and tests can swap in scripted sources and simulated
//! clocks. The handle is not shared across threads; no locking is needed.
//!
//! ```rust
//! use tiltgauge_core::{TiltGauge, CalibrationProfile, RawSample, GaugeResult, SampleSource};
//! use tiltgauge_core::time::SimulatedClock;
//!
//! struct Level;
//! impl SampleSource for Level {
//!     fn acquire(&mut self) -> GaugeResult<RawSample> {
//!         Ok(RawSample::at_rest())
//!     }
//! }
//!
//! let clock = SimulatedClock::new(0);
//! let mut gauge = TiltGauge::new(Level, &clock, &clock);
//!
//! let report = gauge.calibrate(100).unwrap();
//! let profile = CalibrationProfile::default().with_offset(report.offset_deg);
//!
//! let reading = gauge.read(&profile, 10);
//! assert!(reading.is_ok());
//! assert_eq!(reading.water_level_cm, 185.0);
//! ```

use embedded_hal::delay::DelayNs;

use crate::{
    calibration::{CalibrationConfig, CalibrationProgress, CalibrationReport, Calibrator},
    errors::GaugeResult,
    filter::{ComplementaryFilter, FilterConfig},
    geometry::CalibrationProfile,
    reading::{Reading, ReadingAssembler},
    sample::SampleSource,
    sampler::{AngleStats, Sampler, SamplingConfig},
    time::TimeSource,
    validators::ValidationEnvelope,
};

/// One float-arm tilt sensor
pub struct TiltGauge<S, C, D> {
    source: S,
    clock: C,
    delay: D,
    filter: ComplementaryFilter,
    assembler: ReadingAssembler,
    sampling: SamplingConfig,
    calibration: CalibrationConfig,
}

impl<S, C, D> TiltGauge<S, C, D>
where
    S: SampleSource,
    C: TimeSource,
    D: DelayNs,
{
    /// Gauge with reference tuning, filter anchored at the clock's now
    pub fn new(source: S, clock: C, delay: D) -> Self {
        let filter = ComplementaryFilter::with_defaults(clock.now());
        Self {
            source,
            clock,
            delay,
            filter,
            assembler: ReadingAssembler::default(),
            sampling: SamplingConfig::default(),
            calibration: CalibrationConfig::default(),
        }
    }

    /// Replace the filter tuning (resets filter state)
    pub fn with_filter_config(mut self, config: FilterConfig) -> GaugeResult<Self> {
        self.filter = ComplementaryFilter::new(config, self.clock.now())?;
        Ok(self)
    }

    /// Replace the operating envelope
    pub fn with_envelope(mut self, envelope: ValidationEnvelope) -> Self {
        self.assembler = ReadingAssembler::new(envelope);
        self
    }

    /// Replace the read cadence
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Replace the calibration run parameters
    pub fn with_calibration(mut self, calibration: CalibrationConfig) -> Self {
        self.calibration = calibration;
        self
    }

    /// Filter and its state
    pub fn filter(&self) -> &ComplementaryFilter {
        &self.filter
    }

    /// Read cadence in use
    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }

    /// Sample source, e.g. to reconfigure a driver
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Give back the collaborators
    pub fn release(self) -> (S, C, D) {
        (self.source, self.clock, self.delay)
    }

    /// Averaged filter angle over `sample_count` updates
    pub fn read_angle(&mut self, sample_count: usize) -> GaugeResult<AngleStats> {
        let config = self.sampling.with_sample_count(sample_count);
        let mut sampler = Sampler::new(&mut self.source, &self.clock, &mut self.delay);
        sampler.read_angle(&mut self.filter, &config)
    }

    /// One acquisition cycle, failures propagated
    ///
    /// Out-of-envelope values are not failures: they come back as a
    /// `FAULT` reading with their values intact.
    pub fn try_read(&mut self, profile: &CalibrationProfile, sample_count: usize) -> GaugeResult<Reading> {
        profile.validate()?;
        let stats = self.read_angle(sample_count)?;
        gauge_debug!(
            "Sampled {} angles: mean {:.3}°, spread {:.3}°",
            stats.count,
            stats.mean_deg,
            stats.spread_deg()
        );
        self.assembler.assemble(stats.mean_deg, profile, self.clock.now())
    }

    /// One acquisition cycle that never fails
    ///
    /// Any error degrades to a zeroed `FAULT` reading so one bad cycle
    /// cannot stop the acquisition loop.
    pub fn read(&mut self, profile: &CalibrationProfile, sample_count: usize) -> Reading {
        match self.try_read(profile, sample_count) {
            Ok(reading) => reading,
            Err(_err) => {
                gauge_warn!("Reading failed, reporting FAULT: {}", _err);
                Reading::fault(self.clock.now())
            }
        }
    }

    /// Calibration run with `sample_count` samples
    ///
    /// The returned offset belongs in the `CalibrationProfile` used by later
    /// reads; the gauge does not keep it.
    pub fn calibrate(&mut self, sample_count: usize) -> GaugeResult<CalibrationReport> {
        self.calibrate_with_progress(sample_count, |_| {})
    }

    /// Calibration run reporting coarse progress to `on_progress`
    pub fn calibrate_with_progress<F>(
        &mut self,
        sample_count: usize,
        on_progress: F,
    ) -> GaugeResult<CalibrationReport>
    where
        F: FnMut(CalibrationProgress),
    {
        let calibrator = Calibrator::new(self.calibration.with_sample_count(sample_count));
        let mut sampler = Sampler::new(&mut self.source, &self.clock, &mut self.delay);
        calibrator.run(&mut sampler, &mut self.filter, on_progress)
    }
}
