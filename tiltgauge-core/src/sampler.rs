//! Sampling & Averaging Controller
//!
//! Drives the complementary filter at a fixed cadence for a fixed count and
//! averages the resulting angles. The filter removes most gyro/accel noise;
//! averaging a short run removes what is left of single-sample jitter.
//!
//! ```text
//! for i in 0..n:
//!     sample = source.acquire()?       // transport faults end the run
//!     angle  = filter.update(sample, clock.now())
//!     stats.push(angle)
//!     if i < n-1: delay(interval)      // the only suspension point
//! stats.finish()                       // mean, min, max, count
//! ```
//!
//! Angles are folded into running statistics as they arrive, so a run of
//! any length uses constant memory.

use embedded_hal::delay::DelayNs;

use crate::{
    constants::sampling::{READ_SAMPLE_COUNT, READ_SAMPLE_INTERVAL_MS},
    errors::{GaugeError, GaugeResult},
    filter::ComplementaryFilter,
    sample::SampleSource,
    time::{TimeSource, Timestamp},
    validators::Validatable,
};

/// Cadence of a regular read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplingConfig {
    /// Filter updates per reading
    pub sample_count: usize,
    /// Delay between updates (ms)
    pub interval_ms: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_count: READ_SAMPLE_COUNT,
            interval_ms: READ_SAMPLE_INTERVAL_MS,
        }
    }
}

impl SamplingConfig {
    /// Set the number of filter updates
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the delay between updates
    pub fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }
}

/// Summary of one sampling run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngleStats {
    /// Arithmetic mean (degrees)
    pub mean_deg: f32,
    /// Smallest angle seen (degrees)
    pub min_deg: f32,
    /// Largest angle seen (degrees)
    pub max_deg: f32,
    /// Number of angles averaged
    pub count: usize,
}

impl AngleStats {
    /// Summarize a run of angles
    pub fn from_angles(angles: &[f32]) -> GaugeResult<Self> {
        let mut acc = AngleAccumulator::new();
        for &angle in angles {
            acc.push(angle);
        }
        acc.finish()
    }

    /// Peak-to-peak spread (degrees)
    pub fn spread_deg(&self) -> f32 {
        self.max_deg - self.min_deg
    }
}

/// Running sum, extremes and count of a stream of angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleAccumulator {
    sum: f32,
    min_deg: f32,
    max_deg: f32,
    count: usize,
}

impl Default for AngleAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl AngleAccumulator {
    /// Nothing seen yet
    pub const fn new() -> Self {
        Self { sum: 0.0, min_deg: f32::INFINITY, max_deg: f32::NEG_INFINITY, count: 0 }
    }

    /// Fold in one angle
    pub fn push(&mut self, angle: f32) {
        self.sum += angle;
        self.min_deg = self.min_deg.min(angle);
        self.max_deg = self.max_deg.max(angle);
        self.count += 1;
    }

    /// Angles folded in so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Statistics of everything pushed
    pub fn finish(&self) -> GaugeResult<AngleStats> {
        if self.count == 0 {
            return Err(GaugeError::InsufficientSamples { required: 1, available: 0 });
        }

        let mean_deg = self.sum / self.count as f32;
        if !mean_deg.is_valid() {
            return Err(GaugeError::NonFiniteResult);
        }

        Ok(AngleStats {
            mean_deg,
            min_deg: self.min_deg,
            max_deg: self.max_deg,
            count: self.count,
        })
    }
}

/// Drives a filter from a sample source on a fixed cadence
pub struct Sampler<'a, S, C, D> {
    source: &'a mut S,
    clock: &'a C,
    delay: &'a mut D,
}

impl<'a, S, C, D> Sampler<'a, S, C, D>
where
    S: SampleSource,
    C: TimeSource,
    D: DelayNs,
{
    /// Borrow the collaborators for one or more runs
    pub fn new(source: &'a mut S, clock: &'a C, delay: &'a mut D) -> Self {
        Self { source, clock, delay }
    }

    /// Current time from the host clock
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Block for `ms` milliseconds
    pub fn pause_ms(&mut self, ms: u32) {
        if ms > 0 {
            self.delay.delay_ms(ms);
        }
    }

    /// Run the filter `count` times, `interval_ms` apart
    ///
    /// `on_angle` sees the 1-based index and the angle after each update.
    /// The run stops at the first failed or non-finite sample.
    pub fn run<F>(
        &mut self,
        filter: &mut ComplementaryFilter,
        count: usize,
        interval_ms: u32,
        mut on_angle: F,
    ) -> GaugeResult<AngleStats>
    where
        F: FnMut(usize, f32),
    {
        if count == 0 {
            return Err(GaugeError::InsufficientSamples { required: 1, available: 0 });
        }

        let mut stats = AngleAccumulator::new();
        for index in 0..count {
            let sample = self.source.acquire()?;
            if !sample.is_valid() {
                return Err(GaugeError::NonFiniteSample);
            }

            let angle = filter.update(&sample, self.clock.now());
            if !angle.is_valid() {
                return Err(GaugeError::NonFiniteResult);
            }

            stats.push(angle);
            on_angle(index + 1, angle);

            if index + 1 < count {
                self.pause_ms(interval_ms);
            }
        }

        stats.finish()
    }

    /// Noise-reduced angle: mean of `config.sample_count` filter updates
    pub fn read_angle(
        &mut self,
        filter: &mut ComplementaryFilter,
        config: &SamplingConfig,
    ) -> GaugeResult<AngleStats> {
        self.run(filter, config.sample_count, config.interval_ms, |_, _| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Axis, sample::RawSample, time::SimulatedClock};

    struct Constant(RawSample);

    impl SampleSource for Constant {
        fn acquire(&mut self) -> GaugeResult<RawSample> {
            Ok(self.0)
        }
    }

    struct FailsAfter(usize);

    impl SampleSource for FailsAfter {
        fn acquire(&mut self) -> GaugeResult<RawSample> {
            if self.0 == 0 {
                return Err(GaugeError::Acquisition { axis: Some(Axis::AccelY) });
            }
            self.0 -= 1;
            Ok(RawSample::at_rest())
        }
    }

    #[test]
    fn stats_of_known_run() {
        let stats = AngleStats::from_angles(&[1.0, 2.0, 3.0, 6.0]).unwrap();
        assert_eq!(stats.mean_deg, 3.0);
        assert_eq!(stats.spread_deg(), 5.0);
        assert_eq!(stats.count, 4);
    }

    #[test]
    fn empty_run_has_no_mean() {
        assert_eq!(
            AngleStats::from_angles(&[]),
            Err(GaugeError::InsufficientSamples { required: 1, available: 0 })
        );
    }

    #[test]
    fn sleeps_between_samples_only() {
        let clock = SimulatedClock::new(0);
        let mut delay = &clock;
        let mut source = Constant(RawSample::at_rest());
        let mut filter = ComplementaryFilter::with_defaults(clock.now());

        let mut sampler = Sampler::new(&mut source, &clock, &mut delay);
        let stats = sampler.read_angle(&mut filter, &SamplingConfig::default()).unwrap();

        assert_eq!(stats.count, 10);
        assert_eq!(clock.now(), 9 * 20_000);
    }

    #[test]
    fn transport_fault_ends_run() {
        let clock = SimulatedClock::new(0);
        let mut delay = &clock;
        let mut source = FailsAfter(3);
        let mut filter = ComplementaryFilter::with_defaults(0);

        let mut sampler = Sampler::new(&mut source, &clock, &mut delay);
        let result = sampler.read_angle(&mut filter, &SamplingConfig::default());
        assert_eq!(result, Err(GaugeError::Acquisition { axis: Some(Axis::AccelY) }));
    }

    #[test]
    fn non_finite_sample_never_reaches_filter() {
        let clock = SimulatedClock::new(0);
        let mut delay = &clock;
        let mut source = Constant(RawSample::new([f32::NAN, 0.0, 1.0], [0.0; 3]));
        let mut filter = ComplementaryFilter::with_defaults(0);

        let mut sampler = Sampler::new(&mut source, &clock, &mut delay);
        let result = sampler.read_angle(&mut filter, &SamplingConfig::default());
        assert_eq!(result, Err(GaugeError::NonFiniteSample));
        assert_eq!(filter.angle(), 0.0);
    }

    #[test]
    fn long_run_uses_constant_memory() {
        let clock = SimulatedClock::new(0);
        let mut delay = &clock;
        let mut source = Constant(RawSample::at_rest());
        let mut filter = ComplementaryFilter::with_defaults(0);

        let mut sampler = Sampler::new(&mut source, &clock, &mut delay);
        let config = SamplingConfig::default().with_sample_count(1_000);
        let stats = sampler.read_angle(&mut filter, &config).unwrap();
        assert_eq!(stats.count, 1_000);
        assert_eq!(stats.mean_deg, 0.0);
        assert_eq!(clock.now(), 999 * 20_000);
    }

    #[test]
    fn accumulator_tracks_extremes() {
        let mut acc = AngleAccumulator::new();
        for angle in [2.0, -1.0, 5.0] {
            acc.push(angle);
        }
        let stats = acc.finish().unwrap();
        assert_eq!(acc.count(), 3);
        assert_eq!(stats.mean_deg, 2.0);
        assert_eq!((stats.min_deg, stats.max_deg), (-1.0, 5.0));
    }
}
