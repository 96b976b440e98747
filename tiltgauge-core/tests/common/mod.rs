//! Shared fixtures for gauge integration tests
//!
//! Provides:
//! - A scripted sample source that replays a fixed sequence
//! - Sample builders for known tilts with deterministic noise
//! - Tolerance assertions

#![allow(dead_code)]

use tiltgauge_core::{GaugeError, GaugeResult, RawSample, SampleSource};

/// Replays a fixed sequence of acquisition results
///
/// Once the script runs out it either starts over (`cycling`) or fails every
/// further acquisition like an unplugged bus.
pub struct ScriptedSource {
    script: Vec<GaugeResult<RawSample>>,
    cursor: usize,
    cycling: bool,
}

impl ScriptedSource {
    pub fn new(samples: Vec<RawSample>) -> Self {
        Self {
            script: samples.into_iter().map(Ok).collect(),
            cursor: 0,
            cycling: false,
        }
    }

    pub fn from_results(script: Vec<GaugeResult<RawSample>>) -> Self {
        Self { script, cursor: 0, cycling: false }
    }

    pub fn repeating(sample: RawSample) -> Self {
        Self::new(vec![sample]).cycling()
    }

    pub fn cycling(mut self) -> Self {
        self.cycling = true;
        self
    }

    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl SampleSource for ScriptedSource {
    fn acquire(&mut self) -> GaugeResult<RawSample> {
        if self.cursor >= self.script.len() {
            if !self.cycling || self.script.is_empty() {
                return Err(GaugeError::Acquisition { axis: None });
            }
            self.cursor = 0;
        }
        let result = self.script[self.cursor];
        self.cursor += 1;
        result
    }
}

/// Motionless sample tilted `deg` about the pivot axis
pub fn tilted(deg: f32) -> RawSample {
    let rad = deg.to_radians();
    RawSample::new([0.0, rad.sin(), rad.cos()], [0.0; 3])
}

/// `count` samples around `deg`, each off by up to ±`jitter_deg`
pub fn noisy_tilt_series(deg: f32, jitter_deg: f32, count: usize, seed: u32) -> Vec<RawSample> {
    let mut rng = TestRng::new(seed);
    (0..count)
        .map(|_| tilted(deg + rng.gen_range(-jitter_deg, jitter_deg)))
        .collect()
}

/// Deterministic random number generator for tests
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / 16777216.0
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}
