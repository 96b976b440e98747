//! Raw motion samples and the source that produces them
//!
//! A `RawSample` is one 6-axis reading: acceleration in g, angular rate in
//! degrees/second. Samples are produced on demand, consumed by one filter
//! update, and dropped.

use crate::errors::GaugeResult;
use crate::validators::Validatable;

/// One 6-axis motion sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Acceleration (ax, ay, az) in g
    pub accel: [f32; 3],
    /// Angular rate (gx, gy, gz) in degrees/second
    pub gyro: [f32; 3],
}

impl RawSample {
    /// Build a sample from its two vectors
    pub const fn new(accel: [f32; 3], gyro: [f32; 3]) -> Self {
        Self { accel, gyro }
    }

    /// Sample of a motionless sensor with gravity along +Z
    pub const fn at_rest() -> Self {
        Self { accel: [0.0, 0.0, 1.0], gyro: [0.0; 3] }
    }

    /// Pitch rate about the arm's pivot axis (degrees/second)
    pub fn pitch_rate(&self) -> f32 {
        self.gyro[0]
    }
}

impl Validatable for RawSample {
    fn is_valid(&self) -> bool {
        self.accel.iter().chain(self.gyro.iter()).all(|v| v.is_valid())
    }
}

/// Supplier of raw samples (bus driver, replay file, test double)
///
/// A transport failure must come back as an error, never as a zeroed
/// sample: zeros are a plausible reading and would be fused silently.
pub trait SampleSource {
    /// Acquire one sample
    fn acquire(&mut self) -> GaugeResult<RawSample>;
}

impl<T: SampleSource + ?Sized> SampleSource for &mut T {
    fn acquire(&mut self) -> GaugeResult<RawSample> {
        (**self).acquire()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_sample_is_valid() {
        assert!(RawSample::at_rest().is_valid());
    }

    #[test]
    fn nan_on_any_axis_is_invalid() {
        for axis in 0..6 {
            let mut sample = RawSample::at_rest();
            if axis < 3 {
                sample.accel[axis] = f32::NAN;
            } else {
                sample.gyro[axis - 3] = f32::INFINITY;
            }
            assert!(!sample.is_valid(), "axis {} should invalidate", axis);
        }
    }
}
