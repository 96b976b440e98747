//! Raw register counts and their conversion to physical units

use tiltgauge_core::{Axis, RawSample};

use crate::registers::{ACCEL_LSB_PER_G, GYRO_LSB_PER_DPS};

/// Signed counts for all six axes, in register order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawCounts {
    /// Accelerometer X, Y, Z
    pub accel: [i16; 3],
    /// Gyroscope X, Y, Z
    pub gyro: [i16; 3],
}

impl RawCounts {
    /// Decode one register pair (high byte first)
    pub const fn decode_word(bytes: [u8; 2]) -> i16 {
        i16::from_be_bytes(bytes)
    }

    /// Store the counts for one axis
    pub fn set(&mut self, axis: Axis, counts: i16) {
        match axis {
            Axis::AccelX => self.accel[0] = counts,
            Axis::AccelY => self.accel[1] = counts,
            Axis::AccelZ => self.accel[2] = counts,
            Axis::GyroX => self.gyro[0] = counts,
            Axis::GyroY => self.gyro[1] = counts,
            Axis::GyroZ => self.gyro[2] = counts,
        }
    }

    /// Convert to g and °/s at the power-on full-scale ranges
    pub fn scaled(&self) -> RawSample {
        RawSample::new(
            self.accel.map(|c| f32::from(c) / ACCEL_LSB_PER_G),
            self.gyro.map(|c| f32::from(c) / GYRO_LSB_PER_DPS),
        )
    }
}
