//! MPU-6050 register map and default full-scale conversion
//!
//! Only the registers the gauge needs: power management, identity, and the
//! six measurement words. Each word is a big-endian two's-complement pair
//! (`*_H` then `*_L`); the device auto-increments the register pointer, so
//! one two-byte read starting at the high register returns the whole word.

use tiltgauge_core::Axis;

/// Default 7-bit bus address (AD0 low)
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// Value `WHO_AM_I` reports on a genuine part
pub const EXPECTED_WHO_AM_I: u8 = 0x68;

/// Accelerometer sensitivity at ±2 g (LSB per g)
pub const ACCEL_LSB_PER_G: f32 = 16384.0;

/// Gyroscope sensitivity at ±250 °/s (LSB per °/s)
pub const GYRO_LSB_PER_DPS: f32 = 131.0;

/// Time the device needs to leave sleep mode (ms)
pub const WAKE_SETTLE_MS: u32 = 100;

/// Register addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Accelerometer X, high byte
    AccelXoutH = 0x3B,
    /// Accelerometer Y, high byte
    AccelYoutH = 0x3D,
    /// Accelerometer Z, high byte
    AccelZoutH = 0x3F,
    /// Gyroscope X, high byte
    GyroXoutH = 0x43,
    /// Gyroscope Y, high byte
    GyroYoutH = 0x45,
    /// Gyroscope Z, high byte
    GyroZoutH = 0x47,
    /// Power management 1; writing 0 clears SLEEP
    PwrMgmt1 = 0x6B,
    /// Device identity
    WhoAmI = 0x75,
}

impl Register {
    /// Bus address of the register
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// High-byte register of an axis word
    pub const fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::AccelX => Register::AccelXoutH,
            Axis::AccelY => Register::AccelYoutH,
            Axis::AccelZ => Register::AccelZoutH,
            Axis::GyroX => Register::GyroXoutH,
            Axis::GyroY => Register::GyroYoutH,
            Axis::GyroZ => Register::GyroZoutH,
        }
    }
}
