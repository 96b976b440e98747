//! Driver errors
//!
//! Generic over the bus error so no information is lost at the driver
//! boundary. Converting into [`GaugeError`] keeps only the failing axis,
//! which is what the core needs to degrade the cycle.

use core::fmt::Debug;

use thiserror_no_std::Error;
use tiltgauge_core::{Axis, GaugeError};

/// Result type for driver operations
pub type DriverResult<T, E> = Result<T, DriverError<E>>;

/// Errors raised by the MPU-6050 driver
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError<E: Debug> {
    /// Bus transfer failed after every retry
    #[error("I2C transfer failed on {}: {error:?}", axis_label(.axis))]
    Bus {
        /// Axis being read, `None` for control registers
        axis: Option<Axis>,
        /// Last error reported by the bus
        error: E,
    },

    /// `WHO_AM_I` returned something other than an MPU-6050
    #[error("Unexpected device identity 0x{found:02X}")]
    UnexpectedDevice {
        /// Identity byte read back
        found: u8,
    },
}

impl<E: Debug> DriverError<E> {
    /// Axis involved in the failure, if any
    pub fn axis(&self) -> Option<Axis> {
        match self {
            DriverError::Bus { axis, .. } => *axis,
            DriverError::UnexpectedDevice { .. } => None,
        }
    }
}

impl<E: Debug> From<DriverError<E>> for GaugeError {
    fn from(err: DriverError<E>) -> Self {
        GaugeError::Acquisition { axis: err.axis() }
    }
}

fn axis_label(axis: &Option<Axis>) -> &'static str {
    axis.map(Axis::label).unwrap_or("control register")
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn bus_error_names_axis() {
        let err: DriverError<&str> = DriverError::Bus { axis: Some(Axis::GyroX), error: "nack" };
        assert_eq!(err.to_string(), "I2C transfer failed on gyro_x: \"nack\"");
    }

    #[test]
    fn maps_to_acquisition_failure() {
        let err: DriverError<()> = DriverError::Bus { axis: Some(Axis::AccelY), error: () };
        assert_eq!(GaugeError::from(err), GaugeError::Acquisition { axis: Some(Axis::AccelY) });

        let err: DriverError<()> = DriverError::UnexpectedDevice { found: 0x70 };
        assert_eq!(GaugeError::from(err), GaugeError::Acquisition { axis: None });
    }

    #[test]
    fn identity_message_is_hex() {
        let err: DriverError<()> = DriverError::UnexpectedDevice { found: 0x72 };
        assert_eq!(err.to_string(), "Unexpected device identity 0x72");
    }
}
