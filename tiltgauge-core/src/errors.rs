//! Error Types for Acquisition and Estimation Failures
//!
//! ## Design Philosophy
//!
//! The error system is sized for embedded use:
//!
//! 1. **Small Size**: variants carry a few numbers or a `&'static str`, never
//!    a heap string.
//!
//! 2. **Copy Semantics**: errors are returned on every cycle and are cheap to
//!    copy out of the hot path.
//!
//! 3. **Explicit Transport Failures**: a failed bus read is an error value,
//!    not a zeroed axis. The caller decides whether the cycle is a fault.
//!
//! ## Error Categories
//!
//! ### Transport
//! - `Acquisition`: the raw sample source could not deliver a sample
//!
//! ### Numeric
//! - `NonFiniteSample`: the source delivered NaN or infinity
//! - `NonFiniteResult`: arithmetic produced NaN or infinity
//!
//! ### Physical Implausibility
//! - `OutOfRange`: angle or water level outside the operating envelope
//!
//! ### Usage
//! - `InsufficientSamples`, `InvalidConfig`
//!
//! ## Handling Strategy
//!
//! ```rust
//! use tiltgauge_core::GaugeError;
//!
//! fn classify(err: GaugeError) -> &'static str {
//!     match err {
//!         GaugeError::Acquisition { .. } => "check bus wiring",
//!         GaugeError::OutOfRange { .. } => "arm outside envelope",
//!         GaugeError::InvalidConfig { .. } => "fix configuration",
//!         _ => "discard cycle",
//!     }
//! }
//! ```

use core::fmt;

use thiserror_no_std::Error;

/// Result type for gauge operations
pub type GaugeResult<T> = Result<T, GaugeError>;

/// Motion axis of a 6-axis sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Accelerometer X
    AccelX,
    /// Accelerometer Y
    AccelY,
    /// Accelerometer Z
    AccelZ,
    /// Gyroscope X
    GyroX,
    /// Gyroscope Y
    GyroY,
    /// Gyroscope Z
    GyroZ,
}

impl Axis {
    /// All axes in register order
    pub const ALL: [Axis; 6] = [
        Axis::AccelX,
        Axis::AccelY,
        Axis::AccelZ,
        Axis::GyroX,
        Axis::GyroY,
        Axis::GyroZ,
    ];

    /// Short label for logs
    pub const fn label(self) -> &'static str {
        match self {
            Axis::AccelX => "accel_x",
            Axis::AccelY => "accel_y",
            Axis::AccelZ => "accel_z",
            Axis::GyroX => "gyro_x",
            Axis::GyroY => "gyro_y",
            Axis::GyroZ => "gyro_z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised while acquiring, fusing or validating a reading
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GaugeError {
    /// Raw sample acquisition failed at the transport boundary
    #[error("Sample acquisition failed on {}", axis_label(.axis))]
    Acquisition {
        /// Axis whose read failed, if the source can tell
        axis: Option<Axis>,
    },

    /// Raw sample contained NaN or infinity
    #[error("Raw sample contains a non-finite value")]
    NonFiniteSample,

    /// Computation produced NaN or infinity
    #[error("Computation produced a non-finite value")]
    NonFiniteResult,

    /// Value outside the physically plausible envelope
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The computed value
        value: f32,
        /// Lower bound of the envelope
        min: f32,
        /// Upper bound of the envelope
        max: f32,
    },

    /// Not enough samples to compute a mean
    #[error("Insufficient samples: need {required}, have {available}")]
    InsufficientSamples {
        /// Minimum number of samples needed
        required: usize,
        /// Samples actually requested or collected
        available: usize,
    },

    /// Configuration value rejected
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong
        reason: &'static str,
    },
}

fn axis_label(axis: &Option<Axis>) -> &'static str {
    axis.map(Axis::label).unwrap_or("unknown axis")
}

#[cfg(feature = "defmt")]
impl defmt::Format for GaugeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Acquisition { axis } =>
                defmt::write!(fmt, "Acquisition failed on {}", axis_label(axis)),
            Self::NonFiniteSample =>
                defmt::write!(fmt, "Non-finite sample"),
            Self::NonFiniteResult =>
                defmt::write!(fmt, "Non-finite result"),
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::InsufficientSamples { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn acquisition_message_names_axis() {
        let err = GaugeError::Acquisition { axis: Some(Axis::GyroX) };
        assert_eq!(err.to_string(), "Sample acquisition failed on gyro_x");

        let err = GaugeError::Acquisition { axis: None };
        assert_eq!(err.to_string(), "Sample acquisition failed on unknown axis");
    }

    #[test]
    fn out_of_range_message() {
        let err = GaugeError::OutOfRange { value: 95.0, min: -90.0, max: 90.0 };
        assert_eq!(err.to_string(), "Value 95 outside range [-90, 90]");
    }
}
