//! MPU-6050 sample source for TiltGauge
//!
//! Reads the six measurement words of an InvenSense MPU-6050 over any
//! `embedded-hal` 1.0 I2C bus and hands them to the core engine as a
//! [`RawSample`](tiltgauge_core::RawSample) in g and °/s.
//!
//! ```no_run
//! use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
//! use tiltgauge_core::{time::{MonotonicClock, StdDelay}, CalibrationProfile, TiltGauge};
//! use tiltgauge_mpu6050::{Mpu6050, Mpu6050Config};
//!
//! // stands in for the platform's I2C peripheral
//! struct Bus;
//! impl ErrorType for Bus {
//!     type Error = ErrorKind;
//! }
//! impl I2c for Bus {
//!     fn transaction(&mut self, _address: u8, _ops: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
//!         Ok(())
//!     }
//! }
//!
//! let imu = Mpu6050::new(Bus, StdDelay, Mpu6050Config::default()).unwrap();
//! let mut gauge = TiltGauge::new(imu, MonotonicClock::new(), StdDelay);
//! let reading = gauge.read(&CalibrationProfile::default(), 10);
//! println!("{:.1} cm", reading.water_level_cm);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod counts;
pub mod driver;
pub mod errors;
pub mod registers;
pub mod retry;

pub use counts::RawCounts;
pub use driver::{Mpu6050, Mpu6050Config};
pub use errors::{DriverError, DriverResult};
pub use registers::{Register, DEFAULT_ADDRESS};
pub use retry::RetryPolicy;
