//! Blocking MPU-6050 driver
//!
//! ```text
//! new:     [verify WHO_AM_I] → PWR_MGMT_1 = 0 → wait 100 ms
//! acquire: for axis in accel x,y,z, gyro x,y,z:
//!              write_read(reg_H, 2 bytes)   // retried per RetryPolicy
//!          scale → RawSample
//! ```
//!
//! The device is left at its power-on ranges (±2 g, ±250 °/s). A failed
//! axis read after all retries ends the acquisition with an error; it is
//! never reported as a zero reading.

use embedded_hal::{delay::DelayNs, i2c::I2c};
use tiltgauge_core::{Axis, GaugeResult, RawSample, SampleSource};

use crate::{
    counts::RawCounts,
    errors::{DriverError, DriverResult},
    registers::{Register, DEFAULT_ADDRESS, EXPECTED_WHO_AM_I, WAKE_SETTLE_MS},
    retry::RetryPolicy,
};

/// Bus-level settings for one device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mpu6050Config {
    /// 7-bit bus address (0x68, or 0x69 with AD0 high)
    pub address: u8,
    /// Retry behaviour for every transfer
    pub retry: RetryPolicy,
    /// Check `WHO_AM_I` before waking the device
    pub verify_identity: bool,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            retry: RetryPolicy::default(),
            verify_identity: false,
        }
    }
}

impl Mpu6050Config {
    /// Set the bus address
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Require a genuine `WHO_AM_I` at construction
    pub fn with_identity_check(mut self, verify: bool) -> Self {
        self.verify_identity = verify;
        self
    }
}

/// MPU-6050 on an I2C bus
pub struct Mpu6050<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Mpu6050Config,
}

impl<I2C, D> Mpu6050<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Take the bus, wake the device and wait for it to settle
    pub fn new(i2c: I2C, delay: D, config: Mpu6050Config) -> DriverResult<Self, I2C::Error> {
        let mut device = Self { i2c, delay, config };
        if config.verify_identity {
            device.verify_identity()?;
        }
        device.wake()?;
        device.delay.delay_ms(WAKE_SETTLE_MS);
        driver_info!("MPU-6050 ready at 0x{:02X}", config.address);
        Ok(device)
    }

    /// Settings in use
    pub fn config(&self) -> &Mpu6050Config {
        &self.config
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Clear the SLEEP bit (writes 0 to `PWR_MGMT_1`)
    pub fn wake(&mut self) -> DriverResult<(), I2C::Error> {
        let Self { i2c, delay, config } = self;
        let address = config.address;
        config
            .retry
            .run(delay, || i2c.write(address, &[Register::PwrMgmt1.addr(), 0x00]))
            .map_err(|error| bus_failure(None, error))
    }

    /// Identity register contents
    pub fn who_am_i(&mut self) -> DriverResult<u8, I2C::Error> {
        let mut byte = [0u8; 1];
        self.read_registers(Register::WhoAmI, &mut byte)
            .map_err(|error| bus_failure(None, error))?;
        Ok(byte[0])
    }

    /// Fail unless `WHO_AM_I` reports an MPU-6050
    pub fn verify_identity(&mut self) -> DriverResult<(), I2C::Error> {
        let found = self.who_am_i()?;
        if found != EXPECTED_WHO_AM_I {
            driver_warn!("WHO_AM_I returned 0x{:02X}, expected 0x{:02X}", found, EXPECTED_WHO_AM_I);
            return Err(DriverError::UnexpectedDevice { found });
        }
        Ok(())
    }

    /// Signed counts of one axis
    pub fn read_axis(&mut self, axis: Axis) -> DriverResult<i16, I2C::Error> {
        let mut word = [0u8; 2];
        self.read_registers(Register::for_axis(axis), &mut word)
            .map_err(|error| bus_failure(Some(axis), error))?;
        Ok(RawCounts::decode_word(word))
    }

    /// Signed counts of all six axes
    pub fn read_counts(&mut self) -> DriverResult<RawCounts, I2C::Error> {
        let mut counts = RawCounts::default();
        for axis in Axis::ALL {
            counts.set(axis, self.read_axis(axis)?);
        }
        Ok(counts)
    }

    /// All six axes in g and °/s
    pub fn read_sample(&mut self) -> DriverResult<RawSample, I2C::Error> {
        Ok(self.read_counts()?.scaled())
    }

    fn read_registers(&mut self, start: Register, buffer: &mut [u8]) -> Result<(), I2C::Error> {
        let Self { i2c, delay, config } = self;
        let address = config.address;
        config
            .retry
            .run(delay, || i2c.write_read(address, &[start.addr()], &mut *buffer))
    }
}

impl<I2C, D> SampleSource for Mpu6050<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn acquire(&mut self) -> GaugeResult<RawSample> {
        Ok(self.read_sample()?)
    }
}

fn bus_failure<E: core::fmt::Debug>(axis: Option<Axis>, error: E) -> DriverError<E> {
    driver_warn!(
        "I2C transfer on {} failed after retries: {:?}",
        axis.map(Axis::label).unwrap_or("control register"),
        error
    );
    DriverError::Bus { axis, error }
}
