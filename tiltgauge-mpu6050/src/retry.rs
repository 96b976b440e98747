//! Bounded retry for bus transfers
//!
//! A single NACK or arbitration loss on a shared I2C bus is common and
//! transient. Each transfer gets a fixed number of attempts with a short
//! blocking pause between them; after that the last bus error is returned.

use embedded_hal::delay::DelayNs;

/// Attempts per transfer
pub const DEFAULT_ATTEMPTS: u8 = 3;

/// Pause between attempts (ms)
pub const DEFAULT_BACKOFF_MS: u32 = 10;

/// How often and how patiently to repeat a failed transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryPolicy {
    /// Total tries per transfer, including the first (0 behaves as 1)
    pub attempts: u8,
    /// Pause before each retry (ms)
    pub backoff_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            backoff_ms: DEFAULT_BACKOFF_MS,
        }
    }
}

impl RetryPolicy {
    /// One try, no pause
    pub const fn none() -> Self {
        Self { attempts: 1, backoff_ms: 0 }
    }

    /// Set the number of tries
    pub fn with_attempts(mut self, attempts: u8) -> Self {
        self.attempts = attempts;
        self
    }

    /// Set the pause between tries
    pub fn with_backoff_ms(mut self, backoff_ms: u32) -> Self {
        self.backoff_ms = backoff_ms;
        self
    }

    /// Run `op` until it succeeds or the attempts are spent
    ///
    /// Returns the last error on exhaustion.
    pub fn run<T, E, D, F>(&self, delay: &mut D, mut op: F) -> Result<T, E>
    where
        D: DelayNs,
        F: FnMut() -> Result<T, E>,
    {
        let attempts = self.attempts.max(1);
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if attempt >= attempts => return Err(err),
                Err(_) => {
                    driver_debug!("Bus transfer failed, retry {}/{}", attempt, attempts - 1);
                    if self.backoff_ms > 0 {
                        delay.delay_ms(self.backoff_ms);
                    }
                    attempt += 1;
                }
            }
        }
    }
}
