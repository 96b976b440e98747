//! Time management for the acquisition loop
//!
//! The core consumes two host collaborators:
//! - a monotonic clock (`TimeSource`) used to measure the gyro integration
//!   interval between filter updates
//! - a blocking delay (`embedded_hal::delay::DelayNs`) used to space samples
//!
//! Timestamps are microseconds. Millisecond ticks are too coarse for a
//! 20 ms sample cadence: one tick of jitter is already 5% of `dt`.

use core::cell::Cell;

use embedded_hal::delay::DelayNs;

/// Timestamp in microseconds on a monotonic clock (arbitrary epoch)
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in microseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;

    /// Get precision in microseconds
    fn precision_us(&self) -> u32;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn is_wall_clock(&self) -> bool {
        (**self).is_wall_clock()
    }

    fn precision_us(&self) -> u32 {
        (**self).precision_us()
    }
}

/// Elapsed microseconds between two timestamps, zero if time went backwards
pub fn delta_us(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

/// Convert a microsecond interval to seconds
pub fn us_to_seconds(us: u64) -> f32 {
    us as f32 / crate::constants::US_PER_SECOND as f32
}

/// Whole microseconds in `duration`, saturating at `Timestamp::MAX`
pub fn duration_to_us(duration: core::time::Duration) -> Timestamp {
    Timestamp::try_from(duration.as_micros()).unwrap_or(Timestamp::MAX)
}

/// Monotonic clock backed by `std::time::Instant`
///
/// Starts at 0 when created, always increases.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Create a clock whose epoch is now
    pub fn new() -> Self {
        Self { origin: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for MonotonicClock {
    fn now(&self) -> Timestamp {
        duration_to_us(self.origin.elapsed())
    }

    fn is_wall_clock(&self) -> bool {
        false
    }

    fn precision_us(&self) -> u32 {
        1
    }
}

/// Blocking delay using `std::thread::sleep`
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(std::time::Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// Deterministic clock for tests and replay
///
/// Time only moves when told to. `&SimulatedClock` is both a `TimeSource`
/// and a `DelayNs`, so handing the same clock to a gauge as its clock and
/// its delay makes every sleep advance the clock by exactly the slept
/// amount.
#[derive(Debug, Default)]
pub struct SimulatedClock {
    nanos: Cell<u64>,
}

impl SimulatedClock {
    /// Create a clock reading `start_us`
    pub fn new(start_us: Timestamp) -> Self {
        Self { nanos: Cell::new(start_us.saturating_mul(1_000)) }
    }

    /// Jump to an absolute time (may go backwards)
    pub fn set(&self, us: Timestamp) {
        self.nanos.set(us.saturating_mul(1_000));
    }

    /// Move time forward
    pub fn advance_us(&self, us: u64) {
        self.advance_ns(us.saturating_mul(1_000));
    }

    fn advance_ns(&self, ns: u64) {
        self.nanos.set(self.nanos.get().saturating_add(ns));
    }
}

impl TimeSource for SimulatedClock {
    fn now(&self) -> Timestamp {
        self.nanos.get() / 1_000
    }

    fn is_wall_clock(&self) -> bool {
        false
    }

    fn precision_us(&self) -> u32 {
        1
    }
}

impl DelayNs for &SimulatedClock {
    fn delay_ns(&mut self, ns: u32) {
        self.advance_ns(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.advance_us(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance_us(u64::from(ms) * 1_000);
    }
}
