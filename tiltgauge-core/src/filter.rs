//! Complementary Filter for Float-Arm Pitch
//!
//! ## Overview
//!
//! Two sensors see the arm's pitch with opposite failure modes:
//! - the **accelerometer** measures the gravity vector, so its angle has no
//!   drift but carries every vibration and ripple as noise
//! - the **gyroscope** measures angular rate, so integrating it is smooth
//!   but accumulates bias without bound
//!
//! The complementary filter blends them with a fixed weight:
//!
//! ```text
//! accel_angle = atan2(ay, √(ax² + az²))
//! gyro_delta  = gx · dt
//! angle       = α·(angle_prev + gyro_delta) + (1 − α)·accel_angle
//! ```
//!
//! With α = 0.98 the estimate follows the gyro from step to step and is
//! pulled 2% toward the accelerometer each update, which bleeds gyro drift
//! off with a time constant of about `dt / (1 − α)`.
//!
//! ## Numeric Guards
//!
//! - `dt` is measured with saturating subtraction, so a clock that steps
//!   backwards contributes no gyro rotation; it is capped only when
//!   `FilterConfig::max_dt_us` is non-zero
//! - a gravity vector with no usable direction (free fall, dead
//!   accelerometer) falls back to the previous angle instead of `atan2(0, 0)`
//! - a non-finite result is returned to the caller but never stored
//!
//! The filtered angle is unbounded; range checks happen on the
//! reported value, not the internal state.

use crate::{
    constants::filter::{DEFAULT_FILTER_ALPHA, DEFAULT_MAX_DT_US, DEGENERATE_GRAVITY_EPS},
    errors::{GaugeError, GaugeResult},
    sample::RawSample,
    time::{delta_us, us_to_seconds, Timestamp},
};

/// Complementary filter tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterConfig {
    /// Weight of the gyro-integrated angle, in [0, 1]
    pub alpha: f32,
    /// Cap on the gyro integration interval in µs
    ///
    /// 0 (the default) integrates the full elapsed time. A non-zero cap
    /// keeps an idle gap between cycles from injecting a large gyro
    /// rotation, at the cost of under-integrating a real slow swing.
    pub max_dt_us: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_FILTER_ALPHA,
            max_dt_us: DEFAULT_MAX_DT_US,
        }
    }
}

impl FilterConfig {
    /// Set the gyro weight
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the integration interval cap
    pub fn with_max_dt_us(mut self, max_dt_us: u64) -> Self {
        self.max_dt_us = max_dt_us;
        self
    }

    /// Reject weights outside [0, 1]
    pub fn validate(&self) -> GaugeResult<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(GaugeError::InvalidConfig {
                reason: "filter alpha must be within [0, 1]",
            });
        }
        Ok(())
    }
}

/// Persistent filter state, one per physical sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterState {
    /// Current fused pitch estimate (degrees, unbounded)
    pub filtered_angle_deg: f32,
    /// Timestamp of the last update (µs, never decreases)
    pub last_timestamp: Timestamp,
}

impl FilterState {
    /// Zero angle anchored at `now`
    pub const fn new(now: Timestamp) -> Self {
        Self { filtered_angle_deg: 0.0, last_timestamp: now }
    }
}

/// Gyro/accelerometer complementary filter
#[derive(Debug, Clone)]
pub struct ComplementaryFilter {
    config: FilterConfig,
    state: FilterState,
}

impl ComplementaryFilter {
    /// Create a filter anchored at `now`
    pub fn new(config: FilterConfig, now: Timestamp) -> GaugeResult<Self> {
        config.validate()?;
        Ok(Self { config, state: FilterState::new(now) })
    }

    /// Filter with the reference tuning
    pub fn with_defaults(now: Timestamp) -> Self {
        Self { config: FilterConfig::default(), state: FilterState::new(now) }
    }

    /// Tuning in use
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Current state
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Current fused angle (degrees)
    pub fn angle(&self) -> f32 {
        self.state.filtered_angle_deg
    }

    /// Discard accumulated angle and drift, restart timing at `now`
    pub fn reset(&mut self, now: Timestamp) {
        self.state = FilterState::new(now);
    }

    /// Pitch implied by the gravity vector alone (degrees)
    ///
    /// `None` when the vector is too small to carry a direction.
    pub fn accel_angle(sample: &RawSample) -> Option<f32> {
        let [ax, ay, az] = sample.accel;
        let horizontal_sq = ax * ax + az * az;
        if horizontal_sq < DEGENERATE_GRAVITY_EPS && ay * ay < DEGENERATE_GRAVITY_EPS {
            return None;
        }
        Some(libm::atan2f(ay, libm::sqrtf(horizontal_sq)).to_degrees())
    }

    /// Fuse one sample taken at `now`, returning the new angle (degrees)
    pub fn update(&mut self, sample: &RawSample, now: Timestamp) -> f32 {
        let mut dt_us = delta_us(self.state.last_timestamp, now);
        self.state.last_timestamp = self.state.last_timestamp.max(now);

        if self.config.max_dt_us > 0 {
            dt_us = dt_us.min(self.config.max_dt_us);
        }

        let previous = self.state.filtered_angle_deg;
        let gyro_delta = sample.pitch_rate() * us_to_seconds(dt_us);
        let accel_angle = Self::accel_angle(sample).unwrap_or(previous);

        let alpha = self.config.alpha;
        let angle = alpha * (previous + gyro_delta) + (1.0 - alpha) * accel_angle;

        if angle.is_finite() {
            self.state.filtered_angle_deg = angle;
        }
        angle
    }
}
