//! Validator & Reading Assembler
//!
//! Applies the calibration offset to an averaged angle, converts it to a
//! water level, checks both against the operating envelope, and rounds
//! them to their fixed output precision.
//!
//! A `FAULT` status is advisory: out-of-envelope values are still reported
//! (rounded) so an operator can see how far off they are. Only a failed
//! cycle (transport error, non-finite arithmetic) zeroes the numbers.

use crate::{
    constants::geometry::{ANGLE_DECIMALS, WATER_LEVEL_DECIMALS},
    errors::{GaugeError, GaugeResult},
    geometry::CalibrationProfile,
    time::Timestamp,
    validators::{
        utils::{finite_or_zero, round_to},
        ValidationEnvelope,
    },
};

/// Health of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadingStatus {
    /// Inside the operating envelope
    #[cfg_attr(feature = "serde", serde(rename = "OK"))]
    Ok,
    /// Outside the envelope, or the cycle failed
    #[cfg_attr(feature = "serde", serde(rename = "FAULT"))]
    Fault,
}

impl ReadingStatus {
    /// Wire label
    pub const fn as_str(self) -> &'static str {
        match self {
            ReadingStatus::Ok => "OK",
            ReadingStatus::Fault => "FAULT",
        }
    }
}

/// One acquisition cycle's result
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Calibrated pitch, 2 decimal places (degrees)
    #[cfg_attr(feature = "serde", serde(rename = "pitch_angle"))]
    pub pitch_angle_deg: f32,
    /// Water level above datum, 1 decimal place (cm)
    pub water_level_cm: f32,
    /// Averaged pitch before the offset, 2 decimal places (degrees)
    #[cfg_attr(feature = "serde", serde(rename = "raw_angle"))]
    pub raw_angle_deg: f32,
    /// Envelope verdict
    pub status: ReadingStatus,
    /// End of the cycle (µs, monotonic)
    pub timestamp: Timestamp,
}

impl Reading {
    /// Safe zeroed reading for a failed cycle
    pub const fn fault(timestamp: Timestamp) -> Self {
        Self {
            pitch_angle_deg: 0.0,
            water_level_cm: 0.0,
            raw_angle_deg: 0.0,
            status: ReadingStatus::Fault,
            timestamp,
        }
    }

    /// Status is `OK`
    pub fn is_ok(&self) -> bool {
        self.status == ReadingStatus::Ok
    }
}

/// Builds readings from averaged angles
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadingAssembler {
    envelope: ValidationEnvelope,
}

impl ReadingAssembler {
    /// Assembler checking against `envelope`
    pub fn new(envelope: ValidationEnvelope) -> Self {
        Self { envelope }
    }

    /// Envelope in use
    pub fn envelope(&self) -> &ValidationEnvelope {
        &self.envelope
    }

    /// Offset, convert, validate and round one averaged angle
    ///
    /// Out-of-envelope values produce `Ok(Reading)` with `FAULT` status;
    /// only non-finite arithmetic is an error.
    pub fn assemble(
        &self,
        avg_angle_deg: f32,
        profile: &CalibrationProfile,
        timestamp: Timestamp,
    ) -> GaugeResult<Reading> {
        let calibrated = avg_angle_deg + profile.offset_deg;
        let level = profile.water_level_cm(calibrated);
        if !(avg_angle_deg.is_finite() && calibrated.is_finite() && level.is_finite()) {
            return Err(GaugeError::NonFiniteResult);
        }

        let status = match self.envelope.check(calibrated, level) {
            Ok(()) => ReadingStatus::Ok,
            Err(_err) => {
                gauge_warn!(
                    "Out of range - angle: {:.2}°, level: {:.1} cm ({})",
                    calibrated,
                    level,
                    _err
                );
                ReadingStatus::Fault
            }
        };

        Ok(Reading {
            pitch_angle_deg: finite_or_zero(round_to(calibrated, ANGLE_DECIMALS)),
            water_level_cm: finite_or_zero(round_to(level, WATER_LEVEL_DECIMALS)),
            raw_angle_deg: finite_or_zero(round_to(avg_angle_deg, ANGLE_DECIMALS)),
            status,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_arm_reads_reference_height() {
        let reading = ReadingAssembler::default()
            .assemble(0.0, &CalibrationProfile::default(), 7)
            .unwrap();
        assert_eq!(reading.pitch_angle_deg, 0.0);
        assert_eq!(reading.water_level_cm, 185.0);
        assert_eq!(reading.status, ReadingStatus::Ok);
        assert_eq!(reading.timestamp, 7);
    }

    #[test]
    fn offset_is_applied_before_conversion() {
        let profile = CalibrationProfile::default().with_offset(-2.0);
        let reading = ReadingAssembler::default().assemble(32.0, &profile, 0).unwrap();
        assert_eq!(reading.pitch_angle_deg, 30.0);
        assert_eq!(reading.raw_angle_deg, 32.0);
        assert_eq!(reading.water_level_cm, 110.0);
    }

    #[test]
    fn past_vertical_faults_but_keeps_values() {
        let reading = ReadingAssembler::default()
            .assemble(95.0, &CalibrationProfile::default(), 0)
            .unwrap();
        assert_eq!(reading.status, ReadingStatus::Fault);
        assert_eq!(reading.pitch_angle_deg, 95.0);
        assert!(reading.water_level_cm > 0.0);
    }

    #[test]
    fn negative_level_faults() {
        // 1.5 m arm, 0.5 m pivot: at 30° the float sits below the datum
        let profile = CalibrationProfile::new(1.5, 0.5, 0.15);
        let reading = ReadingAssembler::default().assemble(30.0, &profile, 0).unwrap();
        assert_eq!(reading.status, ReadingStatus::Fault);
        assert!(reading.water_level_cm < 0.0);
    }

    #[test]
    fn rounding_is_fixed_precision() {
        let reading = ReadingAssembler::default()
            .assemble(1.23456, &CalibrationProfile::default(), 0)
            .unwrap();
        assert_eq!(reading.pitch_angle_deg, 1.23);
        assert_eq!(reading.raw_angle_deg, 1.23);
    }

    #[test]
    fn non_finite_angle_is_an_error() {
        let result = ReadingAssembler::default().assemble(f32::NAN, &CalibrationProfile::default(), 0);
        assert_eq!(result, Err(GaugeError::NonFiniteResult));
    }

    #[test]
    fn fault_reading_is_zeroed() {
        let reading = Reading::fault(42);
        assert_eq!(reading.pitch_angle_deg, 0.0);
        assert_eq!(reading.water_level_cm, 0.0);
        assert_eq!(reading.raw_angle_deg, 0.0);
        assert!(!reading.is_ok());
        assert_eq!(reading.status.as_str(), "FAULT");
    }
}
