//! JSON shape of readings and configuration as published to consumers.

#![cfg(feature = "serde")]

use serde_json::{json, Value};
use tiltgauge_core::{
    CalibrationConfig, CalibrationProfile, FilterConfig, Reading, ReadingAssembler, ReadingStatus,
    SamplingConfig,
};

#[test]
fn reading_uses_published_field_names() {
    let reading = ReadingAssembler::default()
        .assemble(30.0, &CalibrationProfile::default(), 1_500)
        .unwrap();
    let value = serde_json::to_value(reading).unwrap();

    assert_eq!(value["pitch_angle"], json!(30.0));
    assert_eq!(value["raw_angle"], json!(30.0));
    assert_eq!(value["water_level_cm"], json!(110.0));
    assert_eq!(value["status"], json!("OK"));
    assert_eq!(value["timestamp"], json!(1_500));
}

#[test]
fn fault_status_serializes_in_capitals() {
    let value = serde_json::to_value(Reading::fault(0)).unwrap();
    assert_eq!(value["status"], json!("FAULT"));
    assert_eq!(value["water_level_cm"], json!(0.0));
}

#[test]
fn reading_survives_a_round_trip() {
    let reading = Reading {
        pitch_angle_deg: -1.25,
        water_level_cm: 188.5,
        raw_angle_deg: 0.75,
        status: ReadingStatus::Ok,
        timestamp: 42,
    };
    let text = serde_json::to_string(&reading).unwrap();
    let back: Reading = serde_json::from_str(&text).unwrap();
    assert_eq!(back, reading);
}

#[test]
fn partial_profile_falls_back_to_defaults() {
    let profile: CalibrationProfile = serde_json::from_value(json!({ "offset_deg": -2.5 })).unwrap();
    assert_eq!(profile, CalibrationProfile::default().with_offset(-2.5));
}

#[test]
fn empty_configs_deserialize_to_reference_tuning() {
    let empty = Value::Object(Default::default());

    let filter: FilterConfig = serde_json::from_value(empty.clone()).unwrap();
    let sampling: SamplingConfig = serde_json::from_value(empty.clone()).unwrap();
    let calibration: CalibrationConfig = serde_json::from_value(empty).unwrap();

    assert_eq!(filter, FilterConfig::default());
    assert_eq!(sampling, SamplingConfig::default());
    assert_eq!(calibration, CalibrationConfig::default());
}
