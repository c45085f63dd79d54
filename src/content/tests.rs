//! Content domain: tests for tuning file parsing and validation.

use bevy::prelude::Vec2;
use std::path::Path;

use super::{
    GameplayDefaults, load_and_validate, load_gameplay_defaults, parse_gameplay_defaults,
    validate_gameplay_defaults,
};
use crate::movement::{ControllerSettings, MotorTuning};
use crate::race::RaceSettings;

const SHIPPED_DEFAULTS: &str = include_str!("../../assets/data/gameplay_defaults.ron");

fn fields(defaults: &GameplayDefaults) -> Vec<&'static str> {
    validate_gameplay_defaults(defaults)
        .iter()
        .map(|e| e.field)
        .collect()
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_file_matches_built_in_defaults() {
    let parsed = parse_gameplay_defaults("gameplay_defaults.ron", SHIPPED_DEFAULTS).unwrap();
    assert_eq!(parsed, GameplayDefaults::default());
    assert!(validate_gameplay_defaults(&parsed).is_empty());
}

#[test]
fn test_built_in_defaults_convert_to_resources() {
    let defaults = GameplayDefaults::default();
    assert_eq!(defaults.motor_tuning(), MotorTuning::default());
    assert_eq!(defaults.controller_settings(), ControllerSettings::default());
    assert_eq!(defaults.race_settings(), RaceSettings::default());
    assert_eq!(defaults.gravity(), Vec2::new(0.0, -9.81));
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_gameplay_defaults("broken.ron", "(schema_version: 1,").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_section_is_a_parse_error() {
    let text = SHIPPED_DEFAULTS.replace("best_times_capacity: 3,", "");
    assert!(parse_gameplay_defaults("partial.ron", &text).is_err());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_gameplay_defaults(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));

    let messages = load_and_validate(Path::new("does/not/exist.ron")).unwrap_err();
    assert_eq!(messages.len(), 1);
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_validation_rejects_degenerate_box() {
    let mut defaults = GameplayDefaults::default();
    defaults.controller.size = Vec2::new(1.0, 0.0).into();
    assert_eq!(fields(&defaults), vec!["controller.size"]);

    defaults.controller.size = Vec2::new(0.01, 2.0).into();
    assert_eq!(fields(&defaults), vec!["controller.size"]);
}

#[test]
fn test_validation_rejects_bad_motor_values() {
    let mut defaults = GameplayDefaults::default();
    defaults.motor.max_fall_speed = 5.0;
    defaults.motor.coyote_time = -0.1;
    defaults.motor.jump_buffer = -1.0;
    defaults.motor.crouch_height = 0.0;

    assert_eq!(
        fields(&defaults),
        vec![
            "motor.crouch_height",
            "motor.max_fall_speed",
            "motor.jump_buffer",
            "motor.coyote_time",
        ]
    );
}

#[test]
fn test_validation_rejects_non_finite_motor_values() {
    let mut defaults = GameplayDefaults::default();
    defaults.motor.gravity_scale = f32::NAN;
    defaults.motor.move_speed = f32::INFINITY;
    defaults.motor.jump_height = f32::NAN;
    defaults.motor.ceiling_probe_offset = f32::NEG_INFINITY;
    defaults.motor.drag = f32::INFINITY;
    defaults.motor.max_fall_speed = f32::NEG_INFINITY;
    defaults.motor.ceiling_probe_size = Vec2::new(f32::INFINITY, 0.1).into();

    assert_eq!(
        fields(&defaults),
        vec![
            "motor.gravity_scale",
            "motor.move_speed",
            "motor.jump_height",
            "motor.ceiling_probe_offset",
            "motor.max_fall_speed",
            "motor.drag",
            "motor.ceiling_probe_size",
        ]
    );
}

#[test]
fn test_tuning_file_with_nan_gravity_scale_is_rejected() {
    let contents = SHIPPED_DEFAULTS.replace("gravity_scale: 1.0", "gravity_scale: NaN");
    assert_ne!(contents, SHIPPED_DEFAULTS);
    let parsed = parse_gameplay_defaults("gameplay_defaults.ron", &contents).unwrap();
    assert!(parsed.motor.gravity_scale.is_nan());
    assert_eq!(fields(&parsed), vec!["motor.gravity_scale"]);
}

#[test]
fn test_validation_rejects_bad_race_values() {
    let mut defaults = GameplayDefaults::default();
    defaults.race.best_times_capacity = 0;
    defaults.race.records_path = "  ".to_string();
    defaults.schema_version = 7;

    assert_eq!(
        fields(&defaults),
        vec![
            "schema_version",
            "race.best_times_capacity",
            "race.records_path"
        ]
    );
}

#[test]
fn test_zero_jump_height_is_allowed() {
    let mut defaults = GameplayDefaults::default();
    defaults.motor.jump_height = 0.0;
    assert!(validate_gameplay_defaults(&defaults).is_empty());
}
