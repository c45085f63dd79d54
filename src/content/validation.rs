//! Validation for loaded tuning values.

use bevy::prelude::*;

use super::data::{GameplayDefaults, SUPPORTED_SCHEMA_VERSION};
use crate::movement::MIN_BOX_SIZE;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a condition on a field
macro_rules! check {
    ($errors:expr, $ok:expr, $field:expr, $($message:tt)+) => {
        if !$ok {
            $errors.push(ValidationError {
                field: $field,
                message: format!($($message)+),
            });
        }
    };
}

fn check_box_size(errors: &mut Vec<ValidationError>, field: &'static str, size: Vec2) {
    check!(
        errors,
        size.is_finite() && size.x >= MIN_BOX_SIZE && size.y >= MIN_BOX_SIZE,
        field,
        "must be at least {} on each side, got {:?}",
        MIN_BOX_SIZE,
        size
    );
}

fn check_finite(errors: &mut Vec<ValidationError>, field: &'static str, value: f32) {
    check!(errors, value.is_finite(), field, "must be finite, got {}", value);
}

/// Validate every section of the tuning file.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_gameplay_defaults(defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        defaults.schema_version == SUPPORTED_SCHEMA_VERSION,
        "schema_version",
        "is {}, expected {}",
        defaults.schema_version,
        SUPPORTED_SCHEMA_VERSION
    );

    check!(
        errors,
        defaults.gravity().is_finite(),
        "physics.gravity",
        "must be finite"
    );

    // Controller box
    let offset: Vec2 = defaults.controller.offset.into();
    check!(
        errors,
        offset.is_finite(),
        "controller.offset",
        "must be finite"
    );
    check_box_size(&mut errors, "controller.size", defaults.controller.size.into());

    // Motor
    let motor = &defaults.motor;
    check_finite(&mut errors, "motor.gravity_scale", motor.gravity_scale);
    check_finite(&mut errors, "motor.move_speed", motor.move_speed);
    check_finite(&mut errors, "motor.crouch_speed", motor.crouch_speed);
    check_finite(&mut errors, "motor.crouch_smoothing", motor.crouch_smoothing);
    check_finite(&mut errors, "motor.jump_height", motor.jump_height);
    check_finite(
        &mut errors,
        "motor.ceiling_probe_offset",
        motor.ceiling_probe_offset,
    );
    check!(
        errors,
        motor.crouch_height.is_finite() && motor.crouch_height >= MIN_BOX_SIZE,
        "motor.crouch_height",
        "must be at least {}, got {}",
        MIN_BOX_SIZE,
        motor.crouch_height
    );
    check!(
        errors,
        motor.max_fall_speed.is_finite() && motor.max_fall_speed < 0.0,
        "motor.max_fall_speed",
        "must be negative, got {}",
        motor.max_fall_speed
    );
    check!(
        errors,
        motor.drag.is_finite() && motor.drag >= 0.0,
        "motor.drag",
        "must not be negative, got {}",
        motor.drag
    );
    check!(
        errors,
        motor.jump_buffer.is_finite() && motor.jump_buffer >= 0.0,
        "motor.jump_buffer",
        "must not be negative, got {}",
        motor.jump_buffer
    );
    check!(
        errors,
        motor.coyote_time.is_finite() && motor.coyote_time >= 0.0,
        "motor.coyote_time",
        "must not be negative, got {}",
        motor.coyote_time
    );
    check!(
        errors,
        motor.jump_cut_force.is_finite() && motor.jump_cut_force >= 0.0,
        "motor.jump_cut_force",
        "must not be negative, got {}",
        motor.jump_cut_force
    );
    let probe: Vec2 = motor.ceiling_probe_size.into();
    check!(
        errors,
        probe.is_finite() && probe.x > 0.0 && probe.y > 0.0,
        "motor.ceiling_probe_size",
        "must be positive, got {:?}",
        probe
    );

    // Race
    check!(
        errors,
        defaults.race.best_times_capacity > 0,
        "race.best_times_capacity",
        "must be at least 1"
    );
    check!(
        errors,
        !defaults.race.records_path.trim().is_empty(),
        "race.records_path",
        "must not be empty"
    );

    errors
}
