//! Data definitions for the gameplay tuning file.
//!
//! These structs mirror the structure in assets/data/gameplay_defaults.ron and
//! are converted into the runtime resources of the movement and race domains.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ControllerSettings, MotorTuning};
use crate::race::RaceSettings;

/// Schema version this build understands.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// Serializable Vec2 for RON.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vec2Def {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub physics: PhysicsDefaults,
    pub controller: ControllerDefaults,
    pub motor: MotorDefaults,
    pub race: RaceDefaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhysicsDefaults {
    pub gravity: Vec2Def,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ControllerDefaults {
    pub offset: Vec2Def,
    pub size: Vec2Def,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MotorDefaults {
    pub gravity_scale: f32,
    pub drag: f32,
    pub move_speed: f32,
    pub crouch_speed: f32,
    pub crouch_smoothing: f32,
    pub crouch_height: f32,
    pub max_fall_speed: f32,
    pub jump_height: f32,
    pub jump_cut_force: f32,
    pub jump_buffer: f32,
    pub coyote_time: f32,
    pub ceiling_probe_offset: f32,
    pub ceiling_probe_size: Vec2Def,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RaceDefaults {
    pub best_times_capacity: usize,
    /// Best-times JSON file, relative to the working directory.
    pub records_path: String,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: SUPPORTED_SCHEMA_VERSION,
            physics: PhysicsDefaults {
                gravity: Vec2::new(0.0, -9.81).into(),
            },
            controller: ControllerSettings::default().into(),
            motor: MotorTuning::default().into(),
            race: RaceSettings::default().into(),
        }
    }
}

impl GameplayDefaults {
    pub fn gravity(&self) -> Vec2 {
        self.physics.gravity.into()
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            offset: self.controller.offset.into(),
            size: self.controller.size.into(),
        }
    }

    pub fn motor_tuning(&self) -> MotorTuning {
        let m = &self.motor;
        MotorTuning {
            gravity_scale: m.gravity_scale,
            drag: m.drag,
            move_speed: m.move_speed,
            crouch_speed: m.crouch_speed,
            crouch_smoothing: m.crouch_smoothing,
            crouch_height: m.crouch_height,
            max_fall_speed: m.max_fall_speed,
            jump_height: m.jump_height,
            jump_cut_force: m.jump_cut_force,
            jump_buffer: m.jump_buffer,
            coyote_time: m.coyote_time,
            ceiling_probe_offset: m.ceiling_probe_offset,
            ceiling_probe_size: m.ceiling_probe_size.into(),
        }
    }

    pub fn race_settings(&self) -> RaceSettings {
        RaceSettings {
            best_times_capacity: self.race.best_times_capacity,
            records_path: self.race.records_path.clone(),
        }
    }
}

impl From<ControllerSettings> for ControllerDefaults {
    fn from(settings: ControllerSettings) -> Self {
        Self {
            offset: settings.offset.into(),
            size: settings.size.into(),
        }
    }
}

impl From<MotorTuning> for MotorDefaults {
    fn from(t: MotorTuning) -> Self {
        Self {
            gravity_scale: t.gravity_scale,
            drag: t.drag,
            move_speed: t.move_speed,
            crouch_speed: t.crouch_speed,
            crouch_smoothing: t.crouch_smoothing,
            crouch_height: t.crouch_height,
            max_fall_speed: t.max_fall_speed,
            jump_height: t.jump_height,
            jump_cut_force: t.jump_cut_force,
            jump_buffer: t.jump_buffer,
            coyote_time: t.coyote_time,
            ceiling_probe_offset: t.ceiling_probe_offset,
            ceiling_probe_size: t.ceiling_probe_size.into(),
        }
    }
}

impl From<RaceSettings> for RaceDefaults {
    fn from(settings: RaceSettings) -> Self {
        Self {
            best_times_capacity: settings.best_times_capacity,
            records_path: settings.records_path,
        }
    }
}
