//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MotorTuning {
    /// Multiplier on the world gravity vector.
    pub gravity_scale: f32,
    /// Horizontal drag; velocity.x is divided by `1 + drag * dt` every tick.
    pub drag: f32,
    pub move_speed: f32,
    pub crouch_speed: f32,
    /// Rate at which the current speed eases toward `crouch_speed`.
    pub crouch_smoothing: f32,
    pub crouch_height: f32,
    /// Vertical velocity never drops below this (negative) value.
    pub max_fall_speed: f32,
    pub jump_height: f32,
    /// Upward velocity removed per second once jump is released early.
    pub jump_cut_force: f32,
    pub jump_buffer: f32,
    pub coyote_time: f32,
    /// Height above the character's position of the low-ceiling probe.
    pub ceiling_probe_offset: f32,
    pub ceiling_probe_size: Vec2,
}

impl Default for MotorTuning {
    fn default() -> Self {
        Self {
            gravity_scale: 1.0,
            drag: 10.0,
            move_speed: 100.0,
            crouch_speed: 20.0,
            crouch_smoothing: 0.5,
            crouch_height: 1.0,
            max_fall_speed: -20.0,
            jump_height: 3.5,
            jump_cut_force: 2.0,
            jump_buffer: 0.2,
            coyote_time: 0.1,
            ceiling_probe_offset: 0.25,
            ceiling_probe_size: Vec2::splat(0.95),
        }
    }
}

impl MotorTuning {
    /// Launch speed that peaks exactly at `jump_height` under `gravity`.
    /// Settings that cannot produce a jump give zero.
    pub fn jump_velocity(&self, gravity: Vec2) -> f32 {
        (-2.0 * gravity.y * self.gravity_scale * self.jump_height)
            .max(0.0)
            .sqrt()
    }

    /// Height reached by a jump launched at [`Self::jump_velocity`].
    pub fn apex_height(&self, gravity: Vec2) -> f32 {
        let g = -gravity.y * self.gravity_scale;
        if g <= 0.0 {
            return 0.0;
        }
        let v = self.jump_velocity(gravity);
        v * v / (2.0 * g)
    }
}

/// Per-tick player input.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
}

/// Initial bounding box for spawned characters.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub offset: Vec2,
    pub size: Vec2,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, 0.5),
            size: Vec2::new(1.0, 2.0),
        }
    }
}
