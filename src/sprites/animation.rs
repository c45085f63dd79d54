//! Player body animation: run speed, jump/land squash, crouch and tilt.
//!
//! Animation parameters are computed from the motor state each frame and
//! applied to a `PlayerVisual` child sprite that mirrors the bounding box.

use bevy::prelude::*;

use crate::movement::{CharacterMotor, CollisionResolver, MotionState, MovementInput, Player};

/// Largest tilt in degrees while running at full input.
pub const MAX_TILT_DEGREES: f32 = 6.0;
/// Degrees per second the tilt moves toward its target.
pub const TILT_RATE: f32 = 60.0;
pub const SPRING_STRENGTH: f32 = 20.0;
pub const SPRING_DAMPING: f32 = 0.85;
/// Squash applied on landing; negative values stretch.
pub const LAND_SQUASH: f32 = 0.2;
pub const JUMP_SQUASH: f32 = -0.15;
/// Squash recovered per second.
pub const SQUASH_RECOVERY: f32 = 1.5;

const PLAYER_COLOR: Color = Color::srgb(0.85, 0.35, 0.3);
const CROUCH_COLOR: Color = Color::srgb(0.7, 0.3, 0.3);

/// Child sprite drawn for the player.
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// One-shot animation trigger raised by the motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTrigger {
    Jumped,
    Landed,
}

/// Animation parameters for the player body.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct PlayerAnimator {
    pub run_speed: f32,
    pub crouched: bool,
    /// Body tilt in degrees around z.
    pub tilt: f32,
    tilt_velocity: f32,
    pub squash: f32,
    pub last_trigger: Option<AnimationTrigger>,
}

impl PlayerAnimator {
    /// Advance the parameters by one frame.
    pub fn update(&mut self, input_x: f32, state: &MotionState, speed: f32, dt: f32) {
        self.run_speed = run_speed(state.is_grounded, speed);
        self.crouched = state.is_crouched;

        let trigger = trigger_for(state);
        if let Some(trigger) = trigger {
            self.squash = match trigger {
                AnimationTrigger::Landed => LAND_SQUASH,
                AnimationTrigger::Jumped => JUMP_SQUASH,
            };
            self.last_trigger = Some(trigger);
        } else {
            self.squash = move_towards(self.squash, 0.0, SQUASH_RECOVERY * dt);
        }

        if input_x != 0.0 || !state.is_grounded {
            let target = input_x * MAX_TILT_DEGREES * speed.clamp(0.0, 1.0);
            self.tilt = move_towards(self.tilt, target, TILT_RATE * dt);
        } else {
            self.tilt = spring_damping(
                self.tilt,
                &mut self.tilt_velocity,
                SPRING_STRENGTH,
                SPRING_DAMPING,
                dt,
            );
        }
    }

    /// Scale applied to the visual for the current squash.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(1.0 + self.squash, 1.0 - self.squash)
    }
}

/// Run animation playback speed.
pub fn run_speed(grounded: bool, speed: f32) -> f32 {
    if grounded {
        (speed * 0.5).max(1.0)
    } else {
        1.0
    }
}

/// Landing wins over jumping when both happen in one tick.
pub fn trigger_for(state: &MotionState) -> Option<AnimationTrigger> {
    if state.landed {
        Some(AnimationTrigger::Landed)
    } else if state.jumped {
        Some(AnimationTrigger::Jumped)
    } else {
        None
    }
}

/// Step `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Damped spring that settles `value` back to zero. `velocity` carries the
/// spring's accumulated displacement between calls.
pub fn spring_damping(
    value: f32,
    velocity: &mut f32,
    strength: f32,
    damping: f32,
    dt: f32,
) -> f32 {
    let force = -strength * (*velocity - 1.0);
    let mut value = value + force * dt;
    *velocity += value;
    value *= damping;

    if value.abs() < 1e-4 { 0.0 } else { value }
}

/// Give newly spawned players an animator and a visual child.
pub(crate) fn attach_player_visual(
    mut commands: Commands,
    query: Query<(Entity, &CollisionResolver), Added<Player>>,
) {
    for (entity, resolver) in &query {
        let bounds = resolver.bounds();
        commands
            .entity(entity)
            .insert(PlayerAnimator::default())
            .with_children(|parent| {
                parent.spawn((
                    PlayerVisual,
                    Sprite {
                        color: PLAYER_COLOR,
                        custom_size: Some(bounds.size()),
                        ..default()
                    },
                    Transform::from_translation(bounds.offset().extend(0.1)),
                ));
            });
    }
}

pub(crate) fn animate_player(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut players: Query<(&CharacterMotor, &CollisionResolver, &mut PlayerAnimator, &Children)>,
    mut visuals: Query<(&mut Transform, &mut Sprite), With<PlayerVisual>>,
) {
    for (motor, resolver, mut animator, children) in &mut players {
        animator.update(input.axis.x, motor.state(), motor.speed(), time.delta_secs());

        let bounds = resolver.bounds();
        let mut iter = visuals.iter_many_mut(children.iter());
        while let Some((mut transform, mut sprite)) = iter.fetch_next() {
            // Pivot at the feet so squash and tilt keep them on the ground
            let feet = Vec2::new(bounds.offset().x, bounds.offset().y - bounds.size().y * 0.5);
            let scale = animator.scale();
            let rotation = Quat::from_rotation_z(animator.tilt.to_radians());
            let center = Vec2::new(0.0, bounds.size().y * 0.5 * scale.y);

            transform.translation = (feet + rotation.mul_vec3(center.extend(0.0)).truncate())
                .extend(transform.translation.z);
            transform.rotation = rotation;
            transform.scale = scale.extend(1.0);
            sprite.custom_size = Some(bounds.size());
            sprite.color = if animator.crouched {
                CROUCH_COLOR
            } else {
                PLAYER_COLOR
            };
        }
    }
}
