//! Movement domain: the character state machine driven on top of the resolver.
//!
//! One [`CharacterMotor::tick`] runs the whole pipeline for a frame, in this
//! order: ground check, horizontal movement and crouch, jump, gravity and
//! drag, box height, resolver move, velocity cancellation. The order matters;
//! grounding reads the contacts left by the previous tick's move.

use bevy::prelude::*;

use super::contact::ContactInfo;
use super::resolver::CollisionResolver;
use super::resources::{MotorTuning, MovementInput};
use super::world::{OverlapHit, WorldQuery};

/// Horizontal speeds below this snap to zero under drag.
pub const DRAG_SNAP_SPEED: f32 = 1e-4;

/// Clock and gravity for a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Monotonic time in seconds.
    pub now: f32,
    pub dt: f32,
    pub gravity: Vec2,
}

/// Velocity and jump/ground bookkeeping owned by one character.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionState {
    pub velocity: Vec2,
    pub current_speed: f32,
    pub is_grounded: bool,
    /// Left the ground this tick.
    pub was_grounded: bool,
    /// Touched down this tick.
    pub landed: bool,
    pub is_jumping: bool,
    /// Jumped this tick.
    pub jumped: bool,
    pub is_crouched: bool,
    pub jump_buffer_deadline: Option<f32>,
    pub coyote_deadline: Option<f32>,
}

#[derive(Component, Debug, Clone)]
pub struct CharacterMotor {
    state: MotionState,
    default_height: f32,
    overlaps: Vec<OverlapHit>,
}

impl CharacterMotor {
    /// A motor that stands at the resolver's current box height.
    pub fn new(resolver: &CollisionResolver) -> Self {
        Self {
            state: MotionState::default(),
            default_height: resolver.bounds().size().y,
            overlaps: Vec::new(),
        }
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.state.velocity = velocity;
    }

    pub fn default_height(&self) -> f32 {
        self.default_height
    }

    /// Horizontal ground speed, used to drive run animations.
    pub fn speed(&self) -> f32 {
        self.state.velocity.x.abs()
    }

    pub fn tick<W: WorldQuery>(
        &mut self,
        resolver: &mut CollisionResolver,
        position: &mut Vec2,
        input: &MovementInput,
        tuning: &MotorTuning,
        tick: &Tick,
        world: &W,
    ) {
        self.ground_check(resolver.contact());
        self.horizontal_movement(*position, input, tuning, tick.dt, world);
        self.jump(input, tuning, tick);
        self.physics(tuning, tick);

        let height = if self.state.is_crouched {
            tuning.crouch_height
        } else {
            self.default_height
        };
        change_height(resolver, height);

        resolver.move_by(position, self.state.velocity * tick.dt, world);
        self.cancel_velocity(resolver.contact());
    }

    fn ground_check(&mut self, contact: &ContactInfo) {
        let previous = self.state.is_grounded;
        self.state.is_grounded = contact.below;
        self.state.was_grounded = previous && !self.state.is_grounded;
        self.state.landed = !previous && self.state.is_grounded;

        if self.state.landed {
            debug!("Landed: velocity={:?}", self.state.velocity);
        } else if self.state.was_grounded {
            debug!("Left ground: is_jumping={}", self.state.is_jumping);
        }
    }

    fn horizontal_movement<W: WorldQuery>(
        &mut self,
        position: Vec2,
        input: &MovementInput,
        tuning: &MotorTuning,
        dt: f32,
        world: &W,
    ) {
        self.state.is_crouched = input.axis.y < 0.0 && self.state.is_grounded;
        if self.ceiling_blocked(position, tuning, world) {
            self.state.is_crouched = true;
        }

        self.state.current_speed = if self.state.is_crouched {
            let t = (tuning.crouch_smoothing * dt).clamp(0.0, 1.0);
            let current = self.state.current_speed;
            current + (tuning.crouch_speed - current) * t
        } else {
            tuning.move_speed
        };

        self.state.velocity.x += input.axis.x * self.state.current_speed * dt;
    }

    /// True when a solid collider sits in the probe box above the character.
    fn ceiling_blocked<W: WorldQuery>(
        &mut self,
        position: Vec2,
        tuning: &MotorTuning,
        world: &W,
    ) -> bool {
        self.overlaps.clear();
        world.overlap_box(
            position + Vec2::Y * tuning.ceiling_probe_offset,
            tuning.ceiling_probe_size * 0.5,
            &mut self.overlaps,
        );
        self.overlaps.iter().any(|overlap| !overlap.is_trigger)
    }

    fn jump(&mut self, input: &MovementInput, tuning: &MotorTuning, tick: &Tick) {
        let state = &mut self.state;
        state.jumped = false;
        if state.is_grounded {
            state.is_jumping = false;
        }

        if input.jump_just_pressed {
            state.jump_buffer_deadline = Some(tick.now + tuning.jump_buffer);
        } else if !state.is_jumping && state.was_grounded {
            state.coyote_deadline = Some(tick.now + tuning.coyote_time);
        }

        let buffered = state.is_grounded && pending(state.jump_buffer_deadline, tick.now);
        let coyote = input.jump_just_pressed && pending(state.coyote_deadline, tick.now);

        if buffered || coyote {
            state.jumped = true;
            state.is_jumping = true;
            state.velocity.y = tuning.jump_velocity(tick.gravity);
            state.jump_buffer_deadline = None;
            state.coyote_deadline = None;
            debug!(
                "Jump: grounded={}, coyote={}, velocity={}",
                state.is_grounded, coyote, state.velocity.y
            );
        }

        if state.is_jumping && !input.jump_held && state.velocity.y > 0.0 {
            state.velocity.y -= tuning.jump_cut_force * tick.dt;
        }
    }

    fn physics(&mut self, tuning: &MotorTuning, tick: &Tick) {
        let velocity = &mut self.state.velocity;
        velocity.x = apply_drag(velocity.x, tuning.drag, tick.dt);
        *velocity += tick.gravity * tuning.gravity_scale * tick.dt;
        velocity.y = velocity.y.max(tuning.max_fall_speed);
    }

    fn cancel_velocity(&mut self, contact: &ContactInfo) {
        for hit in contact.hits() {
            self.state.velocity = remove_inward(self.state.velocity, hit.normal);
        }
    }
}

fn pending(deadline: Option<f32>, now: f32) -> bool {
    deadline.is_some_and(|deadline| deadline > now)
}

/// Resize the box to `height`, keeping its bottom edge `0.5` below the
/// character's position.
fn change_height(resolver: &mut CollisionResolver, height: f32) {
    let bounds = *resolver.bounds();
    let offset = Vec2::new(bounds.offset().x, (height - 1.0) * 0.5);
    let size = Vec2::new(bounds.size().x, height);

    if let Err(err) = resolver.set_size(size) {
        warn!("Ignoring height change to {}: {}", height, err);
        return;
    }
    if let Err(err) = resolver.set_offset(offset) {
        warn!("Ignoring offset change to {:?}: {}", offset, err);
    }
}

/// Divide velocity by `1 + drag * dt`, snapping tiny speeds to zero.
pub fn apply_drag(velocity: f32, drag: f32, dt: f32) -> f32 {
    if velocity.abs() < DRAG_SNAP_SPEED {
        return 0.0;
    }
    velocity / (1.0 + drag * dt)
}

/// Remove the part of `velocity` pointing into a surface with `normal`.
/// Velocity moving away from the surface is returned unchanged.
pub fn remove_inward(velocity: Vec2, normal: Vec2) -> Vec2 {
    let dot = velocity.dot(normal);
    if dot > f32::EPSILON {
        return velocity;
    }
    velocity - dot * normal
}
