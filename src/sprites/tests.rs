//! Sprites domain: tests for animation parameters and effect emitters.

use super::effects::{JUMP_PITCH_MAX, JUMP_PITCH_MIN};
use super::{
    AnimationTrigger, DustEmitter, JumpSound, PlayerAnimator, PlayerFx, move_towards, run_speed,
    spring_damping, trigger_for,
};
use crate::movement::MotionState;

fn grounded() -> MotionState {
    MotionState {
        is_grounded: true,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Animation parameter tests
// -----------------------------------------------------------------------------

#[test]
fn test_run_speed() {
    assert_eq!(run_speed(true, 0.0), 1.0);
    assert_eq!(run_speed(true, 1.5), 1.0);
    assert_eq!(run_speed(true, 8.0), 4.0);
    assert_eq!(run_speed(false, 8.0), 1.0);
}

#[test]
fn test_landing_trigger_wins() {
    let mut state = grounded();
    state.jumped = true;
    assert_eq!(trigger_for(&state), Some(AnimationTrigger::Jumped));

    state.landed = true;
    assert_eq!(trigger_for(&state), Some(AnimationTrigger::Landed));

    assert_eq!(trigger_for(&grounded()), None);
}

#[test]
fn test_move_towards() {
    assert_eq!(move_towards(0.0, 6.0, 1.0), 1.0);
    assert_eq!(move_towards(5.5, 6.0, 1.0), 6.0);
    assert_eq!(move_towards(0.0, -6.0, 2.0), -2.0);
    assert_eq!(move_towards(3.0, 3.0, 0.0), 3.0);
}

#[test]
fn test_spring_settles_to_rest() {
    let mut velocity = 0.0;
    let mut value = 6.0;
    for _ in 0..600 {
        value = spring_damping(value, &mut velocity, 20.0, 0.85, 1.0 / 60.0);
    }
    assert_eq!(value, 0.0);
}

#[test]
fn test_tilt_leans_into_steering() {
    let mut animator = PlayerAnimator::default();
    let state = grounded();

    animator.update(1.0, &state, 5.0, 0.05);
    assert_eq!(animator.tilt, 3.0);
    animator.update(1.0, &state, 5.0, 0.05);
    assert_eq!(animator.tilt, 6.0);
    animator.update(1.0, &state, 5.0, 0.05);
    assert_eq!(animator.tilt, 6.0);

    // Slow movement leans less
    animator.update(-1.0, &state, 0.5, 1.0);
    assert_eq!(animator.tilt, -3.0);
}

#[test]
fn test_tilt_returns_to_rest_when_idle() {
    let mut animator = PlayerAnimator::default();
    let state = grounded();
    animator.update(1.0, &state, 5.0, 1.0);
    assert_eq!(animator.tilt, 6.0);

    for _ in 0..600 {
        animator.update(0.0, &state, 0.0, 1.0 / 60.0);
    }
    assert_eq!(animator.tilt, 0.0);
}

#[test]
fn test_squash_on_landing_recovers() {
    let mut animator = PlayerAnimator::default();
    let mut state = grounded();
    state.landed = true;

    animator.update(0.0, &state, 0.0, 0.1);
    assert!(animator.scale().x > 1.0 && animator.scale().y < 1.0);
    assert_eq!(animator.last_trigger, Some(AnimationTrigger::Landed));

    state.landed = false;
    for _ in 0..10 {
        animator.update(0.0, &state, 0.0, 0.1);
    }
    assert_eq!(animator.squash, 0.0);
    assert_eq!(animator.scale(), bevy::prelude::Vec2::ONE);
}

#[test]
fn test_crouch_flag_follows_motor() {
    let mut animator = PlayerAnimator::default();
    let mut state = grounded();
    state.is_crouched = true;
    animator.update(0.0, &state, 0.0, 0.1);
    assert!(animator.crouched);
}

// -----------------------------------------------------------------------------
// Effect tests
// -----------------------------------------------------------------------------

#[test]
fn test_dust_emitter_reports_transitions() {
    let mut emitter = DustEmitter::default();
    assert_eq!(emitter.set_active(false), None);
    assert_eq!(emitter.set_active(true), Some(PlayerFx::RunDustStart));
    assert_eq!(emitter.set_active(true), None);
    assert_eq!(emitter.set_active(false), Some(PlayerFx::RunDustStop));
}

#[test]
fn test_dust_emitter_puffs_at_interval() {
    let mut emitter = DustEmitter::default();
    assert!(!emitter.tick(1.0));

    emitter.set_active(true);
    assert!(emitter.tick(0.01));
    let puffs = (0..100).filter(|_| emitter.tick(0.01)).count();
    // One puff every 0.08 s over one second
    assert!((12..=13).contains(&puffs), "puffs = {puffs}");
}

#[test]
fn test_jump_pitch_in_range_and_seeded() {
    let mut first = JumpSound::new(None, 7);
    let mut second = JumpSound::new(None, 7);
    for _ in 0..200 {
        let pitch = first.next_pitch();
        assert!((JUMP_PITCH_MIN..JUMP_PITCH_MAX).contains(&pitch));
        assert_eq!(pitch, second.next_pitch());
    }
}
