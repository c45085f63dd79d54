//! Player effects: dust puffs on jump, landing and running, and the jump sound.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;

use crate::movement::{CharacterMotor, CollisionResolver, MovementInput, Player};

pub const JUMP_SOUND_PATH: &str = "audio/jump.ogg";
pub const JUMP_PITCH_MIN: f32 = 2.0;
pub const JUMP_PITCH_MAX: f32 = 3.0;

/// Seconds between dust puffs while running.
const RUN_DUST_INTERVAL: f32 = 0.08;
const PUFF_LIFETIME: f32 = 0.4;
const PUFF_SIZE: f32 = 0.2;
const PUFF_COLOR: Color = Color::srgba(0.85, 0.8, 0.7, 0.8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerFx {
    Jump,
    Land,
    RunDustStart,
    RunDustStop,
}

/// Effect requested at the player's feet.
#[derive(Debug, Clone, Copy)]
pub struct PlayerFxEvent {
    pub kind: PlayerFx,
    pub position: Vec2,
}

impl Message for PlayerFxEvent {}

/// Running-dust emitter state on the player.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct DustEmitter {
    pub active: bool,
    cooldown: f32,
}

impl DustEmitter {
    /// Switch the emitter on or off. Returns the effect for a state change.
    pub fn set_active(&mut self, active: bool) -> Option<PlayerFx> {
        if self.active == active {
            return None;
        }
        self.active = active;
        self.cooldown = 0.0;
        Some(if active {
            PlayerFx::RunDustStart
        } else {
            PlayerFx::RunDustStop
        })
    }

    /// Advance the emitter; true when a puff is due.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.cooldown -= dt;
        if self.cooldown <= 0.0 {
            self.cooldown += RUN_DUST_INTERVAL;
            return true;
        }
        false
    }
}

/// A short-lived dust particle.
#[derive(Component, Debug)]
pub struct Puff {
    velocity: Vec2,
    timer: Timer,
}

/// Jump sound handle and the generator for its pitch.
#[derive(Resource)]
pub struct JumpSound {
    handle: Option<Handle<AudioSource>>,
    rng: ChaCha8Rng,
}

impl JumpSound {
    pub fn new(handle: Option<Handle<AudioSource>>, seed: u64) -> Self {
        Self {
            handle,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Next playback pitch, in `[JUMP_PITCH_MIN, JUMP_PITCH_MAX)`.
    pub fn next_pitch(&mut self) -> f32 {
        self.rng.random_range(JUMP_PITCH_MIN..JUMP_PITCH_MAX)
    }
}

pub(crate) fn load_jump_sound(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = if Path::new("assets").join(JUMP_SOUND_PATH).exists() {
        Some(asset_server.load(JUMP_SOUND_PATH))
    } else {
        warn!("Jump sound not found at assets/{}, playing silently", JUMP_SOUND_PATH);
        None
    };
    commands.insert_resource(JumpSound::new(handle, 0x5EED));
}

pub(crate) fn attach_dust_emitter(mut commands: Commands, query: Query<Entity, Added<Player>>) {
    for entity in &query {
        commands.entity(entity).insert(DustEmitter::default());
    }
}

/// Turn the motor's per-tick flags into effect messages.
pub(crate) fn emit_player_fx(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut players: Query<
        (&Transform, &CharacterMotor, &CollisionResolver, &mut DustEmitter),
        With<Player>,
    >,
    mut fx: MessageWriter<PlayerFxEvent>,
    mut commands: Commands,
) {
    for (transform, motor, resolver, mut emitter) in &mut players {
        let position = transform.translation.truncate();
        let feet = Vec2::new(
            resolver.bounds().center(position).x,
            resolver.bounds().bottom(position),
        );
        let state = motor.state();

        if state.jumped {
            fx.write(PlayerFxEvent {
                kind: PlayerFx::Jump,
                position: feet,
            });
        }
        if state.landed {
            fx.write(PlayerFxEvent {
                kind: PlayerFx::Land,
                position: feet,
            });
        }

        let running = input.axis.x != 0.0 && state.is_grounded && !state.is_crouched;
        if let Some(kind) = emitter.set_active(running) {
            fx.write(PlayerFxEvent {
                kind,
                position: feet,
            });
        }
        if emitter.tick(time.delta_secs()) {
            let drift = Vec2::new(-input.axis.x * 0.6, 0.4);
            spawn_puff(&mut commands, feet, drift);
        }
    }
}

/// Spawn bursts of puffs for jump and landing effects.
pub(crate) fn spawn_fx_puffs(mut commands: Commands, mut fx: MessageReader<PlayerFxEvent>) {
    for event in fx.read() {
        let count = match event.kind {
            PlayerFx::Jump => 6,
            PlayerFx::Land => 8,
            PlayerFx::RunDustStart | PlayerFx::RunDustStop => continue,
        };
        for i in 0..count {
            let angle = std::f32::consts::PI * (i as f32 + 0.5) / count as f32;
            let velocity = Vec2::new(angle.cos() * 1.5, angle.sin() * 0.5);
            spawn_puff(&mut commands, event.position, velocity);
        }
    }
}

pub(crate) fn play_jump_sound(
    mut commands: Commands,
    mut fx: MessageReader<PlayerFxEvent>,
    mut sound: ResMut<JumpSound>,
) {
    for event in fx.read() {
        if event.kind != PlayerFx::Jump {
            continue;
        }
        let pitch = sound.next_pitch();
        let Some(handle) = sound.handle.clone() else {
            continue;
        };
        commands.spawn((
            AudioPlayer::new(handle),
            PlaybackSettings::DESPAWN.with_speed(pitch),
        ));
    }
}

pub(crate) fn update_puffs(
    time: Res<Time>,
    mut commands: Commands,
    mut puffs: Query<(Entity, &mut Puff, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut puff, mut transform, mut sprite) in &mut puffs {
        puff.timer.tick(time.delta());
        if puff.timer.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }

        transform.translation += (puff.velocity * dt).extend(0.0);
        let remaining = 1.0 - puff.timer.fraction();
        sprite.color = PUFF_COLOR.with_alpha(PUFF_COLOR.alpha() * remaining);
        transform.scale = Vec3::splat(0.5 + 0.5 * remaining);
    }
}

fn spawn_puff(commands: &mut Commands, position: Vec2, velocity: Vec2) {
    commands.spawn((
        Puff {
            velocity,
            timer: Timer::from_seconds(PUFF_LIFETIME, TimerMode::Once),
        },
        Sprite {
            color: PUFF_COLOR,
            custom_size: Some(Vec2::splat(PUFF_SIZE)),
            ..default()
        },
        Transform::from_translation(position.extend(2.0)),
    ));
}
