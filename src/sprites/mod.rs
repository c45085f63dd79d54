//! Sprites domain: player visual, body animation and effects.

mod animation;
mod effects;
#[cfg(test)]
mod tests;

pub use animation::{
    AnimationTrigger, PlayerAnimator, PlayerVisual, move_towards, run_speed, spring_damping,
    trigger_for,
};
pub use effects::{DustEmitter, JumpSound, PlayerFx, PlayerFxEvent};

use bevy::prelude::*;

use crate::movement::MotorSet;
use crate::sprites::animation::{animate_player, attach_player_visual};
use crate::sprites::effects::{
    attach_dust_emitter, emit_player_fx, load_jump_sound, play_jump_sound, spawn_fx_puffs,
    update_puffs,
};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerFxEvent>()
            .add_systems(Startup, load_jump_sound)
            .add_systems(
                Update,
                (
                    (attach_player_visual, attach_dust_emitter),
                    (animate_player, emit_player_fx),
                    (spawn_fx_puffs, play_jump_sound, update_puffs),
                )
                    .chain()
                    .after(MotorSet),
            );
    }
}
