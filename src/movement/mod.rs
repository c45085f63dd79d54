//! Movement domain: kinematic box controller and the player state machine.

mod avian;
mod bootstrap;
mod bounds;
mod components;
mod contact;
mod dev;
mod motor;
mod resolver;
mod resources;
mod systems;
#[cfg(test)]
mod test_world;
mod world;

pub use avian::AvianWorld;
pub use bounds::{BoundingBox, BoundsError, MIN_BOX_SIZE};
pub use components::{GameLayer, Ground, Player, PlayerHitbox, Wall};
pub use contact::{ContactInfo, MoveAxis};
pub use motor::{CharacterMotor, MotionState, Tick, apply_drag, remove_inward};
pub use resolver::{
    CAST_SHRINK, CONTACT_OFFSET, CollisionResolver, MIN_MOVE_DISTANCE, SAFE_DISTANCE,
    closest_hit, skin_correction,
};
pub use resources::{ControllerSettings, MotorTuning, MovementInput};
pub use systems::sample_input;
pub use world::{BoxCast, OverlapHit, SweepHit, SweepStatus, WorldQuery};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_track;
use crate::movement::systems::{drive_motor, read_input, sync_hitbox_shape};

/// Ordering label for the per-frame player update.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MotorSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotorTuning>()
            .init_resource::<ControllerSettings>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (spawn_track, spawn_player))
            .add_systems(
                Update,
                (read_input, drive_motor, sync_hitbox_shape)
                    .chain()
                    .in_set(MotorSet),
            );
    }
}
