//! Movement domain: player bootstrap from the loaded controller settings.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    BoundingBox, CharacterMotor, CollisionResolver, ControllerSettings, GameLayer, Player,
    PlayerHitbox,
};

/// Where the player appears on the built-in track.
pub(crate) const PLAYER_SPAWN: Vec2 = Vec2::new(-14.0, 1.0);

/// Spawn the player with a kinematic body and a hitbox child mirroring its box.
pub(crate) fn spawn_player(
    mut commands: Commands,
    settings: Res<ControllerSettings>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let bounds = match BoundingBox::new(settings.offset, settings.size) {
        Ok(bounds) => bounds,
        Err(err) => {
            warn!("Invalid controller box ({}), using defaults", err);
            let defaults = ControllerSettings::default();
            BoundingBox::new(defaults.offset, defaults.size).unwrap_or_default()
        }
    };
    let resolver = CollisionResolver::new(bounds);
    let motor = CharacterMotor::new(&resolver);

    info!(
        "Spawning player at {:?}: size={:?}, offset={:?}",
        PLAYER_SPAWN,
        bounds.size(),
        bounds.offset()
    );

    commands
        .spawn((
            Player,
            resolver,
            motor,
            Transform::from_translation(PLAYER_SPAWN.extend(1.0)),
            Visibility::default(),
            RigidBody::Kinematic,
            GameLayer::player_layers(),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerHitbox,
                Collider::rectangle(bounds.size().x, bounds.size().y),
                GameLayer::player_layers(),
                Transform::from_translation(bounds.offset().extend(0.0)),
            ));
        });
}
