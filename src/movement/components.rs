//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ceilings)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (finish line) - never block movement
    Sensor,
}

impl GameLayer {
    /// Layers the player is registered on and swept against.
    pub fn player_layers() -> CollisionLayers {
        CollisionLayers::new(
            GameLayer::Player,
            [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
        )
    }

    /// Layers for static level geometry.
    pub fn solid_layers(member: GameLayer) -> CollisionLayers {
        CollisionLayers::new(member, [GameLayer::Player])
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Child entity carrying the collider that mirrors the player's bounding box.
#[derive(Component, Debug)]
pub struct PlayerHitbox;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
