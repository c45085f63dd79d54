//! Movement domain: the built-in race track.
//!
//! Floor top sits at y = 0. The finish line (spawned by the race domain) is
//! crossed rightward to start; the upper deck carries the player back over it
//! so they can drop down on the left and run into it again to finish.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub(crate) fn spawn_track(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        Vec2::new(0.0, -0.5),
        Vec2::new(82.0, 1.0),
        ground_color,
    );

    // Boundary walls
    for x in [-40.5, 40.5] {
        spawn_block(
            &mut commands,
            Wall,
            GameLayer::Wall,
            Vec2::new(x, 10.0),
            Vec2::new(1.0, 21.0),
            wall_color,
        );
    }

    // Low tunnel roof: standing height does not fit underneath
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        Vec2::new(10.0, 1.65),
        Vec2::new(10.0, 1.0),
        wall_color,
    );

    // Step up to the return deck
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        Vec2::new(33.5, 2.25),
        Vec2::new(5.0, 0.5),
        platform_color,
    );

    // Return deck, running back left over the finish line
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        Vec2::new(-2.0, 4.75),
        Vec2::new(64.0, 0.5),
        platform_color,
    );
}

fn spawn_block(
    commands: &mut Commands,
    marker: impl Component,
    layer: GameLayer,
    center: Vec2,
    size: Vec2,
    color: Color,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        GameLayer::solid_layers(layer),
    ));
}
