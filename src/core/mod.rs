//! Core domain: camera setup and player follow.

use bevy::prelude::*;

use crate::movement::{MotorSet, Player};

/// World units (metres) shown per screen pixel.
pub const CAMERA_SCALE: f32 = 1.0 / 40.0;

/// Camera that eases toward the player.
#[derive(Component, Debug, Clone)]
pub struct CameraFollow {
    /// Fraction of the remaining distance closed per second.
    pub smoothing: f32,
    /// Offset from the player's position to the view center.
    pub offset: Vec2,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self {
            smoothing: 6.0,
            offset: Vec2::new(0.0, 2.0),
        }
    }
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player.after(MotorSet));
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        CameraFollow::default(),
        Projection::from(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 2.0, 0.0),
    ));
}

fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<CameraFollow>)>,
    mut camera_query: Query<(&CameraFollow, &mut Transform)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let target = player.translation.truncate();

    for (follow, mut transform) in &mut camera_query {
        let current = transform.translation.truncate();
        let next = ease_towards(current, target + follow.offset, follow.smoothing, time.delta_secs());
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

/// Close `smoothing * dt` of the gap to `target`, never overshooting.
pub fn ease_towards(current: Vec2, target: Vec2, smoothing: f32, dt: f32) -> Vec2 {
    let t = (smoothing * dt).clamp(0.0, 1.0);
    current + (target - current) * t
}
