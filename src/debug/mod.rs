//! Debug overlay for tuning the controller (dev-tools builds).
//!
//! Draws the player's bounding box with each side coloured by its contact
//! state, plus the low-ceiling probe. Toggle with F1 or backquote.

use bevy::prelude::*;

use crate::movement::{CollisionResolver, ContactInfo, MotorTuning, Player};

const IDLE_COLOR: Color = Color::srgb(0.3, 0.8, 0.9);
const CONTACT_COLOR: Color = Color::srgb(1.0, 0.3, 0.2);
const PROBE_COLOR: Color = Color::srgba(0.9, 0.9, 0.3, 0.5);

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    pub show_bounds: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_bounds: true }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_debug_overlay, draw_player_bounds).chain());
    }
}

fn toggle_debug_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if toggle {
        state.show_bounds = !state.show_bounds;
        info!("Debug bounds {}", if state.show_bounds { "on" } else { "off" });
    }
}

fn draw_player_bounds(
    state: Res<DebugState>,
    tuning: Res<MotorTuning>,
    query: Query<(&Transform, &CollisionResolver), With<Player>>,
    mut gizmos: Gizmos,
) {
    if !state.show_bounds {
        return;
    }

    for (transform, resolver) in &query {
        let position = transform.translation.truncate();
        let bounds = resolver.bounds();
        let center = bounds.center(position);
        let half = bounds.half_extents();

        for (start, end, color) in side_segments(center, half, resolver.contact()) {
            gizmos.line_2d(start, end, color);
        }

        gizmos.rect_2d(
            Isometry2d::from_translation(position + Vec2::Y * tuning.ceiling_probe_offset),
            tuning.ceiling_probe_size,
            PROBE_COLOR,
        );
    }
}

/// The four box edges, each coloured by whether that side is in contact.
fn side_segments(center: Vec2, half: Vec2, contact: &ContactInfo) -> [(Vec2, Vec2, Color); 4] {
    let color = |touching: bool| if touching { CONTACT_COLOR } else { IDLE_COLOR };
    let (min, max) = (center - half, center + half);
    [
        (Vec2::new(min.x, min.y), Vec2::new(max.x, min.y), color(contact.below)),
        (Vec2::new(min.x, max.y), Vec2::new(max.x, max.y), color(contact.above)),
        (Vec2::new(min.x, min.y), Vec2::new(min.x, max.y), color(contact.left)),
        (Vec2::new(max.x, min.y), Vec2::new(max.x, max.y), color(contact.right)),
    ]
}
