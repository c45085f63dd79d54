//! UI domain: race clock and best-times list.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::race::{BestTimes, RaceSettings, RaceTimeRecordedEvent, RaceTimer, format_race_time};

/// Shown in best-time slots that have no run yet.
pub const EMPTY_SLOT: &str = "--:--.---";

const HUD_PADDING: f32 = 16.0;

/// Marker for the race timer UI container
#[derive(Component)]
pub struct RaceTimerUI;

/// Marker for the live clock text
#[derive(Component)]
pub struct RaceClockText;

/// Result of the most recent finished run
#[derive(Component)]
pub struct LastRunText;

/// One line of the best-times list
#[derive(Component)]
pub struct BestTimeText {
    pub slot: usize,
}

pub(crate) fn spawn_race_timer_ui(mut commands: Commands, settings: Res<RaceSettings>) {
    commands
        .spawn((
            RaceTimerUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                RaceClockText,
                Text::new(format_race_time(0.0)),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.9)),
            ));

            parent.spawn((
                LastRunText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.9, 0.8)),
            ));

            parent.spawn((
                Text::new("Best"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.65)),
            ));

            for slot in 0..settings.best_times_capacity.max(1) {
                parent.spawn((
                    BestTimeText { slot },
                    Text::new(best_time_line(slot, None)),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.85, 0.5)),
                ));
            }
        });
}

/// Text for one slot of the best-times list.
pub fn best_time_line(slot: usize, time: Option<f32>) -> String {
    match time {
        Some(time) => format!("{}. {}", slot + 1, format_race_time(time)),
        None => format!("{}. {}", slot + 1, EMPTY_SLOT),
    }
}

/// Text for the last finished run.
pub fn last_run_line(time: f32, rank: Option<usize>) -> String {
    match rank {
        Some(rank) => format!("Last {}  new best #{}", format_race_time(time), rank + 1),
        None => format!("Last {}", format_race_time(time)),
    }
}

pub(crate) fn update_last_run(
    mut events: MessageReader<RaceTimeRecordedEvent>,
    mut query: Query<&mut Text, With<LastRunText>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };
    for mut text in &mut query {
        **text = last_run_line(event.time, event.rank);
    }
}

pub(crate) fn update_race_clock(
    time: Res<Time>,
    timer: Res<RaceTimer>,
    mut query: Query<&mut Text, With<RaceClockText>>,
) {
    if !timer.is_running() && !timer.is_changed() {
        return;
    }
    let shown = format_race_time(timer.elapsed(time.elapsed_secs()));
    for mut text in &mut query {
        **text = shown.clone();
    }
}

pub(crate) fn update_best_times(
    best_times: Res<BestTimes>,
    mut query: Query<(&BestTimeText, &mut Text)>,
) {
    if best_times.is_changed() {
        for (line, mut text) in &mut query {
            let time = best_times.times().get(line.slot).copied();
            **text = best_time_line(line.slot, time);
        }
    }
}
