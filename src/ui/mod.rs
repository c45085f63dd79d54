//! UI domain: in-race HUD.

mod race_timer;
#[cfg(test)]
mod tests;

pub use race_timer::{
    BestTimeText, EMPTY_SLOT, LastRunText, RaceClockText, RaceTimerUI, best_time_line,
    last_run_line,
};

use bevy::prelude::*;

use crate::ui::race_timer::{
    spawn_race_timer_ui, update_best_times, update_last_run, update_race_clock,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_race_timer_ui)
            .add_systems(
                Update,
                (update_race_clock, update_best_times, update_last_run),
            );
    }
}
