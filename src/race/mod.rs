//! Race domain: finish line, race clock and best times.

mod events;
mod finish_line;
mod records;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use events::{RaceFinishedEvent, RaceStartedEvent, RaceTimeRecordedEvent};
pub use finish_line::{FinishLine, RaceSignal};
pub use records::{RecordsError, load_records, save_records};
pub use resources::{BestTimes, RaceSettings, RaceTimer, format_race_time};

use bevy::prelude::*;

use crate::movement::MotorSet;
use crate::race::finish_line::spawn_finish_line;
use crate::race::systems::{finish_race, load_best_times, start_race_timer, track_finish_line};

pub struct RacePlugin;

impl Plugin for RacePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RaceSettings>()
            .init_resource::<RaceTimer>()
            .init_resource::<BestTimes>()
            .add_message::<RaceStartedEvent>()
            .add_message::<RaceFinishedEvent>()
            .add_message::<RaceTimeRecordedEvent>()
            .add_systems(Startup, (spawn_finish_line, load_best_times))
            .add_systems(
                Update,
                (track_finish_line, start_race_timer, finish_race)
                    .chain()
                    .after(MotorSet),
            );
    }
}
