//! Race domain: finish-line tracking, timing and records.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::path::Path;

use crate::movement::{CollisionResolver, Player};
use crate::race::events::{RaceFinishedEvent, RaceStartedEvent, RaceTimeRecordedEvent};
use crate::race::finish_line::{FinishLine, RaceSignal};
use crate::race::records::{load_records, save_records};
use crate::race::resources::{BestTimes, RaceSettings, RaceTimer, format_race_time};

/// Load stored best times, starting empty if the file is unreadable.
pub(crate) fn load_best_times(settings: Res<RaceSettings>, mut best_times: ResMut<BestTimes>) {
    let times = match load_records(Path::new(&settings.records_path)) {
        Ok(times) => times,
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    };
    *best_times = BestTimes::with_times(settings.best_times_capacity, times);
    info!(
        "Best times loaded from {}: {:?}",
        settings.records_path,
        best_times.times()
    );
}

/// Compare the player's box against every finish line and emit the
/// start/finish transitions.
pub(crate) fn track_finish_line(
    player_query: Query<(&Transform, &CollisionResolver), With<Player>>,
    mut line_query: Query<(Entity, &Transform, &mut FinishLine)>,
    mut started: MessageWriter<RaceStartedEvent>,
    mut finished: MessageWriter<RaceFinishedEvent>,
) {
    let Ok((player_transform, resolver)) = player_query.single() else {
        return;
    };
    let player_position = player_transform.translation.truncate();

    for (entity, line_transform, mut line) in &mut line_query {
        let line_center = line_transform.translation.truncate();
        let overlapping =
            resolver
                .bounds()
                .overlaps(player_position, line_center, line.half_extents());
        let relative = player_position - line_center;

        match line.update(overlapping, relative) {
            Some(RaceSignal::Started) => {
                debug!("Race started at line {:?}", entity);
                started.write(RaceStartedEvent { line: entity });
            }
            Some(RaceSignal::Finished) => {
                debug!("Race finished at line {:?}", entity);
                finished.write(RaceFinishedEvent { line: entity });
            }
            None => {}
        }
    }
}

pub(crate) fn start_race_timer(
    mut events: MessageReader<RaceStartedEvent>,
    time: Res<Time>,
    mut timer: ResMut<RaceTimer>,
) {
    for _ in events.read() {
        timer.start(time.elapsed_secs());
        info!("Race started");
    }
}

/// Stop the clock, rank the time and persist the list.
pub(crate) fn finish_race(
    mut events: MessageReader<RaceFinishedEvent>,
    time: Res<Time>,
    settings: Res<RaceSettings>,
    mut timer: ResMut<RaceTimer>,
    mut best_times: ResMut<BestTimes>,
    mut recorded: MessageWriter<RaceTimeRecordedEvent>,
) {
    for _ in events.read() {
        let Some(run_time) = timer.finish(time.elapsed_secs()) else {
            warn!("Race finished without a running timer");
            continue;
        };

        let rank = best_times.record(run_time);
        match rank {
            Some(rank) => info!(
                "New best time #{}: {}",
                rank + 1,
                format_race_time(run_time)
            ),
            None => info!("Race finished: {}", format_race_time(run_time)),
        }
        if let Err(e) = save_records(Path::new(&settings.records_path), best_times.times()) {
            error!("{}", e);
        }

        recorded.write(RaceTimeRecordedEvent {
            time: run_time,
            rank,
        });
    }
}
