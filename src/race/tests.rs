//! Race domain: tests for the finish line, race clock, best times and records.

use bevy::prelude::Vec2;
use std::path::PathBuf;

use super::{
    BestTimes, FinishLine, RaceSignal, RaceTimer, RecordsError, format_race_time, load_records,
    save_records,
};

const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
const RIGHT: Vec2 = Vec2::new(1.0, 0.0);

fn line() -> FinishLine {
    FinishLine::new(Vec2::new(0.5, 3.0))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ledge-racer-{}-{}.json", std::process::id(), name))
}

// -----------------------------------------------------------------------------
// FinishLine tests
// -----------------------------------------------------------------------------

#[test]
fn test_leaving_right_starts_race() {
    let mut line = line();
    assert_eq!(line.on_enter(LEFT), None);
    assert_eq!(line.on_exit(RIGHT), Some(RaceSignal::Started));
    assert!(line.started());
}

#[test]
fn test_leaving_left_does_not_start() {
    let mut line = line();
    assert_eq!(line.on_exit(LEFT), None);
    assert!(!line.started());
}

#[test]
fn test_backing_out_cancels_race() {
    let mut line = line();
    line.on_exit(RIGHT);

    assert_eq!(line.on_enter(RIGHT), None);
    assert_eq!(line.on_exit(LEFT), None);
    assert!(!line.started());

    // Coming back in from the left no longer finishes anything
    assert_eq!(line.on_enter(LEFT), None);
}

#[test]
fn test_entering_from_left_finishes_race() {
    let mut line = line();
    line.on_exit(RIGHT);

    assert_eq!(line.on_enter(LEFT), Some(RaceSignal::Finished));
    assert!(!line.started());

    // Running on through starts the next lap
    assert_eq!(line.on_exit(RIGHT), Some(RaceSignal::Started));
}

#[test]
fn test_entering_from_right_while_started_is_ignored() {
    let mut line = line();
    line.on_exit(RIGHT);
    assert_eq!(line.on_enter(RIGHT), None);
    assert!(line.started());
    assert_eq!(line.on_exit(RIGHT), None);
    assert!(line.started());
}

#[test]
fn test_update_fires_on_transitions_only() {
    let mut line = line();

    // Walk through left to right
    assert_eq!(line.update(false, Vec2::new(-2.0, 0.0)), None);
    assert_eq!(line.update(true, Vec2::new(-0.5, 0.0)), None);
    assert!(line.player_inside());
    assert_eq!(line.update(true, Vec2::new(0.5, 0.0)), None);
    assert_eq!(
        line.update(false, Vec2::new(0.8, 0.0)),
        Some(RaceSignal::Started)
    );
    assert_eq!(line.update(false, Vec2::new(5.0, 0.0)), None);

    // Loop around and come back in from the left
    assert_eq!(
        line.update(true, Vec2::new(-0.6, 0.0)),
        Some(RaceSignal::Finished)
    );
    assert_eq!(line.update(true, Vec2::new(-0.6, 0.0)), None);
}

// -----------------------------------------------------------------------------
// RaceTimer tests
// -----------------------------------------------------------------------------

#[test]
fn test_timer_lifecycle() {
    let mut timer = RaceTimer::default();
    assert!(!timer.is_running());
    assert_eq!(timer.elapsed(10.0), 0.0);
    assert_eq!(timer.finish(10.0), None);

    timer.start(2.0);
    assert!(timer.is_running());
    assert_eq!(timer.elapsed(5.5), 3.5);

    assert_eq!(timer.finish(7.0), Some(5.0));
    assert!(!timer.is_running());
    assert_eq!(timer.elapsed(9.0), 0.0);
}

// -----------------------------------------------------------------------------
// BestTimes tests
// -----------------------------------------------------------------------------

#[test]
fn test_best_times_keep_fastest() {
    let mut best = BestTimes::new(3);
    assert_eq!(best.record(30.0), Some(0));
    assert_eq!(best.record(20.0), Some(0));
    assert_eq!(best.record(25.0), Some(1));
    assert_eq!(best.times(), &[20.0, 25.0, 30.0]);

    // Slower than everything on a full list
    assert_eq!(best.record(40.0), None);
    assert_eq!(best.times(), &[20.0, 25.0, 30.0]);

    // Faster run pushes the slowest off
    assert_eq!(best.record(10.0), Some(0));
    assert_eq!(best.times(), &[10.0, 20.0, 25.0]);
}

#[test]
fn test_best_times_ties_rank_after_existing() {
    let mut best = BestTimes::new(2);
    best.record(12.0);
    assert_eq!(best.record(12.0), Some(1));
    assert_eq!(best.record(12.0), None);
    assert_eq!(best.times(), &[12.0, 12.0]);
}

#[test]
fn test_best_times_reject_invalid() {
    let mut best = BestTimes::new(3);
    assert_eq!(best.record(-1.0), None);
    assert_eq!(best.record(f32::NAN), None);
    assert!(best.times().is_empty());
}

#[test]
fn test_best_times_from_stored_list() {
    let best = BestTimes::with_times(2, [9.0, f32::INFINITY, 3.0, -2.0, 5.0]);
    assert_eq!(best.times(), &[3.0, 5.0]);
    assert_eq!(best.capacity(), 2);

    assert_eq!(BestTimes::new(0).capacity(), 1);
}

// -----------------------------------------------------------------------------
// Formatting tests
// -----------------------------------------------------------------------------

#[test]
fn test_format_race_time() {
    assert_eq!(format_race_time(0.0), "00:00.000");
    assert_eq!(format_race_time(5.25), "00:05.250");
    assert_eq!(format_race_time(83.456), "01:23.456");
    assert_eq!(format_race_time(599.9999), "10:00.000");
}

#[test]
fn test_format_race_time_edge_values() {
    assert_eq!(format_race_time(-3.0), "00:00.000");
    assert_eq!(format_race_time(f32::NAN), "00:00.000");
    // Minutes wrap past the hour
    assert_eq!(format_race_time(3661.5), "01:01.500");
}

// -----------------------------------------------------------------------------
// Records tests
// -----------------------------------------------------------------------------

#[test]
fn test_records_save_then_load() {
    let path = temp_path("roundtrip");
    save_records(&path, &[11.5, 14.25]).unwrap();

    let times = load_records(&path).unwrap();
    assert_eq!(times, vec![11.5, 14.25]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_records_file_is_empty() {
    let path = temp_path("missing");
    let _ = std::fs::remove_file(&path);
    assert!(load_records(&path).unwrap().is_empty());
}

#[test]
fn test_corrupt_records_file_is_an_error() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, RecordsError::Json { .. }));
    assert!(err.to_string().contains("JSON"));

    let _ = std::fs::remove_file(&path);
}
