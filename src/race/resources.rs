//! Race domain: timer, best times and settings.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RaceSettings {
    pub best_times_capacity: usize,
    pub records_path: String,
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self {
            best_times_capacity: 3,
            records_path: "best_times.json".to_string(),
        }
    }
}

/// Running race clock. Times are seconds on the app's elapsed clock.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct RaceTimer {
    started_at: Option<f32>,
}

impl RaceTimer {
    pub fn start(&mut self, now: f32) {
        self.started_at = Some(now);
    }

    /// Stop the clock, returning the run time if it was running.
    pub fn finish(&mut self, now: f32) -> Option<f32> {
        self.started_at.take().map(|start| (now - start).max(0.0))
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Time since the start, or zero while stopped.
    pub fn elapsed(&self, now: f32) -> f32 {
        self.started_at.map_or(0.0, |start| (now - start).max(0.0))
    }
}

/// The fastest finished runs, ascending.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BestTimes {
    capacity: usize,
    times: Vec<f32>,
}

impl Default for BestTimes {
    fn default() -> Self {
        Self::new(RaceSettings::default().best_times_capacity)
    }
}

impl BestTimes {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            times: Vec::new(),
        }
    }

    /// Build from stored times, dropping invalid entries and anything past
    /// capacity.
    pub fn with_times(capacity: usize, times: impl IntoIterator<Item = f32>) -> Self {
        let mut best = Self::new(capacity);
        best.times = times
            .into_iter()
            .filter(|t| t.is_finite() && *t >= 0.0)
            .collect();
        best.times.sort_by(f32::total_cmp);
        best.times.truncate(best.capacity);
        best
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn times(&self) -> &[f32] {
        &self.times
    }

    /// Insert a run time. Returns its rank if it made the list.
    pub fn record(&mut self, time: f32) -> Option<usize> {
        if !time.is_finite() || time < 0.0 {
            return None;
        }
        let rank = self.times.partition_point(|t| *t <= time);
        if rank >= self.capacity {
            return None;
        }
        self.times.insert(rank, time);
        self.times.truncate(self.capacity);
        Some(rank)
    }
}

/// Format seconds as `mm:ss.fff`. Minutes wrap at an hour; negative or
/// non-finite input shows as zero.
pub fn format_race_time(seconds: f32) -> String {
    let seconds = if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    };
    let total_ms = (f64::from(seconds) * 1000.0).round() as u64;
    let minutes = (total_ms / 60_000) % 60;
    let secs = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{:02}:{:02}.{:03}", minutes, secs, millis)
}
