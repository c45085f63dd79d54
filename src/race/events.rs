//! Race domain: race lifecycle messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted when the player leaves the finish line heading right.
#[derive(Debug, Clone, Copy)]
pub struct RaceStartedEvent {
    pub line: Entity,
}

impl Message for RaceStartedEvent {}

/// Emitted when the player comes back into the finish line from the left.
#[derive(Debug, Clone, Copy)]
pub struct RaceFinishedEvent {
    pub line: Entity,
}

impl Message for RaceFinishedEvent {}

/// Emitted after a finished run has been timed and ranked.
#[derive(Debug, Clone, Copy)]
pub struct RaceTimeRecordedEvent {
    pub time: f32,
    /// Index in the best-times list, if the run placed.
    pub rank: Option<usize>,
}

impl Message for RaceTimeRecordedEvent {}
