//! Race domain: the finish-line sensor and its start/finish state machine.
//!
//! The same line both starts and finishes a run. Leaving it on the right
//! starts the race; coming back into it from the left finishes it. Leaving on
//! the left while a race is running cancels it.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

pub(crate) const FINISH_LINE_CENTER: Vec2 = Vec2::new(-10.0, 1.5);
pub(crate) const FINISH_LINE_SIZE: Vec2 = Vec2::new(0.5, 3.0);

/// Transition reported by [`FinishLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceSignal {
    Started,
    Finished,
}

#[derive(Component, Debug, Clone)]
pub struct FinishLine {
    half_extents: Vec2,
    started: bool,
    player_inside: bool,
}

impl FinishLine {
    pub fn new(size: Vec2) -> Self {
        Self {
            half_extents: size * 0.5,
            started: false,
            player_inside: false,
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn player_inside(&self) -> bool {
        self.player_inside
    }

    /// The player's box started overlapping the line. `relative` is the
    /// player's position minus the line's.
    pub fn on_enter(&mut self, relative: Vec2) -> Option<RaceSignal> {
        if self.started && relative.x < 0.0 {
            self.started = false;
            return Some(RaceSignal::Finished);
        }
        None
    }

    /// The player's box stopped overlapping the line.
    pub fn on_exit(&mut self, relative: Vec2) -> Option<RaceSignal> {
        if !self.started && relative.x > 0.0 {
            self.started = true;
            return Some(RaceSignal::Started);
        }
        if self.started && relative.x < 0.0 {
            debug!("Race cancelled: left the line backwards");
            self.started = false;
        }
        None
    }

    /// Feed this tick's overlap state. Enter and exit fire on transitions only.
    pub fn update(&mut self, overlapping: bool, relative: Vec2) -> Option<RaceSignal> {
        match (self.player_inside, overlapping) {
            (false, true) => {
                self.player_inside = true;
                self.on_enter(relative)
            }
            (true, false) => {
                self.player_inside = false;
                self.on_exit(relative)
            }
            _ => None,
        }
    }
}

pub(crate) fn spawn_finish_line(mut commands: Commands) {
    commands.spawn((
        FinishLine::new(FINISH_LINE_SIZE),
        Sprite {
            color: Color::srgba(0.9, 0.9, 0.9, 0.35),
            custom_size: Some(FINISH_LINE_SIZE),
            ..default()
        },
        Transform::from_translation(FINISH_LINE_CENTER.extend(-0.5)),
        RigidBody::Static,
        Collider::rectangle(FINISH_LINE_SIZE.x, FINISH_LINE_SIZE.y),
        Sensor,
        GameLayer::solid_layers(GameLayer::Sensor),
    ));
}
