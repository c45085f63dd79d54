//! Movement domain: per-move contact record.

use bevy::prelude::*;

use super::world::SweepHit;

/// The two axes a move is resolved on, horizontal first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAxis {
    Horizontal,
    Vertical,
}

impl MoveAxis {
    /// The component of `movement` along this axis.
    pub fn component(self, movement: Vec2) -> Vec2 {
        match self {
            MoveAxis::Horizontal => Vec2::new(movement.x, 0.0),
            MoveAxis::Vertical => Vec2::new(0.0, movement.y),
        }
    }
}

/// Sides of the box touching geometry after the latest move, plus the hit
/// that stopped each axis. Only ever reflects a single move.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactInfo {
    pub below: bool,
    pub above: bool,
    pub left: bool,
    pub right: bool,
    pub horizontal_hit: Option<SweepHit>,
    pub vertical_hit: Option<SweepHit>,
}

impl ContactInfo {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record the hit that stopped travel along `direction` on `axis`.
    pub fn record(&mut self, axis: MoveAxis, direction: Vec2, hit: SweepHit) {
        match axis {
            MoveAxis::Horizontal => {
                self.left = direction.x < 0.0;
                self.right = direction.x > 0.0;
                self.horizontal_hit = Some(hit);
            }
            MoveAxis::Vertical => {
                self.below = direction.y < 0.0;
                self.above = direction.y > 0.0;
                self.vertical_hit = Some(hit);
            }
        }
    }

    /// Recorded hits, horizontal slot first.
    pub fn hits(&self) -> impl Iterator<Item = &SweepHit> {
        self.horizontal_hit.iter().chain(self.vertical_hit.iter())
    }

    pub fn any(&self) -> bool {
        self.below || self.above || self.left || self.right
    }
}
