//! Movement domain: the scene queries the controller needs from the world.

use bevy::prelude::*;

/// A box swept from `origin` along `direction` for up to `max_distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCast {
    pub origin: Vec2,
    pub half_extents: Vec2,
    pub direction: Dir2,
    pub max_distance: f32,
}

/// One obstruction found by a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Collider that was hit, if the backend tracks entities.
    pub entity: Option<Entity>,
    /// Travel distance along the cast direction before touching.
    pub distance: f32,
    /// Outward surface normal of the collider that was hit.
    pub normal: Vec2,
    pub point: Vec2,
    pub is_trigger: bool,
}

/// One collider found by an overlap query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapHit {
    pub entity: Option<Entity>,
    pub is_trigger: bool,
}

/// Whether a sweep returned every hit or ran out of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStatus {
    Complete,
    /// The hit limit was reached; more hits may exist.
    Overflowed,
}

/// Read-only spatial queries against the collision world.
///
/// Implementations exclude the querying character's own shape and apply its
/// collision filter.
pub trait WorldQuery {
    /// Append at most `max_hits` hits along the cast to `hits`, in query order.
    fn sweep_box(&self, cast: &BoxCast, max_hits: usize, hits: &mut Vec<SweepHit>)
    -> SweepStatus;

    /// Append every collider overlapping the box to `overlaps`.
    fn overlap_box(&self, center: Vec2, half_extents: Vec2, overlaps: &mut Vec<OverlapHit>);
}
