//! Movement domain: swept, axis-separated collision resolution for a box.
//!
//! Each move is split into its horizontal and vertical parts. Each part is
//! swept on its own from wherever the previous part left the box, so a
//! diagonal move into a wall still slides along it. The box is kept a small
//! skin away from anything it stops against.

use bevy::prelude::*;

use super::bounds::{BoundingBox, BoundsError};
use super::contact::{ContactInfo, MoveAxis};
use super::world::{BoxCast, SweepHit, SweepStatus, WorldQuery};

/// Axis moves shorter than this are skipped.
pub const MIN_MOVE_DISTANCE: f32 = 1e-4;
/// Clearance kept between the box and a surface it stopped against.
pub const CONTACT_OFFSET: f32 = 1e-2;
/// Extra sweep length beyond the requested move, and the largest skin
/// correction applied to a hit.
pub const SAFE_DISTANCE: f32 = 8.0 * CONTACT_OFFSET;
/// How much the cast box is shrunk on each dimension.
pub const CAST_SHRINK: f32 = 3.0 * CONTACT_OFFSET;

/// Hits requested from the world on the first try.
pub const HIT_BUFFER_CAPACITY: usize = 5;
/// Largest hit buffer a retry may grow to.
pub const MAX_HIT_BUFFER_CAPACITY: usize = 64;

/// Moves a [`BoundingBox`] through the world with swept casts and records
/// what it touched in a [`ContactInfo`].
#[derive(Component, Debug, Clone)]
pub struct CollisionResolver {
    bounds: BoundingBox,
    contact: ContactInfo,
    cast_half_extents: Vec2,
    hits: Vec<SweepHit>,
    shape_changed: bool,
}

impl CollisionResolver {
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            contact: ContactInfo::default(),
            cast_half_extents: cast_half_extents(bounds.size()),
            hits: Vec::with_capacity(HIT_BUFFER_CAPACITY),
            shape_changed: true,
        }
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn set_offset(&mut self, offset: Vec2) -> Result<(), BoundsError> {
        if offset == self.bounds.offset() {
            return Ok(());
        }
        self.bounds.set_offset(offset)?;
        self.shape_changed = true;
        Ok(())
    }

    pub fn set_size(&mut self, size: Vec2) -> Result<(), BoundsError> {
        if size == self.bounds.size() {
            return Ok(());
        }
        self.bounds.set_size(size)?;
        self.cast_half_extents = cast_half_extents(size);
        self.shape_changed = true;
        Ok(())
    }

    /// Returns true once after every change to the box, so the registered
    /// collider can be rebuilt.
    pub fn take_shape_changed(&mut self) -> bool {
        std::mem::take(&mut self.shape_changed)
    }

    /// Move the box at `position` by `movement`, stopping short of anything in
    /// the way. The contact record is rebuilt from this move alone.
    pub fn move_by<W: WorldQuery>(&mut self, position: &mut Vec2, movement: Vec2, world: &W) {
        let mut resolved = *position;

        self.contact.reset();
        self.resolve_axis(&mut resolved, MoveAxis::Horizontal, movement, world);
        self.resolve_axis(&mut resolved, MoveAxis::Vertical, movement, world);

        *position = resolved;
    }

    fn resolve_axis<W: WorldQuery>(
        &mut self,
        position: &mut Vec2,
        axis: MoveAxis,
        movement: Vec2,
        world: &W,
    ) {
        let movement = axis.component(movement);
        let distance = movement.length();

        if distance < MIN_MOVE_DISTANCE {
            return;
        }
        let Ok(direction) = Dir2::new(movement) else {
            return;
        };

        match self.cast(*position, direction, distance, world) {
            Some(hit) => {
                *position += hit.distance * *direction;
                self.contact.record(axis, *direction, hit);
            }
            None => *position += movement,
        }
    }

    /// Sweep the shrunken box and return the blocking hit with its distance
    /// pulled back by the skin, or `None` if the full move is clear.
    fn cast<W: WorldQuery>(
        &mut self,
        position: Vec2,
        direction: Dir2,
        distance: f32,
        world: &W,
    ) -> Option<SweepHit> {
        let cast = BoxCast {
            origin: self.bounds.center(position),
            half_extents: self.cast_half_extents,
            direction,
            max_distance: distance + SAFE_DISTANCE,
        };
        self.sweep(&cast, world);

        let mut hit = closest_hit(&self.hits)?;
        hit.distance -= skin_correction(*direction, hit.normal);

        if hit.distance >= distance {
            return None;
        }
        hit.distance = hit.distance.max(0.0);
        Some(hit)
    }

    fn sweep<W: WorldQuery>(&mut self, cast: &BoxCast, world: &W) {
        let mut max_hits = HIT_BUFFER_CAPACITY;
        loop {
            self.hits.clear();
            let status = world.sweep_box(cast, max_hits, &mut self.hits);
            if status == SweepStatus::Complete {
                return;
            }
            if max_hits >= MAX_HIT_BUFFER_CAPACITY {
                warn!(
                    "Hit buffer exhausted at {} hits; resolving against the hits returned",
                    max_hits
                );
                return;
            }
            max_hits = (max_hits * 2).min(MAX_HIT_BUFFER_CAPACITY);
            self.hits.reserve(max_hits);
        }
    }
}

fn cast_half_extents(size: Vec2) -> Vec2 {
    ((size - Vec2::splat(CAST_SHRINK)) * 0.5).max(Vec2::ZERO)
}

/// The nearest solid hit in front of the box. Triggers and hits at zero or
/// negative distance (already overlapping) are ignored. Equal distances keep
/// whichever came first in query order.
pub fn closest_hit(hits: &[SweepHit]) -> Option<SweepHit> {
    let mut closest: Option<SweepHit> = None;
    for hit in hits {
        if hit.is_trigger || hit.distance <= 0.0 {
            continue;
        }
        if closest.is_none_or(|best| hit.distance < best.distance) {
            closest = Some(*hit);
        }
    }
    closest
}

/// Distance to pull a hit back so the box rests `CONTACT_OFFSET` from the
/// surface measured along its normal, capped at `SAFE_DISTANCE`.
pub fn skin_correction(direction: Vec2, normal: Vec2) -> f32 {
    let dot = direction.dot(normal);
    if dot >= 0.0 {
        SAFE_DISTANCE
    } else {
        (-CONTACT_OFFSET / dot).min(SAFE_DISTANCE)
    }
}
