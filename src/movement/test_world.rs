//! Movement domain: in-memory axis-aligned box world for headless tests.

use bevy::prelude::*;

use super::world::{BoxCast, OverlapHit, SweepHit, SweepStatus, WorldQuery};

#[derive(Debug, Clone, Copy)]
pub(crate) struct BoxCollider {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub is_trigger: bool,
}

/// Static boxes queried with exact swept-AABB math. Hits come back in
/// insertion order, not sorted by distance.
#[derive(Debug, Default, Clone)]
pub(crate) struct BoxWorld {
    pub colliders: Vec<BoxCollider>,
}

impl BoxWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_solid(mut self, center: Vec2, size: Vec2) -> Self {
        self.colliders.push(BoxCollider {
            center,
            half_extents: size * 0.5,
            is_trigger: false,
        });
        self
    }

    pub fn with_trigger(mut self, center: Vec2, size: Vec2) -> Self {
        self.colliders.push(BoxCollider {
            center,
            half_extents: size * 0.5,
            is_trigger: true,
        });
        self
    }

    /// A solid box whose top edge sits at `top`.
    pub fn with_floor(self, top: f32) -> Self {
        self.with_solid(Vec2::new(0.0, top - 5.0), Vec2::new(200.0, 10.0))
    }

    fn sweep_one(cast: &BoxCast, collider: &BoxCollider) -> Option<SweepHit> {
        let origin = cast.origin;
        let direction = *cast.direction;
        let reach = collider.half_extents + cast.half_extents;
        let min = collider.center - reach;
        let max = collider.center + reach;

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut normal = Vec2::ZERO;

        for axis in 0..2 {
            let (o, d, lo, hi) = (origin[axis], direction[axis], min[axis], max[axis]);
            if d.abs() < 1e-8 {
                if o <= lo || o >= hi {
                    return None;
                }
                continue;
            }

            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };

            if near > t_enter {
                t_enter = near;
                normal = Vec2::ZERO;
                normal[axis] = -d.signum();
            }
            t_exit = t_exit.min(far);
        }

        if t_enter > t_exit || t_exit <= 0.0 || t_enter > cast.max_distance {
            return None;
        }

        let distance = t_enter.max(0.0);
        Some(SweepHit {
            entity: None,
            distance,
            normal,
            point: origin + direction * distance,
            is_trigger: collider.is_trigger,
        })
    }
}

impl WorldQuery for BoxWorld {
    fn sweep_box(
        &self,
        cast: &BoxCast,
        max_hits: usize,
        hits: &mut Vec<SweepHit>,
    ) -> SweepStatus {
        let mut found = 0;
        for collider in &self.colliders {
            let Some(hit) = Self::sweep_one(cast, collider) else {
                continue;
            };
            if found == max_hits {
                return SweepStatus::Overflowed;
            }
            hits.push(hit);
            found += 1;
        }
        SweepStatus::Complete
    }

    fn overlap_box(&self, center: Vec2, half_extents: Vec2, overlaps: &mut Vec<OverlapHit>) {
        for collider in &self.colliders {
            let delta = (collider.center - center).abs();
            let reach = collider.half_extents + half_extents;
            if delta.x < reach.x && delta.y < reach.y {
                overlaps.push(OverlapHit {
                    entity: None,
                    is_trigger: collider.is_trigger,
                });
            }
        }
    }
}
