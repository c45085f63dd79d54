//! Movement domain: [`WorldQuery`] backed by avian2d spatial queries.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::world::{BoxCast, OverlapHit, SweepHit, SweepStatus, WorldQuery};

/// Queries the avian2d world on behalf of one character.
pub struct AvianWorld<'a, 'w, 's, 'qw, 'qs> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    sensors: &'a Query<'qw, 'qs, (), With<Sensor>>,
    sweep_filter: SpatialQueryFilter,
    overlap_filter: SpatialQueryFilter,
}

impl<'a, 'w, 's, 'qw, 'qs> AvianWorld<'a, 'w, 's, 'qw, 'qs> {
    /// Sweeps only hit layers in `layers.filters`; overlaps see every layer.
    /// Both skip the character's own entities.
    pub fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        sensors: &'a Query<'qw, 'qs, (), With<Sensor>>,
        layers: &CollisionLayers,
        own_entities: impl IntoIterator<Item = Entity>,
    ) -> Self {
        let own: Vec<Entity> = own_entities.into_iter().collect();
        Self {
            spatial_query,
            sensors,
            sweep_filter: SpatialQueryFilter::from_mask(layers.filters)
                .with_excluded_entities(own.iter().copied()),
            overlap_filter: SpatialQueryFilter::default().with_excluded_entities(own),
        }
    }
}

impl WorldQuery for AvianWorld<'_, '_, '_, '_, '_> {
    fn sweep_box(
        &self,
        cast: &BoxCast,
        max_hits: usize,
        hits: &mut Vec<SweepHit>,
    ) -> SweepStatus {
        let shape = Collider::rectangle(cast.half_extents.x * 2.0, cast.half_extents.y * 2.0);
        let found = self.spatial_query.shape_hits(
            &shape,
            cast.origin,
            0.0,
            cast.direction,
            max_hits as u32,
            &ShapeCastConfig::from_max_distance(cast.max_distance),
            &self.sweep_filter,
        );

        let status = if found.len() >= max_hits {
            SweepStatus::Overflowed
        } else {
            SweepStatus::Complete
        };

        hits.extend(found.into_iter().map(|hit| SweepHit {
            entity: Some(hit.entity),
            distance: hit.distance,
            normal: hit.normal1,
            point: hit.point1,
            is_trigger: self.sensors.contains(hit.entity),
        }));

        status
    }

    fn overlap_box(&self, center: Vec2, half_extents: Vec2, overlaps: &mut Vec<OverlapHit>) {
        let shape = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);
        let found = self
            .spatial_query
            .shape_intersections(&shape, center, 0.0, &self.overlap_filter);

        overlaps.extend(found.into_iter().map(|entity| OverlapHit {
            entity: Some(entity),
            is_trigger: self.sensors.contains(entity),
        }));
    }
}
