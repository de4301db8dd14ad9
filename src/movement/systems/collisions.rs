//! Movement domain: avian spatial queries behind the controller's probe.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GeometryProbe;

/// [`GeometryProbe`] over avian's spatial query pipeline.
///
/// The character's own body is excluded so the probes never hit themselves.
pub(crate) struct AvianProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    character: Entity,
}

impl<'a, 'w, 's> AvianProbe<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>, character: Entity) -> Self {
        Self {
            spatial_query,
            character,
        }
    }

    fn filter(&self, mask: LayerMask) -> SpatialQueryFilter {
        SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.character])
    }
}

impl GeometryProbe for AvianProbe<'_, '_, '_> {
    fn overlap_box(&self, center: Vec2, half_extents: Vec2, mask: LayerMask) -> bool {
        if mask.0 == 0 {
            return false;
        }
        let probe = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);
        !self
            .spatial_query
            .shape_intersections(&probe, center, 0.0, &self.filter(mask))
            .is_empty()
    }

    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32, mask: LayerMask) -> bool {
        if mask.0 == 0 {
            return false;
        }
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &self.filter(mask))
            .is_some()
    }
}
