//! Movement domain: ground and wall sensing against a geometry backend.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;

use crate::movement::{MovementTuning, layer_mask};

/// Boolean geometry queries the controller needs from a collision backend.
///
/// Implementations must be read-only. A missing collider or an empty mask
/// answers `false`.
pub trait GeometryProbe {
    /// Does an axis-aligned box overlap any geometry in `mask`?
    fn overlap_box(&self, center: Vec2, half_extents: Vec2, mask: LayerMask) -> bool;

    /// Does a ray hit any geometry in `mask` within `max_distance`?
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> bool;
}

/// Fresh contact flags for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorReadings {
    pub grounded: bool,
    pub touching_wall: bool,
}

/// Run the ground box and both wall rays from `position`.
pub fn sense(
    probe: &impl GeometryProbe,
    position: Vec2,
    tuning: &MovementTuning,
) -> SensorReadings {
    let ground_center = position - Vec2::Y * tuning.ground_check_offset;
    let grounded = probe.overlap_box(
        ground_center,
        tuning.ground_check_half_extents(),
        layer_mask(&tuning.ground_layers),
    );

    let wall_mask = layer_mask(&tuning.wall_layers);
    let wall_left = probe.cast_ray(
        position,
        Dir2::NEG_X,
        tuning.wall_check_distance,
        wall_mask,
    );
    let wall_right = probe.cast_ray(position, Dir2::X, tuning.wall_check_distance, wall_mask);

    SensorReadings {
        grounded,
        touching_wall: wall_left || wall_right,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Axis-aligned solid used by [`FakeGeometry`].
    #[derive(Debug, Clone, Copy)]
    pub struct Solid {
        pub min: Vec2,
        pub max: Vec2,
        pub layers: LayerMask,
    }

    /// In-memory stand-in for the physics backend.
    #[derive(Debug, Clone, Default)]
    pub struct FakeGeometry {
        pub solids: Vec<Solid>,
    }

    impl FakeGeometry {
        pub fn with_solid(
            mut self,
            center: Vec2,
            size: Vec2,
            layer: crate::movement::GameLayer,
        ) -> Self {
            self.solids.push(Solid {
                min: center - size * 0.5,
                max: center + size * 0.5,
                layers: layer_mask(&[layer]),
            });
            self
        }

        fn matching(&self, mask: LayerMask) -> impl Iterator<Item = &Solid> {
            self.solids
                .iter()
                .filter(move |solid| solid.layers.0 & mask.0 != 0)
        }
    }

    impl GeometryProbe for FakeGeometry {
        fn overlap_box(&self, center: Vec2, half_extents: Vec2, mask: LayerMask) -> bool {
            let min = center - half_extents;
            let max = center + half_extents;
            self.matching(mask).any(|solid| {
                min.x <= solid.max.x
                    && max.x >= solid.min.x
                    && min.y <= solid.max.y
                    && max.y >= solid.min.y
            })
        }

        fn cast_ray(
            &self,
            origin: Vec2,
            direction: Dir2,
            max_distance: f32,
            mask: LayerMask,
        ) -> bool {
            // Sampled march is plenty for the axis-aligned rays the sensor casts
            let steps = 64;
            self.matching(mask).any(|solid| {
                (0..=steps).any(|i| {
                    let point = origin + *direction * (max_distance * i as f32 / steps as f32);
                    point.cmpge(solid.min).all() && point.cmple(solid.max).all()
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FakeGeometry;
    use super::*;
    use crate::movement::GameLayer;

    fn floor() -> FakeGeometry {
        // Top surface at y = 0
        FakeGeometry::default().with_solid(
            Vec2::new(0.0, -0.5),
            Vec2::new(20.0, 1.0),
            GameLayer::Ground,
        )
    }

    #[test]
    fn standing_on_floor_is_grounded() {
        let tuning = MovementTuning::default();
        let readings = sense(&floor(), Vec2::new(0.0, 0.5), &tuning);
        assert!(readings.grounded);
        assert!(!readings.touching_wall);
    }

    #[test]
    fn above_floor_is_not_grounded() {
        let tuning = MovementTuning::default();
        let readings = sense(&floor(), Vec2::new(0.0, 2.0), &tuning);
        assert!(!readings.grounded);
    }

    #[test]
    fn ground_mask_filters_other_layers() {
        let tuning = MovementTuning::default();
        let walls_only = FakeGeometry::default().with_solid(
            Vec2::new(0.0, -0.5),
            Vec2::new(20.0, 1.0),
            GameLayer::Wall,
        );
        assert!(!sense(&walls_only, Vec2::new(0.0, 0.5), &tuning).grounded);
    }

    #[test]
    fn wall_on_either_side_is_detected() {
        let tuning = MovementTuning::default();
        let wall_at = |x: f32| {
            FakeGeometry::default().with_solid(
                Vec2::new(x, 0.0),
                Vec2::new(0.5, 4.0),
                GameLayer::Wall,
            )
        };
        let left = wall_at(-0.7);
        let right = wall_at(0.7);
        let far = wall_at(3.0);

        assert!(sense(&left, Vec2::ZERO, &tuning).touching_wall);
        assert!(sense(&right, Vec2::ZERO, &tuning).touching_wall);
        assert!(!sense(&far, Vec2::ZERO, &tuning).touching_wall);
    }

    #[test]
    fn empty_world_reads_no_contact() {
        let readings = sense(
            &FakeGeometry::default(),
            Vec2::ZERO,
            &MovementTuning::default(),
        );
        assert_eq!(readings, SensorReadings::default());
    }

    #[test]
    fn empty_masks_read_no_contact() {
        let tuning = MovementTuning {
            ground_layers: Vec::new(),
            wall_layers: Vec::new(),
            ..default()
        };
        assert!(crate::movement::ControllerTuning::new(tuning.clone()).is_ok());

        let world = floor().with_solid(Vec2::new(0.6, 1.0), Vec2::new(0.4, 3.0), GameLayer::Wall);
        let readings = sense(&world, Vec2::new(0.0, 0.5), &tuning);
        assert!(!readings.grounded);
        assert!(!readings.touching_wall);
    }

    #[test]
    fn sensing_is_idempotent() {
        let tuning = MovementTuning::default();
        let world = floor().with_solid(Vec2::new(0.6, 1.0), Vec2::new(0.4, 3.0), GameLayer::Wall);
        let position = Vec2::new(0.0, 0.5);
        assert_eq!(sense(&world, position, &tuning), sense(&world, position, &tuning));
    }
}
