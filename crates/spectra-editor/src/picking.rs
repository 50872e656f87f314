//! Entity picking

use spectra_core::{EntityId, Scene};

use crate::camera::Ray;

/// Finds the entity under a pointer ray
pub trait ScenePicker {
    fn pick(&self, scene: &Scene, ray: Ray) -> Option<EntityId>;
}

/// Picks the closest entity whose world-space bounding box the ray crosses
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsPicker;

impl ScenePicker for BoundsPicker {
    fn pick(&self, scene: &Scene, ray: Ray) -> Option<EntityId> {
        let mut closest_hit: Option<(EntityId, f32)> = None;

        for entity in scene.iter() {
            let world_bounds = entity.bounds.transformed(&entity.transform.to_mat4());
            let Some(distance) = world_bounds.ray_intersection(ray.origin, ray.direction) else {
                continue;
            };

            if closest_hit.is_none_or(|(_, closest)| distance < closest) {
                closest_hit = Some((entity.id, distance));
            }
        }

        closest_hit.map(|(id, _)| id)
    }
}
