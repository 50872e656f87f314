//! Live scene container

use std::collections::{HashMap, HashSet};

use crate::entity::{Entity, EntityId};
use crate::types::Transform;

/// Errors from scene graph operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),
}

/// Entities placed in the editor, iterated in insertion order
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: HashMap<EntityId, Entity>,
    order: Vec<EntityId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity, returning its id
    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        if self.entities.insert(id, entity).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Remove an entity and all its descendants.
    ///
    /// Returns the removed entities, the requested one first.
    pub fn remove(&mut self, id: EntityId) -> Result<Vec<Entity>, SceneError> {
        if !self.entities.contains_key(&id) {
            return Err(SceneError::EntityNotFound(id));
        }

        let mut to_remove = vec![id];
        to_remove.extend(self.descendants_of(id));

        let removed = to_remove
            .iter()
            .filter_map(|id| self.entities.remove(id))
            .collect();
        self.order.retain(|id| !to_remove.contains(id));

        Ok(removed)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Direct children of an entity, in insertion order
    pub fn children_of(&self, id: EntityId) -> Vec<EntityId> {
        self.iter()
            .filter(|e| e.parent == Some(id))
            .map(|e| e.id)
            .collect()
    }

    /// All descendants of an entity, breadth first.
    ///
    /// Each entity is visited once, so a parent cycle ends the walk instead
    /// of looping.
    pub fn descendants_of(&self, id: EntityId) -> Vec<EntityId> {
        let mut visited = HashSet::from([id]);
        let mut found = Vec::new();
        let mut i = 0;
        let mut current = id;
        loop {
            for child in self.children_of(current) {
                if visited.insert(child) {
                    found.push(child);
                }
            }
            let Some(&next) = found.get(i) else {
                break;
            };
            current = next;
            i += 1;
        }
        found
    }

    /// Set an entity's transform and carry its descendants along rigidly.
    ///
    /// Transforms are stored in world space, so each descendant receives the
    /// same change the entity went through.
    pub fn set_transform(&mut self, id: EntityId, transform: Transform) -> Result<(), SceneError> {
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or(SceneError::EntityNotFound(id))?;
        let before = entity.transform;
        entity.transform = transform;
        if before == transform {
            return Ok(());
        }

        let delta = transform.to_mat4() * before.to_mat4().inverse();
        if !delta.is_finite() {
            // A zero scale cannot be undone; leave descendants in place
            return Ok(());
        }
        for child in self.descendants_of(id) {
            if let Some(entity) = self.entities.get_mut(&child) {
                entity.transform = Transform::from_mat4(&(delta * entity.transform.to_mat4()));
            }
        }
        Ok(())
    }

    /// Topmost ancestor of an entity (the entity itself if it has no parent)
    pub fn root_of(&self, id: EntityId) -> Option<EntityId> {
        let mut current = self.entities.get(&id)?;
        // Bounded by the entity count so a malformed parent cycle cannot spin
        for _ in 0..self.entities.len() {
            match current.parent.and_then(|p| self.entities.get(&p)) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        Some(current.id)
    }

    /// Iterate entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Capabilities;
    use approx::assert_relative_eq;
    use glam::{Quat, Vec3};

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut scene = Scene::new();
        let a = scene.add(Entity::background("a"));
        let b = scene.add(Entity::new("b", Capabilities::mirror()));
        let c = scene.add(Entity::background("c"));

        let ids: Vec<EntityId> = scene.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_remove_takes_descendants() {
        let mut scene = Scene::new();
        let root = scene.add(Entity::new("mirror", Capabilities::mirror()));
        let child = scene.add(Entity::background("frame").with_parent(root));
        let grandchild = scene.add(Entity::background("bolt").with_parent(child));
        let other = scene.add(Entity::background("floor"));

        let removed = scene.remove(root).unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(removed[0].id, root);
        assert!(!scene.contains(child));
        assert!(!scene.contains(grandchild));
        assert!(scene.contains(other));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_remove_missing_entity() {
        let mut scene = Scene::new();
        let missing = EntityId::new();
        let result = scene.remove(missing);
        assert!(matches!(result, Err(SceneError::EntityNotFound(id)) if id == missing));
    }

    #[test]
    fn test_root_of_walks_parents() {
        let mut scene = Scene::new();
        let root = scene.add(Entity::new("mirror", Capabilities::mirror()));
        let child = scene.add(Entity::background("frame").with_parent(root));
        let grandchild = scene.add(Entity::background("bolt").with_parent(child));

        assert_eq!(scene.root_of(grandchild), Some(root));
        assert_eq!(scene.root_of(root), Some(root));
        assert_eq!(scene.root_of(EntityId::new()), None);
    }

    #[test]
    fn test_remove_survives_parent_cycle() {
        let mut scene = Scene::new();
        let a = scene.add(Entity::background("a"));
        let b = scene.add(Entity::background("b").with_parent(a));
        let c = scene.add(Entity::background("c").with_parent(b));
        scene.get_mut(a).unwrap().parent = Some(c);
        let other = scene.add(Entity::background("other"));

        assert_eq!(scene.descendants_of(a), vec![b, c]);
        let removed = scene.remove(a).unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(scene.len(), 1);
        assert!(scene.contains(other));
    }

    #[test]
    fn test_self_parent_is_not_own_descendant() {
        let mut scene = Scene::new();
        let a = scene.add(Entity::background("a"));
        scene.get_mut(a).unwrap().parent = Some(a);

        assert!(scene.descendants_of(a).is_empty());
        assert_eq!(scene.remove(a).unwrap().len(), 1);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_set_transform_moves_descendants() {
        let mut scene = Scene::new();
        let root = scene.add(Entity::new("mirror", Capabilities::mirror()));
        let child = scene.add(
            Entity::background("frame")
                .with_parent(root)
                .with_transform(Transform::from_position(Vec3::new(1.0, 0.0, 0.5))),
        );

        let mut moved = Transform::from_position(Vec3::new(2.0, 3.0, 0.0));
        moved.rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        scene.set_transform(root, moved).unwrap();

        let frame = scene.get(child).unwrap().transform;
        assert_relative_eq!(frame.position.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(frame.position.y, 4.0, epsilon = 1e-5);
        assert_relative_eq!(frame.position.z, 0.5, epsilon = 1e-5);
        assert_relative_eq!(frame.rotation.angle_between(moved.rotation), 0.0, epsilon = 1e-4);
        assert_eq!(scene.get(root).unwrap().transform, moved);
    }

    #[test]
    fn test_set_transform_missing_entity() {
        let mut scene = Scene::new();
        let missing = EntityId::new();
        assert!(matches!(
            scene.set_transform(missing, Transform::IDENTITY),
            Err(SceneError::EntityNotFound(id)) if id == missing
        ));
    }
}
