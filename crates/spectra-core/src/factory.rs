//! Entity instantiation
//!
//! Loading a document never builds entities by itself; it asks an
//! [`EntityFactory`] for a fresh instance of a [`Prefab`] and then applies the
//! recorded attributes to it.

use crate::entity::{
    Capabilities, Entity, EntityId, Glass, LensForm, LensShape, LightEmitter,
};
use crate::scene::Scene;
use crate::types::Aabb;

use glam::Vec3;

/// Stock objects that documents can recreate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefab {
    Light,
    /// 2D lens with a curved profile
    Lens(LensForm),
    /// 3D lens body (glass without a 2D profile)
    Lens3d(LensForm),
    Prism,
    Mirror,
}

impl Prefab {
    pub fn name(&self) -> &'static str {
        match self {
            Prefab::Light => "Light",
            Prefab::Lens(LensForm::Concave) => "Concave Lens",
            Prefab::Lens(LensForm::Convex) => "Convex Lens",
            Prefab::Lens3d(LensForm::Concave) => "Concave Lens 3D",
            Prefab::Lens3d(LensForm::Convex) => "Convex Lens 3D",
            Prefab::Prism => "Prism",
            Prefab::Mirror => "Mirror",
        }
    }
}

/// Creates scene entities on behalf of the document loader
pub trait EntityFactory {
    /// Instantiate `prefab` into `scene` and return the new entity's id
    fn instantiate(&mut self, prefab: Prefab, scene: &mut Scene) -> EntityId;
}

impl<F> EntityFactory for F
where
    F: FnMut(Prefab, &mut Scene) -> EntityId,
{
    fn instantiate(&mut self, prefab: Prefab, scene: &mut Scene) -> EntityId {
        self(prefab, scene)
    }
}

/// Factory producing the stock prefabs with default attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefabFactory;

impl PrefabFactory {
    /// Build the entity for a prefab without adding it to a scene
    pub fn build(prefab: Prefab) -> Entity {
        match prefab {
            Prefab::Light => Entity::new(prefab.name(), Capabilities::light(LightEmitter::default()))
                .with_bounds(Aabb::from_half_extents(Vec3::new(0.3, 0.15, 0.15))),
            Prefab::Lens(form) => Entity::new(
                prefab.name(),
                Capabilities::lens(LensShape::new(form), Some(Glass::default())),
            )
            .with_bounds(Aabb::from_half_extents(Vec3::new(0.2, 1.0, 0.2))),
            Prefab::Lens3d(form) => Entity::new(
                prefab.name(),
                Capabilities::prism(Glass {
                    lens_3d: Some(form),
                    ..Glass::default()
                }),
            ),
            Prefab::Prism => Entity::new(prefab.name(), Capabilities::prism(Glass::default())),
            Prefab::Mirror => Entity::new(prefab.name(), Capabilities::mirror())
                .with_bounds(Aabb::from_half_extents(Vec3::new(0.05, 1.0, 0.2))),
        }
    }
}

impl EntityFactory for PrefabFactory {
    fn instantiate(&mut self, prefab: Prefab, scene: &mut Scene) -> EntityId {
        scene.add(Self::build(prefab))
    }
}
