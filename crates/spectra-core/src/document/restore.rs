//! Recreating a scene from a document

use glam::Vec3;

use crate::entity::{Entity, EntityId};
use crate::factory::{EntityFactory, Prefab};
use crate::scene::Scene;
use crate::types::{CameraPose, euler_degrees_to_quat};

use super::{DocumentError, LenseRecord, LightRecord, MirrorRecord, PrismRecord, SceneDocument};

/// Options for [`restore`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Rebuild prism rotations from `(rotX, rotZ, rotZ)` the way older
    /// editor builds did, instead of the three stored angles.
    pub legacy_prism_rotation: bool,
}

/// Result of a successful [`restore`]
#[derive(Debug, Clone)]
pub struct Restored {
    /// Spawned entities in document order
    pub spawned: Vec<EntityId>,
    /// Camera pose to apply to the view
    pub camera: CameraPose,
}

/// Recreate the entities of `document` in `scene`.
///
/// Records are processed lights, lenses, prisms, mirrors, each in document
/// order. If any record cannot be applied, every entity spawned by this call
/// is removed again and the error is returned.
pub fn restore(
    document: &SceneDocument,
    scene: &mut Scene,
    factory: &mut dyn EntityFactory,
    options: RestoreOptions,
) -> Result<Restored, DocumentError> {
    let mut spawned = Vec::with_capacity(document.record_count());

    match spawn_all(document, scene, factory, options, &mut spawned) {
        Ok(()) => {
            tracing::info!(
                "Restored {} entities from document version {}",
                spawned.len(),
                document.version
            );
            Ok(Restored {
                spawned,
                camera: document.camera_pose(),
            })
        }
        Err(e) => {
            tracing::warn!("Restore failed, removing {} spawned entities: {}", spawned.len(), e);
            for id in spawned {
                // already gone if it was a descendant of an earlier one
                let _ = scene.remove(id);
            }
            Err(e)
        }
    }
}

fn spawn_all(
    document: &SceneDocument,
    scene: &mut Scene,
    factory: &mut dyn EntityFactory,
    options: RestoreOptions,
    spawned: &mut Vec<EntityId>,
) -> Result<(), DocumentError> {
    for record in &document.lights {
        let entity = spawn(Prefab::Light, scene, factory, spawned)?;
        apply_light(record, entity)?;
    }

    for record in &document.lenses {
        let prefab = Prefab::Lens(record.form());
        let entity = spawn(prefab, scene, factory, spawned)?;
        apply_lens(prefab, record, entity)?;
    }

    for record in &document.prisms {
        let prefab = match record.lens_3d() {
            Some(form) => Prefab::Lens3d(form),
            None => Prefab::Prism,
        };
        let entity = spawn(prefab, scene, factory, spawned)?;
        apply_prism(prefab, record, entity, options)?;
    }

    for record in &document.mirrors {
        let entity = spawn(Prefab::Mirror, scene, factory, spawned)?;
        apply_mirror(record, entity)?;
    }

    Ok(())
}

fn spawn<'a>(
    prefab: Prefab,
    scene: &'a mut Scene,
    factory: &mut dyn EntityFactory,
    spawned: &mut Vec<EntityId>,
) -> Result<&'a mut Entity, DocumentError> {
    let id = factory.instantiate(prefab, scene);
    if !scene.contains(id) {
        return Err(DocumentError::EntityNotFound(id));
    }
    spawned.push(id);
    tracing::debug!("Instantiated {} ({})", prefab.name(), id);
    scene.get_mut(id).ok_or(DocumentError::EntityNotFound(id))
}

fn apply_light(record: &LightRecord, entity: &mut Entity) -> Result<(), DocumentError> {
    entity.transform.position = record.placement.position();
    entity.transform.rotation = record.placement.rotation();

    let light = entity.light_mut().ok_or(DocumentError::MissingCapability {
        prefab: Prefab::Light.name(),
        capability: "light",
    })?;
    light.width = record.width;
    light.wavelength = record.wavelength;
    light.opacity = record.opacity;
    light.white_light = record.white_light;
    Ok(())
}

fn apply_lens(prefab: Prefab, record: &LenseRecord, entity: &mut Entity) -> Result<(), DocumentError> {
    entity.transform.position = record.placement.position();
    entity.transform.rotation = record.placement.rotation();
    entity.transform.scale = Vec3::splat(record.scale);

    let shape = entity.lens_shape_mut().ok_or(DocumentError::MissingCapability {
        prefab: prefab.name(),
        capability: "lens shape",
    })?;
    shape.left_radius = record.left_radius;
    shape.right_radius = record.right_radius;
    shape.square_x = record.square_x;
    shape.square_y = record.square_y;

    match entity.glass_mut() {
        Some(glass) => {
            glass.refractive_index = record.refractive_index;
            glass.transmission = record.transmission;
        }
        // zero optics is how a glass-less lens was captured
        None if record.refractive_index == 0.0 && record.transmission == 0.0 => {}
        None => {
            return Err(DocumentError::MissingCapability {
                prefab: prefab.name(),
                capability: "glass",
            });
        }
    }
    Ok(())
}

fn apply_prism(
    prefab: Prefab,
    record: &PrismRecord,
    entity: &mut Entity,
    options: RestoreOptions,
) -> Result<(), DocumentError> {
    let placement = &record.placement;
    entity.transform.position = placement.position();
    entity.transform.rotation = if options.legacy_prism_rotation {
        euler_degrees_to_quat(Vec3::new(placement.rot_x, placement.rot_z, placement.rot_z))
    } else {
        placement.rotation()
    };
    entity.transform.scale = Vec3::splat(record.scale);

    let glass = entity.glass_mut().ok_or(DocumentError::MissingCapability {
        prefab: prefab.name(),
        capability: "glass",
    })?;
    glass.refractive_index = record.refractive_index;
    glass.transmission = record.transmission;
    glass.lens_3d = record.lens_3d();
    Ok(())
}

fn apply_mirror(record: &MirrorRecord, entity: &mut Entity) -> Result<(), DocumentError> {
    if !entity.is_reflective() {
        return Err(DocumentError::MissingCapability {
            prefab: Prefab::Mirror.name(),
            capability: "reflective",
        });
    }
    entity.transform.position = record.placement.position();
    entity.transform.rotation = record.placement.rotation();
    entity.transform.scale = record.scale();
    Ok(())
}
