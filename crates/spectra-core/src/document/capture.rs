//! Building documents from a live scene

use crate::entity::{Entity, Glass, LensShape, LightEmitter};
use crate::scene::Scene;
use crate::types::CameraPose;

use super::{
    LenseRecord, LightRecord, LightTag, MirrorRecord, MirrorTag, Placement, PrismRecord, PrismTag,
    SceneDocument,
};

impl SceneDocument {
    /// Capture every optical entity of `scene` plus the camera pose.
    ///
    /// Entities are visited once per category: light emitters, lens-shaped
    /// bodies, glass without a lens shape (prisms and 3D lenses), then
    /// reflective surfaces. Within a category the scene order is kept.
    pub fn capture(scene: &Scene, camera: CameraPose) -> Self {
        let mut document = SceneDocument::new();

        document.lights = scene
            .iter()
            .filter_map(|e| e.light().map(|light| LightRecord::capture(e, light)))
            .collect();

        document.lenses = scene
            .iter()
            .filter_map(|e| e.lens_shape().map(|shape| LenseRecord::capture(e, shape)))
            .collect();

        document.prisms = scene
            .iter()
            .filter(|e| e.lens_shape().is_none())
            .filter_map(|e| e.glass().map(|glass| PrismRecord::capture(e, glass)))
            .collect();

        document.mirrors = scene
            .iter()
            .filter(|e| e.is_reflective())
            .map(MirrorRecord::capture)
            .collect();

        document.set_camera_pose(camera);

        tracing::debug!(
            "Captured scene: {} lights, {} lenses, {} prisms, {} mirrors",
            document.lights.len(),
            document.lenses.len(),
            document.prisms.len(),
            document.mirrors.len()
        );

        document
    }
}

impl LightRecord {
    fn capture(entity: &Entity, light: &LightEmitter) -> Self {
        Self {
            tag: LightTag::Light,
            placement: Placement::from_transform(&entity.transform),
            width: light.width,
            wavelength: light.wavelength,
            opacity: light.opacity,
            white_light: light.white_light,
        }
    }
}

impl LenseRecord {
    fn capture(entity: &Entity, shape: &LensShape) -> Self {
        // a lens without glass records zero optics
        let (refractive_index, transmission) = entity
            .glass()
            .map(|g| (g.refractive_index, g.transmission))
            .unwrap_or((0.0, 0.0));

        Self {
            tag: shape.form.into(),
            placement: Placement::from_transform(&entity.transform),
            scale: entity.transform.scale.x,
            left_radius: shape.left_radius,
            right_radius: shape.right_radius,
            square_x: shape.square_x,
            square_y: shape.square_y,
            refractive_index,
            transmission,
        }
    }
}

impl PrismRecord {
    fn capture(entity: &Entity, glass: &Glass) -> Self {
        Self {
            tag: PrismTag::Prism,
            placement: Placement::from_transform(&entity.transform),
            scale: entity.transform.scale.x,
            is_lense_3d: glass.lens_3d.is_some(),
            type_of_lense_3d: glass.lens_3d,
            refractive_index: glass.refractive_index,
            transmission: glass.transmission,
        }
    }
}

impl MirrorRecord {
    fn capture(entity: &Entity) -> Self {
        let scale = entity.transform.scale;
        Self {
            tag: MirrorTag::Mirror,
            placement: Placement::from_transform(&entity.transform),
            scale_x: scale.x,
            scale_y: scale.y,
            scale_z: scale.z,
        }
    }
}
