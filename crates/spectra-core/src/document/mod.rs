//! Scene documents
//!
//! A [`SceneDocument`] is the flat, versioned form of a saved scene: one
//! record per light, lens, prism and mirror plus the camera pose. Records
//! carry no entity identity; loading recreates fresh entities through an
//! [`EntityFactory`](crate::factory::EntityFactory).
//!
//! The JSON field names are shared with every earlier save and are pinned
//! with explicit `rename` attributes.

mod capture;
mod restore;
mod tags;

pub use restore::{RestoreOptions, Restored, restore};
pub use tags::{LenseTag, LightTag, MirrorTag, PrismTag};

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, LensForm};
use crate::types::{CameraPose, Transform, euler_degrees_to_quat};

/// Errors that can occur while reading, writing or restoring documents
#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to parse scene document: {0}")]
    Parse(String),

    #[error("Failed to serialize scene document: {0}")]
    Serialize(String),

    #[error("Prefab '{prefab}' has no {capability} capability")]
    MissingCapability {
        prefab: &'static str,
        capability: &'static str,
    },

    #[error("Factory returned an entity that is not in the scene: {0}")]
    EntityNotFound(EntityId),
}

/// Position and Euler rotation shared by every record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "posX")]
    pub pos_x: f32,
    #[serde(rename = "posY")]
    pub pos_y: f32,
    #[serde(rename = "posZ")]
    pub pos_z: f32,
    #[serde(rename = "rotX")]
    pub rot_x: f32,
    #[serde(rename = "rotY")]
    pub rot_y: f32,
    #[serde(rename = "rotZ")]
    pub rot_z: f32,
}

impl Placement {
    pub fn from_transform(transform: &Transform) -> Self {
        let euler = transform.euler_degrees();
        Self {
            pos_x: transform.position.x,
            pos_y: transform.position.y,
            pos_z: transform.position.z,
            rot_x: euler.x,
            rot_y: euler.y,
            rot_z: euler.z,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.pos_x, self.pos_y, self.pos_z)
    }

    /// Euler angles in degrees
    pub fn euler_degrees(&self) -> Vec3 {
        Vec3::new(self.rot_x, self.rot_y, self.rot_z)
    }

    pub fn rotation(&self) -> Quat {
        euler_degrees_to_quat(self.euler_degrees())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightRecord {
    #[serde(rename = "type")]
    pub tag: LightTag,
    #[serde(flatten)]
    pub placement: Placement,
    pub width: f32,
    #[serde(rename = "waveLength")]
    pub wavelength: f32,
    pub opacity: f32,
    #[serde(rename = "whiteLight")]
    pub white_light: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenseRecord {
    #[serde(rename = "type")]
    pub tag: LenseTag,
    #[serde(flatten)]
    pub placement: Placement,
    /// Uniform scale
    pub scale: f32,
    #[serde(rename = "leftRadius")]
    pub left_radius: f32,
    #[serde(rename = "rightRadius")]
    pub right_radius: f32,
    #[serde(rename = "squareX")]
    pub square_x: f32,
    #[serde(rename = "squareY")]
    pub square_y: f32,
    #[serde(rename = "refractiveIndex")]
    pub refractive_index: f32,
    pub transmission: f32,
}

impl LenseRecord {
    pub fn form(&self) -> LensForm {
        self.tag.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrismRecord {
    #[serde(rename = "type")]
    pub tag: PrismTag,
    #[serde(flatten)]
    pub placement: Placement,
    /// Uniform scale
    pub scale: f32,
    #[serde(rename = "isLense3D")]
    pub is_lense_3d: bool,
    #[serde(rename = "typeOfLense3D", with = "tags::lens_3d_kind", default)]
    pub type_of_lense_3d: Option<LensForm>,
    #[serde(rename = "refractiveIndex")]
    pub refractive_index: f32,
    pub transmission: f32,
}

impl PrismRecord {
    /// The 3D lens form, if the flag is set
    pub fn lens_3d(&self) -> Option<LensForm> {
        if self.is_lense_3d {
            // the flag without a sub-kind has always meant a convex body
            Some(self.type_of_lense_3d.unwrap_or(LensForm::Convex))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorRecord {
    #[serde(rename = "type")]
    pub tag: MirrorTag,
    #[serde(flatten)]
    pub placement: Placement,
    #[serde(rename = "scaleX")]
    pub scale_x: f32,
    #[serde(rename = "scaleY")]
    pub scale_y: f32,
    #[serde(rename = "scaleZ")]
    pub scale_z: f32,
}

impl MirrorRecord {
    pub fn scale(&self) -> Vec3 {
        Vec3::new(self.scale_x, self.scale_y, self.scale_z)
    }
}

fn legacy_version() -> u32 {
    SceneDocument::LEGACY_VERSION
}

/// Saved scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Format version; files written before versioning read as 1
    #[serde(default = "legacy_version")]
    pub version: u32,
    pub lights: Vec<LightRecord>,
    pub lenses: Vec<LenseRecord>,
    pub prisms: Vec<PrismRecord>,
    pub mirrors: Vec<MirrorRecord>,
    #[serde(rename = "camX")]
    pub cam_x: f32,
    #[serde(rename = "camY")]
    pub cam_y: f32,
    #[serde(rename = "camZ")]
    pub cam_z: f32,
    /// Camera quaternion x
    #[serde(rename = "rotX")]
    pub rot_x: f32,
    /// Camera quaternion y
    #[serde(rename = "rotY")]
    pub rot_y: f32,
    /// Camera quaternion z
    #[serde(rename = "rotZ")]
    pub rot_z: f32,
    /// Camera quaternion w, written since version 2
    #[serde(rename = "rotW", default, skip_serializing_if = "Option::is_none")]
    pub rot_w: Option<f32>,
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneDocument {
    /// Files without a `version` field
    pub const LEGACY_VERSION: u32 = 1;
    /// Version written by this crate
    pub const CURRENT_VERSION: u32 = 2;

    /// Empty document with the default camera pose
    pub fn new() -> Self {
        let mut document = Self {
            version: Self::CURRENT_VERSION,
            lights: Vec::new(),
            lenses: Vec::new(),
            prisms: Vec::new(),
            mirrors: Vec::new(),
            cam_x: 0.0,
            cam_y: 0.0,
            cam_z: 0.0,
            rot_x: 0.0,
            rot_y: 0.0,
            rot_z: 0.0,
            rot_w: None,
        };
        document.set_camera_pose(CameraPose::default());
        document
    }

    pub fn record_count(&self) -> usize {
        self.lights.len() + self.lenses.len() + self.prisms.len() + self.mirrors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    pub fn set_camera_pose(&mut self, pose: CameraPose) {
        let rotation = pose.rotation.normalize();
        self.cam_x = pose.position.x;
        self.cam_y = pose.position.y;
        self.cam_z = pose.position.z;
        self.rot_x = rotation.x;
        self.rot_y = rotation.y;
        self.rot_z = rotation.z;
        self.rot_w = Some(rotation.w);
    }

    /// Camera pose stored in the document.
    ///
    /// Legacy files carry only x/y/z of the rotation. For a unit quaternion
    /// the missing w is recovered up to sign, and q and -q are the same
    /// rotation.
    pub fn camera_pose(&self) -> CameraPose {
        let (x, y, z) = (self.rot_x, self.rot_y, self.rot_z);
        let w = self
            .rot_w
            .unwrap_or_else(|| (1.0 - (x * x + y * y + z * z)).max(0.0).sqrt());
        let rotation = Quat::from_xyzw(x, y, z, w);
        let rotation = if rotation.length_squared() > 0.0 {
            rotation.normalize()
        } else {
            Quat::IDENTITY
        };

        CameraPose {
            position: Vec3::new(self.cam_x, self.cam_y, self.cam_z),
            rotation,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    /// Parse a JSON document. Unknown kind tags and missing fields fail.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))
    }
}
