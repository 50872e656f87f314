//! Transform and camera pose types

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rotation order of the Euler angles stored in scene documents.
///
/// Angles are applied Z first, then X, then Y (`q = qy * qx * qz`), which is
/// what saved scenes have always used.
const DOCUMENT_EULER: EulerRot = EulerRot::YXZ;

/// Position, orientation and scale of a scene entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Decompose an affine matrix; shear is dropped
    pub fn from_mat4(matrix: &Mat4) -> Self {
        let (scale, rotation, position) = matrix.to_scale_rotation_translation();
        Self {
            position,
            rotation: rotation.normalize(),
            scale,
        }
    }

    /// Rotation as document Euler angles in degrees, each in [0, 360)
    pub fn euler_degrees(&self) -> Vec3 {
        quat_to_euler_degrees(self.rotation)
    }

    pub fn set_euler_degrees(&mut self, euler: Vec3) {
        self.rotation = euler_degrees_to_quat(euler);
    }

    /// Local forward axis (+Z) in world space
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Local right axis (+X) in world space
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local up axis (+Y) in world space
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// Camera position and orientation, as captured into and restored from documents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -10.0),
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// Convert document Euler angles (degrees) to a quaternion
pub fn euler_degrees_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(
        DOCUMENT_EULER,
        euler.y.to_radians(),
        euler.x.to_radians(),
        euler.z.to_radians(),
    )
}

/// Convert a quaternion to document Euler angles (degrees, each in [0, 360))
pub fn quat_to_euler_degrees(rotation: Quat) -> Vec3 {
    let (y, x, z) = rotation.normalize().to_euler(DOCUMENT_EULER);
    Vec3::new(
        wrap_degrees(x.to_degrees()),
        wrap_degrees(y.to_degrees()),
        wrap_degrees(z.to_degrees()),
    )
}

fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
