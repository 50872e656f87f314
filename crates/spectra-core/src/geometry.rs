//! Geometry helpers for pointer-driven manipulation
//!
//! Everything here is stateless. The editor works in the z = 0 world plane:
//! pointer rays are projected onto it, rotations happen about the +Z axis and
//! distances used for scaling ignore depth.

use glam::{Mat3, Quat, Vec2, Vec3};

/// Initial distances below this are treated as zero when scaling
pub const SCALE_EPSILON: f32 = 1e-6;

/// Intersect a ray with the plane `z = plane_z`.
///
/// Returns None if the ray is parallel to the plane. The intersection may lie
/// behind the ray origin; orthographic pointer rays start on the camera plane
/// and the projection is wanted either way.
pub fn ray_plane_z(ray_origin: Vec3, ray_dir: Vec3, plane_z: f32) -> Option<Vec3> {
    if ray_dir.z.abs() < 1e-6 {
        return None;
    }

    let t = (plane_z - ray_origin.z) / ray_dir.z;
    let mut hit = ray_origin + ray_dir * t;
    hit.z = plane_z;
    Some(hit)
}

/// Project a pointer ray onto the `z = plane_z` plane.
///
/// A ray parallel to the plane falls back to the ray origin flattened onto
/// the plane.
pub fn project_to_plane(ray_origin: Vec3, ray_dir: Vec3, plane_z: f32) -> Vec3 {
    ray_plane_z(ray_origin, ray_dir, plane_z)
        .unwrap_or_else(|| Vec3::new(ray_origin.x, ray_origin.y, plane_z))
}

/// Angle in degrees of the direction from `from` to `to`, measured in the XY plane
pub fn angle_towards(from: Vec3, to: Vec3) -> f32 {
    let direction = Vec2::new(to.x - from.x, to.y - from.y);
    direction.y.atan2(direction.x).to_degrees()
}

/// Rotation about +Z that points the local +X axis from `from` towards `to`
pub fn rotation_towards(from: Vec3, to: Vec3) -> Quat {
    Quat::from_rotation_z(angle_towards(from, to).to_radians())
}

/// Rotation whose local +Z axis points along `forward`, keeping +Y as up
/// where possible
pub fn look_rotation(forward: Vec3) -> Quat {
    let f = forward.normalize_or_zero();
    if f == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let right = Vec3::Y.cross(f);
    if right.length_squared() < 1e-8 {
        // looking straight up or down
        return Quat::from_rotation_arc(Vec3::Z, f);
    }
    let right = right.normalize();
    let up = f.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, f))
}

/// Distance between two points ignoring z
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.y - b.y).length()
}

/// Ratio between the current and initial pointer distance.
///
/// A zero initial distance yields 1 so the scale stays unchanged.
pub fn scale_factor(initial_distance: f32, current_distance: f32) -> f32 {
    if initial_distance.abs() < SCALE_EPSILON {
        return 1.0;
    }
    current_distance / initial_distance
}
