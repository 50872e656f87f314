//! View camera used for picking, panning and zooming

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use spectra_core::CameraPose;
use spectra_core::geometry::project_to_plane;

/// World plane the editor manipulates in
pub const WORK_PLANE_Z: f32 = 0.0;

/// Camera projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// `size` is half the visible height in world units
    Orthographic { size: f32 },
    Perspective { fov_y_degrees: f32 },
}

/// A ray in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Camera the scene is viewed through
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    pub pose: CameraPose,
    pub projection: Projection,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl ViewCamera {
    pub fn orthographic(size: f32, viewport: Vec2) -> Self {
        Self {
            pose: CameraPose::default(),
            projection: Projection::Orthographic { size },
            viewport,
        }
    }

    pub fn perspective(fov_y_degrees: f32, viewport: Vec2) -> Self {
        Self {
            pose: CameraPose::default(),
            projection: Projection::Perspective { fov_y_degrees },
            viewport,
        }
    }

    pub fn with_pose(mut self, pose: CameraPose) -> Self {
        self.pose = pose;
        self
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.x.max(1.0) / self.viewport.y.max(1.0)
    }

    /// Orthographic size, or None for perspective cameras
    pub fn ortho_size(&self) -> Option<f32> {
        match self.projection {
            Projection::Orthographic { size } => Some(size),
            Projection::Perspective { .. } => None,
        }
    }

    /// Returns false for perspective cameras
    pub fn set_ortho_size(&mut self, new_size: f32) -> bool {
        match &mut self.projection {
            Projection::Orthographic { size } => {
                *size = new_size;
                true
            }
            Projection::Perspective { .. } => false,
        }
    }

    /// Ray through a screen position (pixels, top-left origin)
    pub fn screen_to_ray(&self, screen: Vec2) -> Ray {
        let width = self.viewport.x.max(1.0);
        let height = self.viewport.y.max(1.0);
        let ndc = Vec2::new(2.0 * screen.x / width - 1.0, 1.0 - 2.0 * screen.y / height);

        let forward = self.pose.forward();
        let right = self.pose.right();
        let up = self.pose.up();

        match self.projection {
            Projection::Orthographic { size } => {
                let origin = self.pose.position
                    + right * (ndc.x * size * self.aspect())
                    + up * (ndc.y * size);
                Ray::new(origin, forward)
            }
            Projection::Perspective { fov_y_degrees } => {
                let tan = (fov_y_degrees.to_radians() * 0.5).tan();
                let direction =
                    forward + right * (ndc.x * tan * self.aspect()) + up * (ndc.y * tan);
                Ray::new(self.pose.position, direction)
            }
        }
    }

    /// Pointer position projected onto the work plane
    pub fn screen_to_plane(&self, screen: Vec2) -> Vec3 {
        let ray = self.screen_to_ray(screen);
        project_to_plane(ray.origin, ray.direction, WORK_PLANE_Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> ViewCamera {
        ViewCamera::orthographic(5.0, Vec2::new(200.0, 100.0))
    }

    #[test]
    fn test_center_of_screen_hits_camera_axis() {
        let p = camera().screen_to_plane(Vec2::new(100.0, 50.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_eq!(p.z, WORK_PLANE_Z);
    }

    #[test]
    fn test_orthographic_extents() {
        let cam = camera();
        // top-left corner: x = -size * aspect, y = +size
        let p = cam.screen_to_plane(Vec2::ZERO);
        assert_relative_eq!(p.x, -10.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_perspective_center_ray() {
        let cam = ViewCamera::perspective(60.0, Vec2::new(100.0, 100.0));
        let ray = cam.screen_to_ray(Vec2::new(50.0, 50.0));
        assert_relative_eq!(ray.direction.z, 1.0, epsilon = 1e-5);
        let p = cam.screen_to_plane(Vec2::new(50.0, 50.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ortho_size_only_for_orthographic() {
        let mut cam = camera();
        assert!(cam.set_ortho_size(8.0));
        assert_eq!(cam.ortho_size(), Some(8.0));

        let mut persp = ViewCamera::perspective(60.0, Vec2::ONE);
        assert!(!persp.set_ortho_size(8.0));
        assert_eq!(persp.ortho_size(), None);
    }
}
