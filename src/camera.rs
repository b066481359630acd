//! Perspective orbit camera.
//!
//! Starts on the +Z axis looking at the origin, which matches a camera placed
//! at `(0, 0, distance)` facing down -Z. Dragging orbits it around the target.

use crate::config::FireworksConfig;
use glam::{Mat4, Vec3};

/// Orbit camera with a perspective projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a camera from the configured lens and distance.
    pub fn new(config: &FireworksConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: config.camera_distance,
            target: Vec3::ZERO,
            fov_y: config.camera_fov_degrees.to_radians(),
            aspect: 1.0,
            near: config.camera_near,
            far: config.camera_far,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined projection * view.
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio after a viewport resize.
    ///
    /// Zero-sized viewports (minimised windows) are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Map a point in normalized device coordinates back into world space.
    ///
    /// `ndc.z` selects a depth along the view ray (0.0 near plane, 1.0 far plane).
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.view_proj().inverse().project_point3(ndc)
    }

    /// Rotate around the target by a drag in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * 0.005;
        self.pitch = (self.pitch + dy * 0.005).clamp(-1.5, 1.5);
    }

    /// Move toward or away from the target by a scroll amount.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance - scroll * 2.0).clamp(5.0, 200.0);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&FireworksConfig::default())
    }
}
