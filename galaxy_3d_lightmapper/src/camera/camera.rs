/// Camera - pose, projection, clear options and output target.
///
/// Unlike a passive matrix holder, this camera derives its view,
/// projection and frustum from high-level parameters on demand,
/// so a caller can re-fit it between render passes by setting
/// a handful of fields.

use std::fmt;
use std::sync::Arc;
use glam::{EulerRot, Mat4, Quat, Vec3};
use crate::graphics_device::RenderTarget;
use super::frustum::Frustum;

/// Smallest distance kept between the near and far planes.
///
/// A perfectly flat object gives a zero-height bounding box; the far plane
/// is pushed out by this much so the projection stays invertible.
pub const MIN_DEPTH_RANGE: f32 = 1e-4;

/// Projection model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
}

/// What a render pass clears before drawing.
///
/// `None` leaves the corresponding buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearOptions {
    pub color: Option<[f32; 4]>,
    pub depth: Option<f32>,
    pub stencil: Option<u32>,
}

impl Default for ClearOptions {
    fn default() -> Self {
        Self {
            color: Some([0.0, 0.0, 0.0, 1.0]),
            depth: Some(1.0),
            stencil: None,
        }
    }
}

/// Scene camera
#[derive(Clone)]
pub struct Camera {
    /// World-space position
    pub position: Vec3,
    /// World-space orientation
    pub rotation: Quat,
    /// Projection model
    pub projection: Projection,
    /// Vertical field of view in radians (perspective)
    pub fov_y: f32,
    /// Half of the view volume height (orthographic)
    pub ortho_height: f32,
    /// Width / height
    pub aspect: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// Buffers cleared before each pass
    pub clear: ClearOptions,
    /// Output target, `None` renders to the backbuffer
    pub render_target: Option<Arc<dyn RenderTarget>>,
}

impl Camera {
    /// Perspective camera at the origin looking down -Z
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            projection: Projection::Perspective,
            fov_y: std::f32::consts::FRAC_PI_4,
            ortho_height: 10.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            clear: ClearOptions::default(),
            render_target: None,
        }
    }

    /// Set the orientation from Euler angles in degrees (applied X, then Y, then Z)
    pub fn set_euler_angles(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Quat::from_euler(
            EulerRot::XYZ,
            x.to_radians(),
            y.to_radians(),
            z.to_radians(),
        );
    }

    /// Direction the camera looks at
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    // ===== DERIVED MATRICES =====

    /// World transform of the camera
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// View matrix (inverse of the world transform)
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Projection matrix, zero-to-one depth
    pub fn projection_matrix(&self) -> Mat4 {
        let far = self.far.max(self.near + MIN_DEPTH_RANGE);
        match self.projection {
            Projection::Perspective => Mat4::perspective_rh(self.fov_y, self.aspect, self.near, far),
            Projection::Orthographic => {
                let h = self.ortho_height;
                let w = h * self.aspect;
                Mat4::orthographic_rh(-w, w, -h, h, self.near, far)
            }
        }
    }

    /// Combined view-projection matrix (projection * view)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Frustum of the current pose and projection
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("position", &self.position)
            .field("rotation", &self.rotation)
            .field("projection", &self.projection)
            .field("ortho_height", &self.ortho_height)
            .field("near", &self.near)
            .field("far", &self.far)
            .field("clear", &self.clear)
            .field("render_target", &self.render_target.as_ref().map(|t| t.color_texture().info().label.clone()))
            .finish()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
