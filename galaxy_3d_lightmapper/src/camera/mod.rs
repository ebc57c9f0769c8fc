//! Camera module - projection camera and frustum.
//!
//! Cameras are owned and driven by the caller. The lightmapper keeps its
//! own orthographic camera and re-fits it for every directional light.

mod camera;
mod frustum;

pub use camera::{Camera, ClearOptions, Projection, MIN_DEPTH_RANGE};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
