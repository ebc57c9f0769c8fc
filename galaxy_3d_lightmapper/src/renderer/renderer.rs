/// Renderer trait - draws a scene through a camera

use crate::camera::Camera;
use crate::error::Result;
use crate::scene::Scene;

/// Scene renderer
///
/// Renders the scene's current draw calls with its currently enabled
/// lights, honoring the render masks of lights and mesh instances,
/// into `camera.render_target` (or the backbuffer when `None`).
///
/// Shared as `Arc<Mutex<dyn Renderer>>`.
pub trait Renderer: Send + Sync {
    /// Render one pass
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()>;
}
