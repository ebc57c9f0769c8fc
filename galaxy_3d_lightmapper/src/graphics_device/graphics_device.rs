/// GraphicsDevice trait - main interface for GPU resource creation and draws

use std::sync::Arc;
use crate::error::Result;
use super::texture::{Texture, TextureDesc};
use super::render_target::{RenderTarget, RenderTargetDesc};
use super::shader::{Shader, ShaderDesc, ShaderParam};

/// Main graphics device trait
///
/// Backend-agnostic interface to the GPU. The lightmapper only needs
/// off-screen textures, render targets wrapping them, and full-screen quad
/// draws; scene rendering goes through `Renderer`.
///
/// Shared as `Arc<Mutex<dyn GraphicsDevice>>`.
pub trait GraphicsDevice: Send + Sync {
    /// Create a texture
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceAllocation` or `Error::OutOfMemory` when the
    /// texture cannot be allocated.
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Release a texture's GPU memory
    fn destroy_texture(&mut self, texture: &Arc<dyn Texture>) -> Result<()>;

    /// Wrap a texture into a render target
    fn create_render_target(
        &mut self,
        texture: &Arc<dyn Texture>,
        desc: RenderTargetDesc,
    ) -> Result<Arc<dyn RenderTarget>>;

    /// Release a render target (its color texture is not destroyed)
    fn destroy_render_target(&mut self, target: Arc<dyn RenderTarget>) -> Result<()>;

    /// Clear a render target's color to the given RGBA value
    fn clear_render_target(&mut self, target: &Arc<dyn RenderTarget>, color: [f32; 4]) -> Result<()>;

    /// Build a shader program from source
    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn Shader>>;

    /// Draw a full-screen quad into `target` with `shader` and named parameters
    fn draw_quad_with_shader(
        &mut self,
        target: &Arc<dyn RenderTarget>,
        shader: &Arc<dyn Shader>,
        params: &[(&str, ShaderParam)],
    ) -> Result<()>;
}
