/// Render target trait and descriptor

use std::sync::Arc;
use super::texture::Texture;

/// Descriptor for wrapping a texture into a render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderTargetDesc {
    /// Attach a depth buffer
    pub depth: bool,
    /// Attach a stencil buffer (requires depth)
    pub stencil: bool,
}

/// Render target trait
///
/// A render target draws into the color texture it was created from.
/// Destroy it with `GraphicsDevice::destroy_render_target()`; the color
/// texture stays alive and is destroyed separately.
pub trait RenderTarget: Send + Sync {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Texture receiving the color output
    fn color_texture(&self) -> &Arc<dyn Texture>;

    /// Whether a depth buffer is attached
    fn has_depth(&self) -> bool;
}
