/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Every call is recorded as a `DeviceEvent` in a shared log so tests can
/// check ordering, targets and shader parameters after a bake.

use std::sync::{Arc, Mutex};
use glam::Vec2;
use crate::graphics_device::{
    GraphicsDevice, Texture, TextureDesc, TextureInfo, TextureFormat, TextureEncoding, RenderTarget, RenderTargetDesc,
    Shader, ShaderDesc, ShaderParam,
};
use crate::error::{Error, Result};
use crate::engine_bail;

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
}

impl MockTexture {
    pub fn new(width: u32, height: u32, label: String) -> Self {
        Self {
            info: TextureInfo {
                label,
                width,
                height,
                format: TextureFormat::R8G8B8A8_UNORM,
                encoding: TextureEncoding::Rgbm,
                mip_levels: 1,
            },
        }
    }

    fn from_desc(desc: &TextureDesc, label: String) -> Self {
        Self { info: TextureInfo::from_desc(desc, label) }
    }
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock RenderTarget
// ============================================================================

pub struct MockRenderTarget {
    pub texture: Arc<dyn Texture>,
    pub depth: bool,
}

impl MockRenderTarget {
    pub fn label(&self) -> &str {
        &self.texture.info().label
    }
}

impl RenderTarget for MockRenderTarget {
    fn width(&self) -> u32 {
        self.texture.info().width
    }

    fn height(&self) -> u32 {
        self.texture.info().height
    }

    fn color_texture(&self) -> &Arc<dyn Texture> {
        &self.texture
    }

    fn has_depth(&self) -> bool {
        self.depth
    }
}

// ============================================================================
// Mock Shader
// ============================================================================

#[derive(Debug)]
pub struct MockShader {
    pub name: String,
}

impl Shader for MockShader {
    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Recorded events
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    CreateTexture { label: String, width: u32, height: u32 },
    DestroyTexture { label: String },
    CreateRenderTarget { label: String, depth: bool },
    DestroyRenderTarget { label: String },
    Clear { target: String, color: [f32; 4] },
    CreateShader { name: String },
    DrawQuad { target: String, shader: String, source: Option<String>, pixel_offset: Option<Vec2> },
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

pub struct MockGraphicsDevice {
    pub events: Arc<Mutex<Vec<DeviceEvent>>>,
    /// Textures larger than this fail with `Error::ResourceAllocation`
    pub max_texture_size: Option<u32>,
    /// Every quad draw fails with a backend error
    pub fail_draws: bool,
    next_id: u32,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            max_texture_size: None,
            fail_draws: false,
            next_id: 0,
        }
    }

    pub fn events(&self) -> Vec<DeviceEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: DeviceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if let Some(max) = self.max_texture_size {
            if desc.width > max || desc.height > max {
                return Err(Error::ResourceAllocation(format!(
                    "texture '{}' {}x{} exceeds {}", desc.label, desc.width, desc.height, max
                )));
            }
        }
        let label = format!("{}#{}", desc.label, self.next_id);
        self.next_id += 1;
        self.record(DeviceEvent::CreateTexture { label: label.clone(), width: desc.width, height: desc.height });
        Ok(Arc::new(MockTexture::from_desc(&desc, label)))
    }

    fn destroy_texture(&mut self, texture: &Arc<dyn Texture>) -> Result<()> {
        self.record(DeviceEvent::DestroyTexture { label: texture.info().label.clone() });
        Ok(())
    }

    fn create_render_target(
        &mut self,
        texture: &Arc<dyn Texture>,
        desc: RenderTargetDesc,
    ) -> Result<Arc<dyn RenderTarget>> {
        self.record(DeviceEvent::CreateRenderTarget { label: texture.info().label.clone(), depth: desc.depth });
        Ok(Arc::new(MockRenderTarget { texture: texture.clone(), depth: desc.depth }))
    }

    fn destroy_render_target(&mut self, target: Arc<dyn RenderTarget>) -> Result<()> {
        self.record(DeviceEvent::DestroyRenderTarget { label: target.color_texture().info().label.clone() });
        Ok(())
    }

    fn clear_render_target(&mut self, target: &Arc<dyn RenderTarget>, color: [f32; 4]) -> Result<()> {
        self.record(DeviceEvent::Clear { target: target.color_texture().info().label.clone(), color });
        Ok(())
    }

    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        if desc.vertex_source.is_empty() || desc.fragment_source.is_empty() {
            engine_bail!("galaxy3d::MockGraphicsDevice", "Shader '{}' has an empty stage", desc.name);
        }
        self.record(DeviceEvent::CreateShader { name: desc.name.clone() });
        Ok(Arc::new(MockShader { name: desc.name }))
    }

    fn draw_quad_with_shader(
        &mut self,
        target: &Arc<dyn RenderTarget>,
        shader: &Arc<dyn Shader>,
        params: &[(&str, ShaderParam)],
    ) -> Result<()> {
        if self.fail_draws {
            engine_bail!("galaxy3d::MockGraphicsDevice", "Draw into '{}' failed", target.color_texture().info().label);
        }
        let mut source = None;
        let mut pixel_offset = None;
        for (name, param) in params {
            match (*name, param) {
                ("source", ShaderParam::Texture(t)) => source = Some(t.info().label.clone()),
                ("pixelOffset", ShaderParam::Vec2(v)) => pixel_offset = Some(*v),
                _ => {}
            }
        }
        self.record(DeviceEvent::DrawQuad {
            target: target.color_texture().info().label.clone(),
            shader: shader.name().to_string(),
            source,
            pixel_offset,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
