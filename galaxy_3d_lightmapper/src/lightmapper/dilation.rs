/// Dilation filter: grows filled texels into empty neighbours to hide UV seams

use std::sync::{Arc, Mutex};
use glam::Vec2;
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, Shader, ShaderDesc, ShaderParam};
use super::accumulation::PingPong;
use super::lock_device;
use super::shader_chunks::{DILATE_PS, FULLSCREEN_QUAD_VS};

/// Name of the dilation shader program
pub const DILATE_SHADER_NAME: &str = "lmDilate";

/// Dilation shader plus its fixed pass count
pub struct Dilation {
    shader: Arc<dyn Shader>,
    passes: u32,
}

impl Dilation {
    /// Build the dilation shader (once per bake)
    pub fn new(device: &Arc<Mutex<dyn GraphicsDevice>>, passes: u32) -> Result<Self> {
        let shader = lock_device(device)?.create_shader(ShaderDesc {
            name: DILATE_SHADER_NAME.to_string(),
            vertex_source: FULLSCREEN_QUAD_VS.to_string(),
            fragment_source: DILATE_PS.to_string(),
        })?;
        Ok(Self { shader, passes })
    }

    /// Double passes per run
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Run every double pass: primary into scratch, then scratch back into primary.
    ///
    /// The result ends in `pair.primary()`.
    pub fn run(&self, device: &Arc<Mutex<dyn GraphicsDevice>>, pair: &PingPong) -> Result<()> {
        let info = pair.primary().info();
        let pixel_offset = Vec2::new(1.0 / info.width.max(1) as f32, 1.0 / info.height.max(1) as f32);
        let mut device = lock_device(device)?;

        for _ in 0..self.passes {
            device.draw_quad_with_shader(
                pair.scratch_target(),
                &self.shader,
                &[
                    ("source", ShaderParam::Texture(pair.primary().clone())),
                    ("pixelOffset", ShaderParam::Vec2(pixel_offset)),
                ],
            )?;
            device.draw_quad_with_shader(
                pair.primary_target(),
                &self.shader,
                &[
                    ("source", ShaderParam::Texture(pair.scratch().clone())),
                    ("pixelOffset", ShaderParam::Vec2(pixel_offset)),
                ],
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dilation_tests.rs"]
mod tests;
