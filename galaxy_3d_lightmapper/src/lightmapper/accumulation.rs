/// Accumulation renderer: one render pass per light into a ping-pong pair.
///
/// Pass `i` writes target `i % 2` while the mesh instances sample the
/// result of pass `i - 1` through `texture_lightMap`, so the last written
/// texture holds the sum of every light.

use std::sync::{Arc, Mutex};
use glam::Vec3;
use crate::camera::{Camera, Projection, MIN_DEPTH_RANGE};
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, RenderTarget, RenderTargetDesc, ShaderParam, Texture};
use crate::renderer::Renderer;
use crate::scene::{
    LightKey, LightType, MeshInstanceKey, NodeKey, Scene, ShaderDefs, AABB, LIGHTMAP_TEXTURE_PARAM,
};
use crate::engine_trace;
use super::dilation::Dilation;
use super::sizer::lightmap_texture_desc;
use super::snapshot::MaterialPatch;
use super::{lock_device, lock_renderer};

// ===== PING-PONG PAIR =====

/// Lightmap texture, scratch texture and a depth-less render target for each
pub struct PingPong {
    primary: Arc<dyn Texture>,
    primary_target: Arc<dyn RenderTarget>,
    scratch: Arc<dyn Texture>,
    scratch_target: Arc<dyn RenderTarget>,
}

impl PingPong {
    /// Wrap `lightmap` and allocate its scratch twin.
    ///
    /// On failure every resource, `lightmap` included, is destroyed.
    pub fn create(device: &Arc<Mutex<dyn GraphicsDevice>>, lightmap: Arc<dyn Texture>) -> Result<Self> {
        let mut device = lock_device(device)?;
        let desc = lightmap_texture_desc(lightmap.info().width).with_label("lightmap_scratch");
        let target_desc = RenderTargetDesc { depth: false, stencil: false };

        let primary_target = match device.create_render_target(&lightmap, target_desc) {
            Ok(target) => target,
            Err(err) => {
                let _ = device.destroy_texture(&lightmap);
                return Err(err);
            }
        };
        let scratch = match device.create_texture(desc) {
            Ok(texture) => texture,
            Err(err) => {
                let _ = device.destroy_render_target(primary_target);
                let _ = device.destroy_texture(&lightmap);
                return Err(err);
            }
        };
        let scratch_target = match device.create_render_target(&scratch, target_desc) {
            Ok(target) => target,
            Err(err) => {
                let _ = device.destroy_texture(&scratch);
                let _ = device.destroy_render_target(primary_target);
                let _ = device.destroy_texture(&lightmap);
                return Err(err);
            }
        };

        Ok(Self { primary: lightmap, primary_target, scratch, scratch_target })
    }

    /// Texture holding the result
    pub fn primary(&self) -> &Arc<dyn Texture> {
        &self.primary
    }

    pub fn primary_target(&self) -> &Arc<dyn RenderTarget> {
        &self.primary_target
    }

    pub fn scratch(&self) -> &Arc<dyn Texture> {
        &self.scratch
    }

    pub fn scratch_target(&self) -> &Arc<dyn RenderTarget> {
        &self.scratch_target
    }

    /// Target written by pass `pass`
    pub fn target(&self, pass: usize) -> &Arc<dyn RenderTarget> {
        if pass % 2 == 0 { &self.primary_target } else { &self.scratch_target }
    }

    /// Texture written by pass `pass`
    pub fn texture(&self, pass: usize) -> &Arc<dyn Texture> {
        if pass % 2 == 0 { &self.primary } else { &self.scratch }
    }

    /// Exchange primary and scratch roles
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.primary, &mut self.scratch);
        std::mem::swap(&mut self.primary_target, &mut self.scratch_target);
    }

    /// Clear both targets to transparent black
    pub fn clear(&self, device: &Arc<Mutex<dyn GraphicsDevice>>) -> Result<()> {
        let mut device = lock_device(device)?;
        device.clear_render_target(&self.primary_target, [0.0; 4])?;
        device.clear_render_target(&self.scratch_target, [0.0; 4])
    }

    /// Destroy both targets and the scratch texture. The primary texture survives.
    pub fn release(self, device: &Arc<Mutex<dyn GraphicsDevice>>) -> Result<()> {
        let mut device = lock_device(device)?;
        let primary = device.destroy_render_target(self.primary_target);
        let scratch = device.destroy_render_target(self.scratch_target);
        let texture = device.destroy_texture(&self.scratch);
        primary.and(scratch).and(texture)
    }
}

// ===== CAMERA FITTING =====

/// World bounds of an object: union of its refreshed mesh instance bounds.
///
/// An object without mesh instances gets a zero-size box at the origin.
pub fn object_bounds(scene: &mut Scene, mesh_instances: &[MeshInstanceKey]) -> AABB {
    mesh_instances.iter()
        .filter_map(|key| scene.refresh_world_bounds(*key))
        .reduce(|acc, aabb| acc.union(&aabb))
        .unwrap_or(AABB::ZERO)
}

/// Place an orthographic camera above `bounds`, looking down -Y,
/// so a directional light's shadow frustum sees the whole object
pub fn fit_directional_camera(camera: &mut Camera, bounds: &AABB) {
    let half_extents = bounds.half_extents();
    camera.position = bounds.center() + Vec3::new(0.0, half_extents.y, 0.0);
    camera.set_euler_angles(-90.0, 0.0, 0.0);
    camera.projection = Projection::Orthographic;
    camera.near = 0.0;
    camera.far = (half_extents.y * 2.0).max(MIN_DEPTH_RANGE);
    camera.aspect = 1.0;
    camera.ortho_height = half_extents.x.max(half_extents.z);
}

// ===== ACCUMULATION =====

/// Render every light once, each alone, into alternating targets.
///
/// Afterwards `pair.primary()` holds the accumulated result and no bake
/// light is left enabled, even when a pass fails.
pub fn accumulate_lights(
    scene: &mut Scene,
    renderer: &Arc<Mutex<dyn Renderer>>,
    camera: &mut Camera,
    lights: &[LightKey],
    bounds: &AABB,
    mesh_instances: &[MeshInstanceKey],
    pair: &mut PingPong,
) -> Result<()> {
    for key in lights {
        if let Some(light) = scene.light_mut(*key) {
            light.enabled = false;
        }
    }

    for (pass, key) in lights.iter().enumerate() {
        let Some(light) = scene.light_mut(*key) else { continue };
        light.enabled = true;
        if light.light_type == LightType::Directional {
            fit_directional_camera(camera, bounds);
        }

        camera.render_target = Some(pair.target(pass).clone());
        engine_trace!("galaxy3d::Lightmapper", "Pass {} into '{}'", pass, pair.texture(pass).info().label);

        let rendered = lock_renderer(renderer).and_then(|mut r| r.render(scene, camera));

        if rendered.is_ok() {
            let written = pair.texture(pass).clone();
            for mi_key in mesh_instances {
                if let Some(mi) = scene.mesh_instance_mut(*mi_key) {
                    mi.set_param(LIGHTMAP_TEXTURE_PARAM, ShaderParam::Texture(written.clone()));
                    mi.shader_defs.insert(ShaderDefs::LIGHTMAP);
                }
            }
        }

        if let Some(light) = scene.light_mut(*key) {
            light.enabled = false;
        }
        rendered?;
    }

    if lights.len() % 2 == 0 && !lights.is_empty() {
        pair.swap();
    }
    Ok(())
}

// ===== PER-OBJECT BAKE =====

/// Shared resources of one bake
pub struct BakeContext<'a> {
    pub device: &'a Arc<Mutex<dyn GraphicsDevice>>,
    pub renderer: &'a Arc<Mutex<dyn Renderer>>,
    pub dilation: &'a Dilation,
    pub lights: &'a [LightKey],
}

/// Bake one object into `lightmap`.
///
/// The final texture is pushed to `outputs` as soon as the mesh instances
/// reference it, so it is tracked even when a later step fails. Material
/// patches are rolled back on every path.
pub fn bake_object(
    ctx: &BakeContext<'_>,
    camera: &mut Camera,
    scene: &mut Scene,
    node: NodeKey,
    lightmap: Arc<dyn Texture>,
    outputs: &mut Vec<Arc<dyn Texture>>,
) -> Result<()> {
    let mesh_instances = scene.model(node)
        .map(|model| model.mesh_instances().to_vec())
        .unwrap_or_default();
    let bounds = object_bounds(scene, &mesh_instances);

    let mut pair = PingPong::create(ctx.device, lightmap)?;

    let patch = MaterialPatch::apply(scene, &mesh_instances);
    scene.set_draw_calls(patch.mesh_instances().to_vec());

    let result = pair.clear(ctx.device)
        .and_then(|_| accumulate_lights(
            scene, ctx.renderer, camera, ctx.lights, &bounds, patch.mesh_instances(), &mut pair,
        ))
        .and_then(|_| ctx.dilation.run(ctx.device, &pair));

    camera.render_target = None;
    patch.restore(scene, pair.primary());
    outputs.push(pair.primary().clone());

    let released = pair.release(ctx.device);
    result.and(released)
}

#[cfg(test)]
#[path = "accumulation_tests.rs"]
mod tests;
