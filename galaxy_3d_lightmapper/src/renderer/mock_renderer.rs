/// Mock Renderer for unit tests (no GPU required)
///
/// Records a snapshot of everything a real renderer would read for each
/// pass: output target, enabled lights, draw calls and the patched state
/// of every drawn mesh instance and its material.

use std::sync::{Arc, Mutex};
use glam::Vec3;
use crate::camera::{Camera, ClearOptions, Projection};
use crate::error::Result;
use crate::engine_bail;
use crate::renderer::Renderer;
use crate::resource::CullMode;
use crate::scene::{FogMode, LightKey, MeshInstanceKey, RenderMask, Scene, ShaderDefs, LIGHTMAP_TEXTURE_PARAM};

// ============================================================================
// Recorded passes
// ============================================================================

#[derive(Debug, Clone)]
pub struct MeshRecord {
    pub key: MeshInstanceKey,
    pub mask: RenderMask,
    pub shader_defs: ShaderDefs,
    /// Label of the bound lightmap texture
    pub lightmap: Option<String>,
    pub transform_vs: Option<String>,
    pub end_ps: Option<String>,
    pub output_alpha_ps: Option<String>,
    pub cull: CullMode,
    pub force_uv1: bool,
}

#[derive(Debug, Clone)]
pub struct PassRecord {
    /// Label of the color texture of the camera's target
    pub target: Option<String>,
    pub enabled_lights: Vec<LightKey>,
    /// Enabled lights whose mask matches at least one drawn mesh instance
    pub affecting_lights: Vec<LightKey>,
    pub draw_calls: Vec<MeshInstanceKey>,
    pub meshes: Vec<MeshRecord>,
    pub fog: FogMode,
    pub camera_position: Vec3,
    pub camera_forward: Vec3,
    pub projection: Projection,
    pub ortho_height: f32,
    pub near: f32,
    pub far: f32,
    pub clear: ClearOptions,
}

// ============================================================================
// Mock Renderer
// ============================================================================

pub struct MockRenderer {
    pub passes: Arc<Mutex<Vec<PassRecord>>>,
    /// Pass index (0-based) that fails with a backend error
    pub fail_on_pass: Option<usize>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            passes: Arc::new(Mutex::new(Vec::new())),
            fail_on_pass: None,
        }
    }

    pub fn passes(&self) -> Vec<PassRecord> {
        self.passes.lock().unwrap().clone()
    }
}

impl Renderer for MockRenderer {
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        let index = self.passes.lock().unwrap().len();
        if self.fail_on_pass == Some(index) {
            engine_bail!("galaxy3d::MockRenderer", "Pass {} failed", index);
        }

        let meshes: Vec<MeshRecord> = scene.draw_calls().iter()
            .filter_map(|key| {
                let mi = scene.mesh_instance(*key)?;
                let material = scene.material(mi.material)?;
                Some(MeshRecord {
                    key: *key,
                    mask: mi.mask,
                    shader_defs: mi.shader_defs,
                    lightmap: mi.param(LIGHTMAP_TEXTURE_PARAM)
                        .and_then(|p| p.as_texture())
                        .map(|t| t.info().label.clone()),
                    transform_vs: material.chunks().transform_vs.clone(),
                    end_ps: material.chunks().end_ps.clone(),
                    output_alpha_ps: material.chunks().output_alpha_ps.clone(),
                    cull: material.cull(),
                    force_uv1: material.force_uv1(),
                })
            })
            .collect();

        let enabled_lights: Vec<LightKey> = scene.lights()
            .filter(|(_, l)| l.enabled)
            .map(|(k, _)| k)
            .collect();
        let affecting_lights = enabled_lights.iter()
            .copied()
            .filter(|k| {
                scene.light(*k).is_some_and(|l| meshes.iter().any(|m| l.mask.intersects(m.mask)))
            })
            .collect();

        self.passes.lock().unwrap().push(PassRecord {
            target: camera.render_target.as_ref().map(|t| t.color_texture().info().label.clone()),
            enabled_lights,
            affecting_lights,
            draw_calls: scene.draw_calls().to_vec(),
            meshes,
            fog: scene.fog(),
            camera_position: camera.position,
            camera_forward: camera.forward(),
            projection: camera.projection,
            ortho_height: camera.ortho_height,
            near: camera.near,
            far: camera.far,
            clear: camera.clear,
        });
        Ok(())
    }
}
