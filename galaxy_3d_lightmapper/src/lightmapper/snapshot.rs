/// Snapshot and restoration of the shared scene state a bake mutates.
///
/// Records are keyed by entity, so restoration only depends on what was
/// recorded and never on the order or filtering of scene collections.
/// Entities removed from the scene in the meantime are skipped.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::graphics_device::{same_texture, ShaderParam, Texture};
use crate::resource::{CullMode, MaterialKey, ShaderChunks};
use crate::scene::{
    FogMode, LightKey, LightType, MeshInstanceKey, NodeKey, RenderMask, Scene, ShaderDefs,
    ShadowUpdateMode, LIGHTMAP_TEXTURE_PARAM,
};
use super::shader_chunks::{BAKE_LM_END_PS, EMPTY_CHUNK, TRANSFORM_UV1_VS};

// ===== SCENE SNAPSHOT =====

/// Original state of a light taking part in the bake
#[derive(Debug, Clone, Copy, PartialEq)]
struct BakeLightState {
    mask: RenderMask,
    shadow_update_mode: ShadowUpdateMode,
}

/// Scene-level state recorded before a bake
#[derive(Debug)]
pub struct SceneSnapshot {
    bake_lights: FxHashMap<LightKey, BakeLightState>,
    light_enabled: FxHashMap<LightKey, bool>,
    cast_shadows: FxHashMap<NodeKey, bool>,
    draw_calls: Vec<MeshInstanceKey>,
    fog: FogMode,
}

impl SceneSnapshot {
    /// Record scene state, then switch the scene to bake mode.
    ///
    /// Returns the snapshot and the lights to bake, in scene order.
    /// Every light ends up disabled, fog is off, models cast shadows
    /// according to their bake setting, and stale lightmap state is
    /// cleared from every mesh instance of `all_models`.
    pub fn capture(scene: &mut Scene, all_models: &[NodeKey]) -> (Self, Vec<LightKey>) {
        let mut snapshot = Self {
            bake_lights: FxHashMap::default(),
            light_enabled: FxHashMap::default(),
            cast_shadows: FxHashMap::default(),
            draw_calls: scene.draw_calls().to_vec(),
            fog: scene.fog(),
        };
        let mut lights = Vec::new();

        let keys = scene.light_keys().to_vec();
        for key in keys {
            let Some(light) = scene.light_mut(key) else { continue };
            if light.enabled && light.mask.contains(RenderMask::LIGHTMAP) {
                snapshot.bake_lights.insert(key, BakeLightState {
                    mask: light.mask,
                    shadow_update_mode: light.shadow_update_mode,
                });
                light.mask = RenderMask::affect_all();
                light.shadow_update_mode = match light.light_type {
                    LightType::Directional => ShadowUpdateMode::Realtime,
                    LightType::Point | LightType::Spot => ShadowUpdateMode::ThisFrame,
                };
                lights.push(key);
            }
            snapshot.light_enabled.insert(key, light.enabled);
            light.enabled = false;
        }

        scene.set_fog(FogMode::None);

        for node in all_models {
            let Some(model) = scene.model_mut(*node) else { continue };
            snapshot.cast_shadows.insert(*node, model.cast_shadows);
            model.cast_shadows = model.cast_shadows_lightmap;

            let mesh_instances = model.mesh_instances().to_vec();
            for key in mesh_instances {
                if let Some(mi) = scene.mesh_instance_mut(key) {
                    mi.shader_defs.remove(ShaderDefs::LIGHTMAP);
                    mi.mask.insert(RenderMask::DYNAMIC);
                    mi.mask.remove(RenderMask::BAKED | RenderMask::LIGHTMAP);
                }
            }
        }

        (snapshot, lights)
    }

    /// Number of lights recorded as taking part in the bake
    pub fn bake_light_count(&self) -> usize {
        self.bake_lights.len()
    }

    /// Put every recorded value back
    pub fn restore(self, scene: &mut Scene) {
        for (node, cast_shadows) in &self.cast_shadows {
            if let Some(model) = scene.model_mut(*node) {
                model.cast_shadows = *cast_shadows;
            }
        }

        for (key, state) in &self.bake_lights {
            if let Some(light) = scene.light_mut(*key) {
                light.mask = state.mask;
                light.shadow_update_mode = state.shadow_update_mode;
            }
        }

        for (key, enabled) in &self.light_enabled {
            if let Some(light) = scene.light_mut(*key) {
                light.enabled = *enabled;
            }
        }

        scene.set_draw_calls(self.draw_calls);
        scene.set_fog(self.fog);
    }
}

// ===== LIGHTMAP UNBINDING =====

/// Detach `lightmaps` from every mesh instance of the scene that binds one.
///
/// Such mesh instances lose their `texture_lightMap` parameter and the
/// `LIGHTMAP` define, and go back to dynamic lighting. Returns the number
/// of mesh instances unbound.
pub fn unbind_lightmaps(scene: &mut Scene, lightmaps: &[Arc<dyn Texture>]) -> usize {
    if lightmaps.is_empty() {
        return 0;
    }

    let mut unbound = 0;
    for (_, mi) in scene.mesh_instances_mut() {
        let bound = mi.param(LIGHTMAP_TEXTURE_PARAM)
            .and_then(ShaderParam::as_texture)
            .is_some_and(|texture| lightmaps.iter().any(|lm| same_texture(texture, lm)));
        if !bound {
            continue;
        }
        mi.remove_param(LIGHTMAP_TEXTURE_PARAM);
        mi.shader_defs.remove(ShaderDefs::LIGHTMAP);
        mi.mask.remove(RenderMask::BAKED | RenderMask::LIGHTMAP);
        mi.mask.insert(RenderMask::DYNAMIC);
        unbound += 1;
    }
    unbound
}

// ===== MATERIAL PATCH =====

/// Material state of one mesh instance use
#[derive(Debug, Clone)]
struct MaterialUse {
    material: MaterialKey,
    chunks: ShaderChunks,
    cull: CullMode,
    force_uv1: bool,
}

/// Bake-time patch of the mesh instances of one object and their materials.
///
/// Every use is recorded before any material is touched, so mesh instances
/// sharing a material all record the original values and restoring them
/// in any order yields the original material.
#[derive(Debug)]
pub struct MaterialPatch {
    order: Vec<MeshInstanceKey>,
    uses: FxHashMap<MeshInstanceKey, MaterialUse>,
}

impl MaterialPatch {
    /// Record, then patch mesh instances to render their UV1 layout into a lightmap
    pub fn apply(scene: &mut Scene, mesh_instances: &[MeshInstanceKey]) -> Self {
        let mut patch = Self {
            order: Vec::with_capacity(mesh_instances.len()),
            uses: FxHashMap::default(),
        };

        for key in mesh_instances {
            let Some(mi) = scene.mesh_instance(*key) else { continue };
            let Some(material) = scene.material(mi.material) else { continue };
            patch.order.push(*key);
            patch.uses.insert(*key, MaterialUse {
                material: mi.material,
                chunks: material.chunks().clone(),
                cull: material.cull(),
                force_uv1: material.force_uv1(),
            });
        }

        for key in &patch.order {
            let Some(material_key) = patch.uses.get(key).map(|u| u.material) else { continue };
            if let Some(mi) = scene.mesh_instance_mut(*key) {
                mi.shader_defs.remove(ShaderDefs::LIGHTMAP);
                mi.mask = RenderMask::LIGHTMAP;
            }
            if let Some(material) = scene.material_mut(material_key) {
                let chunks = material.chunks_mut();
                chunks.transform_vs = Some(TRANSFORM_UV1_VS.to_string());
                chunks.end_ps = Some(BAKE_LM_END_PS.to_string());
                chunks.output_alpha_ps = Some(EMPTY_CHUNK.to_string());
                chunks.output_alpha_opaque_ps = Some(EMPTY_CHUNK.to_string());
                chunks.output_alpha_premul_ps = Some(EMPTY_CHUNK.to_string());
                material.set_cull(CullMode::None);
                material.set_force_uv1(true);
                material.update();
            }
        }

        patch
    }

    /// Patched mesh instances, in the order given to `apply`
    pub fn mesh_instances(&self) -> &[MeshInstanceKey] {
        &self.order
    }

    /// Roll materials back, switch the mesh instances to baked lighting
    /// and bind their final lightmap
    pub fn restore(self, scene: &mut Scene, lightmap: &Arc<dyn Texture>) {
        for key in &self.order {
            let Some(record) = self.uses.get(key) else { continue };
            if let Some(mi) = scene.mesh_instance_mut(*key) {
                mi.mask = RenderMask::BAKED;
                mi.set_param(LIGHTMAP_TEXTURE_PARAM, ShaderParam::Texture(lightmap.clone()));
            }
            if let Some(material) = scene.material_mut(record.material) {
                material.set_chunks(record.chunks.clone());
                material.set_cull(record.cull);
                material.set_force_uv1(record.force_uv1);
                material.update();
            }
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
