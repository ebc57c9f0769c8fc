/// Mesh instance - one drawable piece of a model

use rustc_hash::FxHashMap;
use crate::graphics_device::ShaderParam;
use crate::resource::MaterialKey;
use super::aabb::AABB;
use super::flags::{RenderMask, ShaderDefs};
use super::node::NodeKey;

slotmap::new_key_type! {
    /// Stable key for a mesh instance stored in a Scene
    pub struct MeshInstanceKey;
}

/// Name of the parameter holding a mesh instance's lightmap
pub const LIGHTMAP_TEXTURE_PARAM: &str = "texture_lightMap";

/// A drawable: geometry (not modeled here) + material + per-instance state
#[derive(Debug, Clone)]
pub struct MeshInstance {
    pub(crate) node: NodeKey,
    pub material: MaterialKey,
    pub mask: RenderMask,
    pub shader_defs: ShaderDefs,
    /// Bounds in the node's local space
    pub aabb: AABB,
    pub(crate) world_aabb: AABB,
    params: FxHashMap<String, ShaderParam>,
}

impl MeshInstance {
    pub(crate) fn new(node: NodeKey, material: MaterialKey, aabb: AABB) -> Self {
        Self {
            node,
            material,
            mask: RenderMask::DYNAMIC,
            shader_defs: ShaderDefs::UV0 | ShaderDefs::UV1,
            aabb,
            world_aabb: aabb,
            params: FxHashMap::default(),
        }
    }

    pub fn node(&self) -> NodeKey {
        self.node
    }

    /// World bounds as of the last `Scene::refresh_world_bounds()`
    pub fn world_aabb(&self) -> &AABB {
        &self.world_aabb
    }

    pub fn param(&self, name: &str) -> Option<&ShaderParam> {
        self.params.get(name)
    }

    pub fn set_param(&mut self, name: &str, value: ShaderParam) {
        self.params.insert(name.to_string(), value);
    }

    pub fn remove_param(&mut self, name: &str) -> Option<ShaderParam> {
        self.params.remove(name)
    }
}
