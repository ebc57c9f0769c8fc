/// Model component

use glam::Vec3;
use super::mesh_instance::MeshInstanceKey;

/// Renderable component attached to a node.
///
/// Owns the ordered list of its mesh instances and the bake settings.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) mesh_instances: Vec<MeshInstanceKey>,
    /// Casts shadows at runtime
    pub cast_shadows: bool,
    /// Casts shadows while baking lightmaps
    pub cast_shadows_lightmap: bool,
    /// Receives a baked lightmap
    pub lightmapped: bool,
    /// Inline lightmap area hint (overridden by the asset's hint)
    pub area: Option<Vec3>,
    /// Name of the `ModelAsset` this model was built from
    pub asset: Option<String>,
    /// Per-model lightmap resolution multiplier
    pub lightmap_size_multiplier: f32,
}

impl Model {
    pub fn new() -> Self {
        Self {
            mesh_instances: Vec::new(),
            cast_shadows: true,
            cast_shadows_lightmap: true,
            lightmapped: false,
            area: None,
            asset: None,
            lightmap_size_multiplier: 1.0,
        }
    }

    /// Mesh instances in draw order
    pub fn mesh_instances(&self) -> &[MeshInstanceKey] {
        &self.mesh_instances
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
