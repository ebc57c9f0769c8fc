/// Scene - node hierarchy plus the entities hanging off it.
///
/// Uses SlotMaps for O(1) insert/remove with stable keys, so a bake can
/// record per-entity state and find the same entities again afterwards.

use slotmap::SlotMap;
use glam::Mat4;
use crate::error::Result;
use crate::engine_bail;
use crate::resource::{Material, MaterialKey};
use super::aabb::AABB;
use super::light::{Light, LightKey, LightType};
use super::mesh_instance::{MeshInstance, MeshInstanceKey};
use super::model::Model;
use super::node::{Node, NodeKey};

/// Scene fog
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FogMode {
    None,
    Linear { start: f32, end: f32 },
    Exp { density: f32 },
    Exp2 { density: f32 },
}

/// A scene: nodes, models, mesh instances, materials, lights, fog and
/// the list of mesh instances the renderer draws.
pub struct Scene {
    nodes: SlotMap<NodeKey, Node>,
    root: NodeKey,
    mesh_instances: SlotMap<MeshInstanceKey, MeshInstance>,
    materials: SlotMap<MaterialKey, Material>,
    lights: SlotMap<LightKey, Light>,
    /// Light keys in creation order
    light_order: Vec<LightKey>,
    /// Mesh instances the renderer draws, in order
    draw_calls: Vec<MeshInstanceKey>,
    fog: FogMode,
    lightmap_size_multiplier: f32,
}

impl Scene {
    /// Create an empty scene with a root node
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new("root", None));
        Self {
            nodes,
            root,
            mesh_instances: SlotMap::with_key(),
            materials: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            light_order: Vec::new(),
            draw_calls: Vec::new(),
            fog: FogMode::None,
            lightmap_size_multiplier: 1.0,
        }
    }

    // ===== NODES =====

    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Create a node as the last child of `parent`
    pub fn create_node(&mut self, name: &str, parent: NodeKey) -> Result<NodeKey> {
        if !self.nodes.contains_key(parent) {
            engine_bail!("galaxy3d::Scene", "Cannot create node '{}': parent not found", name);
        }
        let key = self.nodes.insert(Node::new(name, Some(parent)));
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(key);
        }
        Ok(key)
    }

    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// World transform of a node (identity for an unknown key)
    pub fn world_matrix(&self, key: NodeKey) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(key);
        while let Some(node) = current.and_then(|k| self.nodes.get(k)) {
            matrix = node.local_matrix() * matrix;
            current = node.parent;
        }
        matrix
    }

    // ===== MODELS & MESH INSTANCES =====

    /// Attach a model component to a node (replaces an existing one)
    pub fn add_model(&mut self, node: NodeKey, model: Model) -> Result<()> {
        match self.nodes.get_mut(node) {
            Some(n) => {
                n.model = Some(model);
                Ok(())
            }
            None => engine_bail!("galaxy3d::Scene", "Cannot add model: node not found"),
        }
    }

    pub fn model(&self, node: NodeKey) -> Option<&Model> {
        self.nodes.get(node).and_then(|n| n.model.as_ref())
    }

    pub fn model_mut(&mut self, node: NodeKey) -> Option<&mut Model> {
        self.nodes.get_mut(node).and_then(|n| n.model.as_mut())
    }

    /// Create a mesh instance on a node's model and append it to the draw calls
    pub fn add_mesh_instance(
        &mut self,
        node: NodeKey,
        material: MaterialKey,
        aabb: AABB,
    ) -> Result<MeshInstanceKey> {
        if !self.materials.contains_key(material) {
            engine_bail!("galaxy3d::Scene", "Cannot add mesh instance: material not found");
        }
        if self.model(node).is_none() {
            engine_bail!("galaxy3d::Scene", "Cannot add mesh instance: node has no model");
        }
        let key = self.mesh_instances.insert(MeshInstance::new(node, material, aabb));
        if let Some(model) = self.model_mut(node) {
            model.mesh_instances.push(key);
        }
        self.draw_calls.push(key);
        self.refresh_world_bounds(key);
        Ok(key)
    }

    pub fn mesh_instance(&self, key: MeshInstanceKey) -> Option<&MeshInstance> {
        self.mesh_instances.get(key)
    }

    pub fn mesh_instance_mut(&mut self, key: MeshInstanceKey) -> Option<&mut MeshInstance> {
        self.mesh_instances.get_mut(key)
    }

    /// Every mesh instance of the scene, in storage order
    pub fn mesh_instances_mut(&mut self) -> impl Iterator<Item = (MeshInstanceKey, &mut MeshInstance)> + '_ {
        self.mesh_instances.iter_mut()
    }

    /// Recompute a mesh instance's world bounds from its node's current transform
    pub fn refresh_world_bounds(&mut self, key: MeshInstanceKey) -> Option<AABB> {
        let node = self.mesh_instances.get(key)?.node;
        let world = self.world_matrix(node);
        let mesh_instance = self.mesh_instances.get_mut(key)?;
        mesh_instance.world_aabb = mesh_instance.aabb.transformed(&world);
        Some(mesh_instance.world_aabb)
    }

    // ===== MATERIALS =====

    pub fn create_material(&mut self, material: Material) -> MaterialKey {
        self.materials.insert(material)
    }

    pub fn material(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.get(key)
    }

    pub fn material_mut(&mut self, key: MaterialKey) -> Option<&mut Material> {
        self.materials.get_mut(key)
    }

    // ===== LIGHTS =====

    /// Create a light on a node
    pub fn create_light(&mut self, node: NodeKey, light_type: LightType) -> Result<LightKey> {
        if !self.nodes.contains_key(node) {
            engine_bail!("galaxy3d::Scene", "Cannot create light: node not found");
        }
        let key = self.lights.insert(Light::new(node, light_type));
        self.light_order.push(key);
        Ok(key)
    }

    /// Remove a light. Returns false if the key is invalid.
    pub fn remove_light(&mut self, key: LightKey) -> bool {
        if self.lights.remove(key).is_some() {
            self.light_order.retain(|k| *k != key);
            true
        } else {
            false
        }
    }

    pub fn light(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key)
    }

    pub fn light_mut(&mut self, key: LightKey) -> Option<&mut Light> {
        self.lights.get_mut(key)
    }

    /// Light keys in creation order
    pub fn light_keys(&self) -> &[LightKey] {
        &self.light_order
    }

    /// Lights in creation order
    pub fn lights(&self) -> impl Iterator<Item = (LightKey, &Light)> + '_ {
        self.light_order.iter().filter_map(|k| self.lights.get(*k).map(|l| (*k, l)))
    }

    // ===== RENDER STATE =====

    /// Mesh instances the renderer draws, in order
    pub fn draw_calls(&self) -> &[MeshInstanceKey] {
        &self.draw_calls
    }

    pub fn set_draw_calls(&mut self, draw_calls: Vec<MeshInstanceKey>) {
        self.draw_calls = draw_calls;
    }

    pub fn fog(&self) -> FogMode {
        self.fog
    }

    pub fn set_fog(&mut self, fog: FogMode) {
        self.fog = fog;
    }

    /// Scene-wide lightmap resolution multiplier
    pub fn lightmap_size_multiplier(&self) -> f32 {
        self.lightmap_size_multiplier
    }

    pub fn set_lightmap_size_multiplier(&mut self, multiplier: f32) {
        self.lightmap_size_multiplier = multiplier;
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
