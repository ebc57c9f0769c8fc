/// Scene graph node

use glam::{Mat4, Quat, Vec3};
use super::model::Model;

slotmap::new_key_type! {
    /// Stable key for a node stored in a Scene
    pub struct NodeKey;
}

/// A node of the scene hierarchy with a local transform
/// and an optional model component.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    /// Disabled nodes hide their whole subtree
    pub enabled: bool,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    pub(crate) model: Option<Model>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, parent: Option<NodeKey>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            parent,
            children: Vec::new(),
            model: None,
        }
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    pub fn model_mut(&mut self) -> Option<&mut Model> {
        self.model.as_mut()
    }

    /// Local transform (scale, then rotation, then translation)
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}
