/// Scene module - node hierarchy, models, mesh instances, lights and fog

pub mod aabb;
pub mod flags;
pub mod node;
pub mod model;
pub mod mesh_instance;
pub mod light;
pub mod scene;

pub use aabb::AABB;
pub use flags::{RenderMask, ShaderDefs};
pub use node::{Node, NodeKey};
pub use model::Model;
pub use mesh_instance::{MeshInstance, MeshInstanceKey, LIGHTMAP_TEXTURE_PARAM};
pub use light::{Light, LightKey, LightType, ShadowUpdateMode};
pub use scene::{Scene, FogMode};
