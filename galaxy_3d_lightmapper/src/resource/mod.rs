/// Resource module - CPU-side assets shared by scene objects

pub mod material;
pub mod model_asset;
pub mod resource_manager;

pub use material::{Material, MaterialKey, ShaderChunks, CullMode};
pub use model_asset::ModelAsset;
pub use resource_manager::ResourceManager;
