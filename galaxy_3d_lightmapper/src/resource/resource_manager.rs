/// Central resource manager.
///
/// Stores named model assets. Scene models reference assets by name and
/// the bake resolves them here; a missing asset is not an error, the
/// model simply falls back to its own settings.

use rustc_hash::FxHashMap;
use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;
use super::model_asset::ModelAsset;

pub struct ResourceManager {
    model_assets: FxHashMap<String, ModelAsset>,
}

impl ResourceManager {
    /// Create a new empty resource manager
    pub fn new() -> Self {
        Self {
            model_assets: FxHashMap::default(),
        }
    }

    /// Register a model asset under a unique name
    pub fn create_model_asset(&mut self, name: &str, area: Option<Vec3>) -> Result<&ModelAsset> {
        if self.model_assets.contains_key(name) {
            engine_bail!("galaxy3d::ResourceManager", "Model asset '{}' already exists", name);
        }
        Ok(self.model_assets
            .entry(name.to_string())
            .or_insert_with(|| ModelAsset::new(name, area)))
    }

    pub fn model_asset(&self, name: &str) -> Option<&ModelAsset> {
        self.model_assets.get(name)
    }

    pub fn model_asset_mut(&mut self, name: &str) -> Option<&mut ModelAsset> {
        self.model_assets.get_mut(name)
    }

    /// Remove a model asset. Returns false if the name is unknown.
    pub fn remove_model_asset(&mut self, name: &str) -> bool {
        self.model_assets.remove(name).is_some()
    }

    pub fn model_asset_count(&self) -> usize {
        self.model_assets.len()
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
