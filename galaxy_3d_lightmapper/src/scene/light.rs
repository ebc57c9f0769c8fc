/// Light component

use super::flags::RenderMask;
use super::node::NodeKey;

slotmap::new_key_type! {
    /// Stable key for a light stored in a Scene
    pub struct LightKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    Directional,
    Point,
    Spot,
}

/// When the light's shadow map is re-rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowUpdateMode {
    /// Never re-rendered
    None,
    /// Rendered once on the next frame, then frozen
    ThisFrame,
    /// Rendered every frame
    Realtime,
}

#[derive(Debug, Clone)]
pub struct Light {
    pub(crate) node: NodeKey,
    pub light_type: LightType,
    pub enabled: bool,
    pub mask: RenderMask,
    pub shadow_update_mode: ShadowUpdateMode,
}

impl Light {
    pub(crate) fn new(node: NodeKey, light_type: LightType) -> Self {
        Self {
            node,
            light_type,
            enabled: true,
            mask: RenderMask::DYNAMIC,
            shadow_update_mode: ShadowUpdateMode::Realtime,
        }
    }

    pub fn node(&self) -> NodeKey {
        self.node
    }

    /// Whether the light contributes to baked lightmaps
    pub fn is_baked(&self) -> bool {
        self.mask.contains(RenderMask::LIGHTMAP)
    }

    /// Include or exclude the light from baking
    pub fn set_baked(&mut self, baked: bool) {
        self.mask.set(RenderMask::LIGHTMAP, baked);
    }
}
