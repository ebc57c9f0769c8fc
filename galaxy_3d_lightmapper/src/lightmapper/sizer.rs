/// Lightmap sizing: texel resolution from area hints and world scale

use glam::Vec3;
use crate::graphics_device::{
    AddressMode, FilterMode, MipmapMode, TextureDesc, TextureEncoding, TextureFormat,
};
use crate::resource::ResourceManager;
use crate::scene::{Model, NodeKey, Scene};

/// Area hint of a model, multiplied by its own size multiplier.
///
/// A resolvable asset hint wins over the inline hint; without either the
/// area is one unit along each axis.
pub fn lightmap_area(model: &Model, resources: &ResourceManager) -> Vec3 {
    let asset_area = model.asset.as_deref()
        .and_then(|name| resources.model_asset(name))
        .and_then(|asset| asset.area());
    let area = asset_area.or(model.area).unwrap_or(Vec3::ONE);
    area * model.lightmap_size_multiplier
}

/// Product of the local scales from `node` up to the root
pub fn cumulative_scale(scene: &Scene, node: NodeKey) -> Vec3 {
    let mut scale = Vec3::ONE;
    let mut current = scene.node(node);
    while let Some(n) = current {
        scale *= n.scale;
        current = n.parent().and_then(|p| scene.node(p));
    }
    scale
}

/// Lightmap edge size: next power of two of the scaled area, clamped to `max_size`.
///
/// Degenerate inputs (zero, negative, NaN) still produce a 1x1 lightmap.
pub fn lightmap_size(area: Vec3, scale: Vec3, global_multiplier: f32, max_size: u32) -> u32 {
    let raw = area.dot(scale) * global_multiplier;
    if !raw.is_finite() || raw < 1.0 {
        return 1;
    }
    // Saturating cast: huge values clamp to u32::MAX
    let texels = raw.floor() as u32;
    texels
        .checked_next_power_of_two()
        .unwrap_or(u32::MAX)
        .min(max_size)
        .max(1)
}

/// Descriptor of a lightmap (and of its ping-pong scratch texture)
pub fn lightmap_texture_desc(size: u32) -> TextureDesc {
    TextureDesc {
        label: "lightmap".to_string(),
        width: size,
        height: size,
        format: TextureFormat::R8G8B8A8_UNORM,
        encoding: TextureEncoding::Rgbm,
        address_u: AddressMode::ClampToEdge,
        address_v: AddressMode::ClampToEdge,
        min_filter: FilterMode::Linear,
        mag_filter: FilterMode::Linear,
        mipmap: MipmapMode::None,
        render_target: true,
    }
}

#[cfg(test)]
#[path = "sizer_tests.rs"]
mod tests;
