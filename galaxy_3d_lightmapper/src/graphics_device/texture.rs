/// Texture trait, texture descriptor, and texture info

use std::sync::Arc;

/// Texture pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8G8B8A8_SRGB,
    R8G8B8A8_UNORM,
    B8G8R8A8_UNORM,
    R16G16B16A16_SFLOAT,
    R32G32B32A32_SFLOAT,
}

impl TextureFormat {
    /// Size of one texel in bytes
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8G8B8A8_SRGB
            | TextureFormat::R8G8B8A8_UNORM
            | TextureFormat::B8G8R8A8_UNORM => 4,
            TextureFormat::R16G16B16A16_SFLOAT => 8,
            TextureFormat::R32G32B32A32_SFLOAT => 16,
        }
    }
}

/// How color values are stored in the texels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureEncoding {
    /// Plain linear values
    Linear,
    /// sRGB gamma-encoded values
    Srgb,
    /// High-range RGB with a shared multiplier in alpha (RGBM)
    Rgbm,
}

/// Texture coordinate addressing outside [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressMode {
    Repeat,
    ClampToEdge,
    MirroredRepeat,
}

/// Texel filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Mipmap policy at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MipmapMode {
    /// Single level, no mipmaps
    None,
    /// Generate the full chain (or up to `max_levels`)
    Generate { max_levels: Option<u32> },
}

// ===== TEXTURE DESC =====

/// Descriptor for creating a texture
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDesc {
    /// Debug label (backends may make it unique)
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Color encoding
    pub encoding: TextureEncoding,
    /// Addressing along U
    pub address_u: AddressMode,
    /// Addressing along V
    pub address_v: AddressMode,
    /// Minification filter
    pub min_filter: FilterMode,
    /// Magnification filter
    pub mag_filter: FilterMode,
    /// Mipmap policy
    pub mipmap: MipmapMode,
    /// Texture can be bound as a render target
    pub render_target: bool,
}

impl TextureDesc {
    /// Same descriptor with another label
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..self.clone()
        }
    }

    /// Number of bytes the level 0 image occupies
    pub fn byte_size(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.format.bytes_per_pixel() as u64
    }
}

// ===== TEXTURE INFO =====

/// Read-only properties of a created texture.
///
/// Returned by `Texture::info()` to query texture properties
/// without exposing backend-specific details.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureInfo {
    /// Debug label assigned by the backend
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Color encoding
    pub encoding: TextureEncoding,
    /// Number of mip levels
    pub mip_levels: u32,
}

impl TextureInfo {
    /// Build the info a backend reports for a descriptor
    pub fn from_desc(desc: &TextureDesc, label: String) -> Self {
        let mip_levels = match desc.mipmap {
            MipmapMode::None => 1,
            MipmapMode::Generate { max_levels } => {
                let full = 32 - desc.width.max(desc.height).max(1).leading_zeros();
                max_levels.map_or(full, |max| max.clamp(1, full))
            }
        };
        Self {
            label,
            width: desc.width,
            height: desc.height,
            format: desc.format,
            encoding: desc.encoding,
            mip_levels,
        }
    }
}

// ===== TEXTURE TRAIT =====

/// Texture resource trait
///
/// Implemented by backend-specific texture types.
/// GPU memory is released by `GraphicsDevice::destroy_texture()`.
pub trait Texture: Send + Sync {
    /// Get the read-only properties of this texture
    fn info(&self) -> &TextureInfo;
}

/// Identity comparison of two texture handles
pub fn same_texture(a: &Arc<dyn Texture>, b: &Arc<dyn Texture>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
