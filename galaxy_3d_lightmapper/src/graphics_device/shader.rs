/// Shader trait, shader descriptor, and shader parameters

use std::fmt;
use std::sync::Arc;
use glam::{Vec2, Vec3, Vec4};
use super::texture::Texture;

/// Descriptor for creating a shader program from source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderDesc {
    /// Program name (debug label)
    pub name: String,
    /// Vertex stage source
    pub vertex_source: String,
    /// Fragment stage source
    pub fragment_source: String,
}

/// Shader program trait
pub trait Shader: Send + Sync {
    /// Program name given at creation
    fn name(&self) -> &str;
}

// ===== SHADER PARAMETERS =====

/// A named value bound to a shader or a mesh instance
#[derive(Clone)]
pub enum ShaderParam {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Texture(Arc<dyn Texture>),
}

impl ShaderParam {
    /// Raw bytes for uniform upload (std140-compatible scalar/vector layout)
    ///
    /// Textures are bound through descriptors, not uniforms, and return `None`.
    pub fn uniform_bytes(&self) -> Option<Vec<u8>> {
        match self {
            ShaderParam::Float(v) => Some(bytemuck::bytes_of(v).to_vec()),
            ShaderParam::Vec2(v) => Some(bytemuck::bytes_of(v).to_vec()),
            ShaderParam::Vec3(v) => Some(bytemuck::bytes_of(v).to_vec()),
            ShaderParam::Vec4(v) => Some(bytemuck::bytes_of(v).to_vec()),
            ShaderParam::Texture(_) => None,
        }
    }

    /// Bound texture, if this parameter is a texture
    pub fn as_texture(&self) -> Option<&Arc<dyn Texture>> {
        match self {
            ShaderParam::Texture(texture) => Some(texture),
            _ => None,
        }
    }
}

impl fmt::Debug for ShaderParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderParam::Float(v) => f.debug_tuple("Float").field(v).finish(),
            ShaderParam::Vec2(v) => f.debug_tuple("Vec2").field(v).finish(),
            ShaderParam::Vec3(v) => f.debug_tuple("Vec3").field(v).finish(),
            ShaderParam::Vec4(v) => f.debug_tuple("Vec4").field(v).finish(),
            ShaderParam::Texture(t) => f.debug_tuple("Texture").field(&t.info().label).finish(),
        }
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
