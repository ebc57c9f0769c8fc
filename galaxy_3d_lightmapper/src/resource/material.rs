/// Resource-level material type.
///
/// A Material describes how mesh instances are shaded. Backends compile
/// one shader variant per distinct `shader_key`; the key only changes
/// when `update()` commits the pending state, so several edits can be
/// batched into a single recompilation.
///
/// Materials are shared: every mesh instance referencing the same
/// `MaterialKey` sees the same overrides.

use std::hash::{Hash, Hasher};
use rustc_hash::FxHasher;

slotmap::new_key_type! {
    /// Stable key for a material stored in a Scene
    pub struct MaterialKey;
}

// ===== SHADER CHUNKS =====

/// Named source overrides spliced into the generated shader.
///
/// `None` keeps the built-in chunk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ShaderChunks {
    /// Vertex transform (position output)
    pub transform_vs: Option<String>,
    /// Tail of the fragment stage (final color write)
    pub end_ps: Option<String>,
    /// Alpha output for blended materials
    pub output_alpha_ps: Option<String>,
    /// Alpha output for opaque materials
    pub output_alpha_opaque_ps: Option<String>,
    /// Alpha output for premultiplied materials
    pub output_alpha_premul_ps: Option<String>,
}

/// Face culling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    None,
    #[default]
    Back,
    Front,
    FrontAndBack,
}

// ===== MATERIAL =====

/// Material resource
#[derive(Debug, Clone)]
pub struct Material {
    name: String,
    chunks: ShaderChunks,
    cull: CullMode,
    force_uv1: bool,
    shader_key: u64,
    revision: u64,
    dirty: bool,
}

impl Material {
    /// Create a material with default chunks and back-face culling
    pub fn new(name: impl Into<String>) -> Self {
        let mut material = Self {
            name: name.into(),
            chunks: ShaderChunks::default(),
            cull: CullMode::default(),
            force_uv1: false,
            shader_key: 0,
            revision: 0,
            dirty: false,
        };
        material.shader_key = material.compute_shader_key();
        material
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chunks(&self) -> &ShaderChunks {
        &self.chunks
    }

    pub fn cull(&self) -> CullMode {
        self.cull
    }

    /// Whether the shader must output the second UV set even without a lightmap
    pub fn force_uv1(&self) -> bool {
        self.force_uv1
    }

    // ===== PENDING STATE =====

    /// Replace every shader chunk override (committed by `update()`)
    pub fn set_chunks(&mut self, chunks: ShaderChunks) {
        self.chunks = chunks;
        self.dirty = true;
    }

    /// Mutable access to the chunk overrides (committed by `update()`)
    pub fn chunks_mut(&mut self) -> &mut ShaderChunks {
        self.dirty = true;
        &mut self.chunks
    }

    pub fn set_cull(&mut self, cull: CullMode) {
        self.cull = cull;
        self.dirty = true;
    }

    pub fn set_force_uv1(&mut self, force_uv1: bool) {
        self.force_uv1 = force_uv1;
        self.dirty = true;
    }

    /// Whether edits are waiting for `update()`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ===== COMMIT =====

    /// Commit pending edits: recompute the shader key and bump the revision
    pub fn update(&mut self) {
        self.shader_key = self.compute_shader_key();
        self.revision += 1;
        self.dirty = false;
    }

    /// Variant key backends use to select the compiled shader
    pub fn shader_key(&self) -> u64 {
        self.shader_key
    }

    /// Number of commits so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn compute_shader_key(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.chunks.hash(&mut hasher);
        self.cull.hash(&mut hasher);
        self.force_uv1.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
