/// Largest lightmap edge, in texels
pub const MAX_LIGHTMAP_SIZE: u32 = 2048;

/// Number of dilation double passes (each reads and writes both textures once)
pub const DEFAULT_DILATE_PASSES: u32 = 4;

/// Settings of a `Lightmapper`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightmapperConfig {
    /// Largest lightmap edge; computed sizes are clamped to it
    pub max_size: u32,
    /// Dilation double passes per lightmap
    pub dilate_passes: u32,
    /// Overrides the scene's `lightmap_size_multiplier` when set
    pub size_multiplier: Option<f32>,
}

impl Default for LightmapperConfig {
    fn default() -> Self {
        Self {
            max_size: MAX_LIGHTMAP_SIZE,
            dilate_passes: DEFAULT_DILATE_PASSES,
            size_multiplier: None,
        }
    }
}
