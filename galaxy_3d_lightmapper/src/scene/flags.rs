/// Render mask and shader define bitflags

use bitflags::bitflags;

bitflags! {
    /// Which passes a light or mesh instance participates in.
    ///
    /// A light affects a mesh instance when their masks share a bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderMask: u32 {
        /// Rendered every frame with dynamic lighting
        const DYNAMIC = 1;
        /// Lit by a baked lightmap at runtime
        const BAKED = 1 << 1;
        /// Rendered into a lightmap while baking
        const LIGHTMAP = 1 << 2;
    }
}

impl RenderMask {
    /// Every bit set: affects every pass, including unnamed bits
    pub const fn affect_all() -> Self {
        Self::from_bits_retain(u32::MAX)
    }
}

bitflags! {
    /// Features the generated shader is compiled with
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ShaderDefs: u32 {
        const SKIN = 1;
        const UV0 = 1 << 1;
        const UV1 = 1 << 2;
        const VCOLOR = 1 << 3;
        const INSTANCING = 1 << 4;
        /// Sample `texture_lightMap` for diffuse lighting
        const LIGHTMAP = 1 << 5;
    }
}
