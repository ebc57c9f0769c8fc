//! Lightmapper module - static lightmap baking.
//!
//! A bake walks the scene, sizes and allocates one lightmap per lightmapped
//! model, switches the scene into bake mode, renders each light's
//! contribution into the lightmap through the `Renderer`, dilates the
//! result with the `GraphicsDevice`, and restores the scene.

mod accumulation;
mod config;
mod dilation;
mod lightmapper;
mod shader_chunks;
mod sizer;
mod snapshot;
mod walker;

use std::sync::{Arc, Mutex, MutexGuard};
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsDevice;
use crate::renderer::Renderer;

pub use accumulation::{
    accumulate_lights, bake_object, fit_directional_camera, object_bounds, BakeContext, PingPong,
};
pub use config::{LightmapperConfig, DEFAULT_DILATE_PASSES, MAX_LIGHTMAP_SIZE};
pub use dilation::{Dilation, DILATE_SHADER_NAME};
pub use lightmapper::Lightmapper;
pub use shader_chunks::{BAKE_LM_END_PS, DILATE_PS, EMPTY_CHUNK, FULLSCREEN_QUAD_VS, TRANSFORM_UV1_VS};
pub use sizer::{cumulative_scale, lightmap_area, lightmap_size, lightmap_texture_desc};
pub use snapshot::{unbind_lightmaps, MaterialPatch, SceneSnapshot};
pub use walker::{collect_models, CollectedModels};

pub(crate) fn lock_device(
    device: &Arc<Mutex<dyn GraphicsDevice>>,
) -> Result<MutexGuard<'_, dyn GraphicsDevice + 'static>> {
    device.lock()
        .map_err(|_| Error::BackendError("GraphicsDevice lock poisoned".to_string()))
}

pub(crate) fn lock_renderer(
    renderer: &Arc<Mutex<dyn Renderer>>,
) -> Result<MutexGuard<'_, dyn Renderer + 'static>> {
    renderer.lock()
        .map_err(|_| Error::BackendError("Renderer lock poisoned".to_string()))
}
