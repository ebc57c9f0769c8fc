/// Lightmapper - bake orchestrator.
///
/// Owns the lightmaps of the last bake and the camera used to render
/// them. Each `bake()` replaces the previous set of lightmaps.

use std::sync::{Arc, Mutex};
use crate::camera::{Camera, ClearOptions};
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, Texture};
use crate::renderer::Renderer;
use crate::resource::ResourceManager;
use crate::scene::{NodeKey, Scene};
use crate::{engine_debug, engine_info, engine_warn};
use super::accumulation::{bake_object, BakeContext};
use super::config::LightmapperConfig;
use super::dilation::Dilation;
use super::lock_device;
use super::sizer::{cumulative_scale, lightmap_area, lightmap_size, lightmap_texture_desc};
use super::snapshot::{unbind_lightmaps, SceneSnapshot};
use super::walker::collect_models;

/// Static lightmap baker
///
/// # Example
///
/// ```no_run
/// use std::sync::{Arc, Mutex};
/// use galaxy_3d_lightmapper::galaxy3d::{
///     GraphicsDevice, Renderer, ResourceManager, Scene,
///     lightmapper::{Lightmapper, LightmapperConfig},
/// };
///
/// fn bake_level(
///     device: Arc<Mutex<dyn GraphicsDevice>>,
///     renderer: Arc<Mutex<dyn Renderer>>,
///     scene: &mut Scene,
///     resources: &ResourceManager,
/// ) -> galaxy_3d_lightmapper::galaxy3d::Result<()> {
///     let mut lightmapper = Lightmapper::new(device, renderer, LightmapperConfig::default());
///     lightmapper.bake(scene, resources)?;
///     println!("{} lightmaps", lightmapper.lightmaps().len());
///     Ok(())
/// }
/// ```
pub struct Lightmapper {
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    renderer: Arc<Mutex<dyn Renderer>>,
    config: LightmapperConfig,
    /// Created on the first bake, re-fitted for each directional light
    camera: Option<Camera>,
    /// Lightmaps of the last bake
    lightmaps: Vec<Arc<dyn Texture>>,
}

impl Lightmapper {
    pub fn new(
        graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
        renderer: Arc<Mutex<dyn Renderer>>,
        config: LightmapperConfig,
    ) -> Self {
        Self {
            graphics_device,
            renderer,
            config,
            camera: None,
            lightmaps: Vec::new(),
        }
    }

    pub fn config(&self) -> &LightmapperConfig {
        &self.config
    }

    /// Lightmaps produced by the last bake
    pub fn lightmaps(&self) -> &[Arc<dyn Texture>] {
        &self.lightmaps
    }

    /// Bake camera, once a bake has run
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Release the lightmaps of the last bake
    ///
    /// The set is emptied even if the device reports an error; the first
    /// error is returned.
    pub fn destroy_lightmaps(&mut self) -> Result<()> {
        let lightmaps = std::mem::take(&mut self.lightmaps);
        destroy_textures(&self.graphics_device, lightmaps.iter())
    }

    /// Bake a lightmap for every lightmapped model of `scene`.
    ///
    /// Scene state touched during the bake (lights, fog, draw calls,
    /// shadow casting, materials) is restored before returning, on
    /// success and on failure. Afterwards each baked mesh instance has
    /// its `texture_lightMap` bound and the `BAKED` render mask. Lightmaps
    /// of a previous bake are unbound from every mesh instance of `scene`
    /// before being destroyed.
    ///
    /// # Errors
    ///
    /// An object whose textures cannot be allocated is skipped with a
    /// warning. Any other error stops the bake; it is returned once the
    /// scene has been restored.
    pub fn bake(&mut self, scene: &mut Scene, resources: &ResourceManager) -> Result<()> {
        let unbound = unbind_lightmaps(scene, &self.lightmaps);
        if unbound > 0 {
            engine_debug!("galaxy3d::Lightmapper", "Unbound previous lightmaps from {} mesh instances", unbound);
        }
        self.destroy_lightmaps()?;

        let collected = collect_models(scene, scene.root());
        let jobs = self.allocate_lightmaps(scene, resources, &collected.bakeable)?;

        for key in scene.draw_calls().to_vec() {
            scene.refresh_world_bounds(key);
        }

        let (snapshot, lights) = SceneSnapshot::capture(scene, &collected.all_models);
        engine_info!(
            "galaxy3d::Lightmapper",
            "Baking {} objects with {} lights",
            jobs.len(),
            lights.len()
        );

        let camera = self.camera.get_or_insert_with(create_bake_camera);
        let mut first_error: Option<Error> = None;
        let mut jobs = jobs.into_iter();

        match Dilation::new(&self.graphics_device, self.config.dilate_passes) {
            Ok(dilation) => {
                let ctx = BakeContext {
                    device: &self.graphics_device,
                    renderer: &self.renderer,
                    dilation: &dilation,
                    lights: &lights,
                };
                for (node, lightmap) in jobs.by_ref() {
                    match bake_object(&ctx, camera, scene, node, lightmap, &mut self.lightmaps) {
                        Ok(()) => {}
                        Err(err) if err.is_resource_allocation() => {
                            engine_warn!("galaxy3d::Lightmapper", "Skipped '{}': {}", node_name(scene, node), err);
                        }
                        Err(err) => {
                            first_error = Some(err);
                            break;
                        }
                    }
                }
            }
            Err(err) => first_error = Some(err),
        }

        // Lightmaps of objects the loop never reached
        let unused: Vec<Arc<dyn Texture>> = jobs.map(|(_, lightmap)| lightmap).collect();
        let _ = destroy_textures(&self.graphics_device, unused.iter());

        snapshot.restore(scene);

        match first_error {
            Some(err) => Err(err),
            None => {
                engine_info!("galaxy3d::Lightmapper", "Baked {} lightmaps", self.lightmaps.len());
                Ok(())
            }
        }
    }

    /// Size and allocate one lightmap per bakeable node
    fn allocate_lightmaps(
        &self,
        scene: &Scene,
        resources: &ResourceManager,
        bakeable: &[NodeKey],
    ) -> Result<Vec<(NodeKey, Arc<dyn Texture>)>> {
        let global = self.config.size_multiplier.unwrap_or_else(|| scene.lightmap_size_multiplier());
        let mut jobs: Vec<(NodeKey, Arc<dyn Texture>)> = Vec::with_capacity(bakeable.len());
        let mut device = lock_device(&self.graphics_device)?;

        for node in bakeable {
            let Some(model) = scene.model(*node) else { continue };
            let area = lightmap_area(model, resources);
            let scale = cumulative_scale(scene, *node);
            let size = lightmap_size(area, scale, global, self.config.max_size);

            match device.create_texture(lightmap_texture_desc(size)) {
                Ok(texture) => {
                    engine_debug!("galaxy3d::Lightmapper", "'{}': {}x{} lightmap", node_name(scene, *node), size, size);
                    jobs.push((*node, texture));
                }
                Err(err) if err.is_resource_allocation() => {
                    engine_warn!(
                        "galaxy3d::Lightmapper",
                        "Skipped '{}': {}x{} lightmap: {}",
                        node_name(scene, *node), size, size, err
                    );
                }
                Err(err) => {
                    for (_, texture) in &jobs {
                        let _ = device.destroy_texture(texture);
                    }
                    return Err(err);
                }
            }
        }

        Ok(jobs)
    }
}

/// Orthographic camera with depth-only clears; the color of the previous
/// pass must survive
fn create_bake_camera() -> Camera {
    let mut camera = Camera::new();
    camera.clear = ClearOptions { color: None, depth: Some(1.0), stencil: None };
    camera
}

fn node_name(scene: &Scene, node: NodeKey) -> &str {
    scene.node(node).map_or("<removed>", |n| n.name.as_str())
}

fn destroy_textures<'a>(
    device: &Arc<Mutex<dyn GraphicsDevice>>,
    textures: impl Iterator<Item = &'a Arc<dyn Texture>>,
) -> Result<()> {
    let mut device = lock_device(device)?;
    let mut result = Ok(());
    for texture in textures {
        if let Err(err) = device.destroy_texture(texture) {
            if result.is_ok() {
                result = Err(err);
            }
        }
    }
    result
}

#[cfg(test)]
#[path = "lightmapper_tests.rs"]
mod tests;
