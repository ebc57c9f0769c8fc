/// Tests for lightmap sizing

use glam::Vec3;
use crate::graphics_device::{AddressMode, FilterMode, MipmapMode, TextureEncoding, TextureFormat};
use crate::resource::ResourceManager;
use crate::scene::{Model, Scene};
use super::*;

// ============================================================================
// lightmap_size
// ============================================================================

#[test]
fn test_unit_area_unit_scale_gives_four() {
    assert_eq!(lightmap_size(Vec3::ONE, Vec3::ONE, 1.0, 2048), 4);
}

#[test]
fn test_exact_power_of_two_is_kept() {
    assert_eq!(lightmap_size(Vec3::new(16.0, 0.0, 0.0), Vec3::ONE, 1.0, 2048), 16);
    assert_eq!(lightmap_size(Vec3::new(17.0, 0.0, 0.0), Vec3::ONE, 1.0, 2048), 32);
}

#[test]
fn test_fraction_is_floored_before_rounding_up() {
    assert_eq!(lightmap_size(Vec3::new(4.5, 0.0, 0.0), Vec3::ONE, 1.0, 2048), 4);
}

#[test]
fn test_clamped_to_max_size() {
    assert_eq!(lightmap_size(Vec3::splat(1000.0), Vec3::splat(10.0), 1.0, 2048), 2048);
    assert_eq!(lightmap_size(Vec3::ONE, Vec3::ONE, 100.0, 64), 64);
}

#[test]
fn test_huge_values_saturate() {
    assert_eq!(lightmap_size(Vec3::new(f32::MAX, 0.0, 0.0), Vec3::ONE, 1.0, 2048), 2048);
    assert_eq!(lightmap_size(Vec3::new(f32::MAX, 0.0, 0.0), Vec3::ONE, 1.0, u32::MAX), u32::MAX);
    assert_eq!(lightmap_size(Vec3::splat(f32::INFINITY), Vec3::ONE, 1.0, 2048), 1);
}

#[test]
fn test_degenerate_inputs_give_one() {
    assert_eq!(lightmap_size(Vec3::ZERO, Vec3::ONE, 1.0, 2048), 1);
    assert_eq!(lightmap_size(Vec3::ONE, Vec3::splat(-1.0), 1.0, 2048), 1);
    assert_eq!(lightmap_size(Vec3::ONE, Vec3::ONE, f32::NAN, 2048), 1);
    assert_eq!(lightmap_size(Vec3::splat(0.1), Vec3::ONE, 1.0, 2048), 1);
}

#[test]
fn test_global_multiplier() {
    assert_eq!(lightmap_size(Vec3::ONE, Vec3::ONE, 2.0, 2048), 8);
    assert_eq!(lightmap_size(Vec3::ONE, Vec3::ONE, 0.5, 2048), 1);
}

// ============================================================================
// lightmap_area
// ============================================================================

#[test]
fn test_area_defaults_to_one() {
    let resources = ResourceManager::new();
    assert_eq!(lightmap_area(&Model::new(), &resources), Vec3::ONE);
}

#[test]
fn test_inline_area_and_multiplier() {
    let resources = ResourceManager::new();
    let mut model = Model::new();
    model.area = Some(Vec3::new(2.0, 3.0, 4.0));
    model.lightmap_size_multiplier = 2.0;
    assert_eq!(lightmap_area(&model, &resources), Vec3::new(4.0, 6.0, 8.0));
}

#[test]
fn test_asset_area_wins_over_inline() {
    let mut resources = ResourceManager::new();
    resources.create_model_asset("crate", Some(Vec3::splat(5.0))).unwrap();
    let mut model = Model::new();
    model.area = Some(Vec3::splat(2.0));
    model.asset = Some("crate".to_string());
    assert_eq!(lightmap_area(&model, &resources), Vec3::splat(5.0));
}

#[test]
fn test_unresolvable_asset_falls_back_to_inline() {
    let mut resources = ResourceManager::new();
    resources.create_model_asset("no_hint", None).unwrap();
    let mut model = Model::new();
    model.area = Some(Vec3::splat(2.0));

    model.asset = Some("no_hint".to_string());
    assert_eq!(lightmap_area(&model, &resources), Vec3::splat(2.0));

    model.asset = Some("missing".to_string());
    assert_eq!(lightmap_area(&model, &resources), Vec3::splat(2.0));
}

// ============================================================================
// cumulative_scale
// ============================================================================

#[test]
fn test_cumulative_scale_multiplies_ancestors() {
    let mut scene = Scene::new();
    let parent = scene.create_node("parent", scene.root()).unwrap();
    let child = scene.create_node("child", parent).unwrap();
    scene.node_mut(scene.root()).unwrap().scale = Vec3::splat(2.0);
    scene.node_mut(parent).unwrap().scale = Vec3::new(1.0, 3.0, 1.0);
    scene.node_mut(child).unwrap().scale = Vec3::new(0.5, 1.0, 4.0);

    assert_eq!(cumulative_scale(&scene, child), Vec3::new(1.0, 6.0, 8.0));
}

// ============================================================================
// lightmap_texture_desc
// ============================================================================

#[test]
fn test_lightmap_texture_desc() {
    let desc = lightmap_texture_desc(256);
    assert_eq!(desc.width, 256);
    assert_eq!(desc.height, 256);
    assert_eq!(desc.format, TextureFormat::R8G8B8A8_UNORM);
    assert_eq!(desc.encoding, TextureEncoding::Rgbm);
    assert_eq!(desc.address_u, AddressMode::ClampToEdge);
    assert_eq!(desc.address_v, AddressMode::ClampToEdge);
    assert_eq!(desc.min_filter, FilterMode::Linear);
    assert_eq!(desc.mag_filter, FilterMode::Linear);
    assert_eq!(desc.mipmap, MipmapMode::None);
}
