//! Integration tests for bake logging
//!
//! Route the global logger to a capture sink and check what a bake reports.
//! No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests


use bake_test_utils::TestBackend;
use galaxy_3d_lightmapper::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use galaxy_3d_lightmapper::galaxy3d::lightmapper::{Lightmapper, LightmapperConfig};
use galaxy_3d_lightmapper::galaxy3d::resource::Material;
use galaxy_3d_lightmapper::galaxy3d::scene::{LightType, Model, AABB};
use galaxy_3d_lightmapper::galaxy3d::{Engine, ResourceManager, Scene};
use galaxy_3d_lightmapper::glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn lightmapper_entries(entries: &Arc<Mutex<Vec<LogEntry>>>) -> Vec<LogEntry> {
    entries.lock().unwrap()
        .iter()
        .filter(|e| e.source == "galaxy3d::Lightmapper")
        .cloned()
        .collect()
}

fn scene_with_objects(names: &[&str]) -> Scene {
    let mut scene = Scene::new();
    let root = scene.root();
    for name in names {
        let node = scene.create_node(name, root).unwrap();
        let mut model = Model::new();
        model.lightmapped = true;
        scene.add_model(node, model).unwrap();
        let material = scene.create_material(Material::new(*name));
        scene.add_mesh_instance(node, material, AABB { min: Vec3::splat(-1.0), max: Vec3::splat(1.0) }).unwrap();
    }
    let light = scene.create_light(root, LightType::Point).unwrap();
    scene.light_mut(light).unwrap().set_baked(true);
    scene
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_bake_reports_progress() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let backend = TestBackend::new();
    let mut scene = scene_with_objects(&["crate_a", "crate_b"]);
    let mut lightmapper = Lightmapper::new(backend.device(), backend.renderer(), LightmapperConfig::default());
    lightmapper.bake(&mut scene, &ResourceManager::new()).unwrap();

    Engine::reset_logger();

    let ours = lightmapper_entries(&entries);
    assert!(ours.iter().any(|e| e.severity == LogSeverity::Info && e.message == "Baking 2 objects with 1 lights"));
    assert!(ours.iter().any(|e| e.severity == LogSeverity::Info && e.message == "Baked 2 lightmaps"));
    let traces = ours.iter().filter(|e| e.severity == LogSeverity::Trace).count();
    assert_eq!(traces, 2);
}

#[test]
#[serial]
fn test_integration_skipped_object_is_a_warning() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let backend = TestBackend::new();
    backend.device.lock().unwrap().max_texture_size = 1;
    let mut scene = scene_with_objects(&["oversized_pillar"]);
    let mut lightmapper = Lightmapper::new(backend.device(), backend.renderer(), LightmapperConfig::default());
    lightmapper.bake(&mut scene, &ResourceManager::new()).unwrap();

    Engine::reset_logger();

    assert!(lightmapper.lightmaps().is_empty());
    let warnings: Vec<LogEntry> = lightmapper_entries(&entries)
        .into_iter()
        .filter(|e| e.severity == LogSeverity::Warn)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("oversized_pillar"));
}

#[test]
#[serial]
fn test_integration_min_severity_hides_pass_traces() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::set_min_severity(LogSeverity::Info);

    let backend = TestBackend::new();
    let mut scene = scene_with_objects(&["crate"]);
    let mut lightmapper = Lightmapper::new(backend.device(), backend.renderer(), LightmapperConfig::default());
    lightmapper.bake(&mut scene, &ResourceManager::new()).unwrap();

    Engine::set_min_severity(LogSeverity::Trace);
    Engine::reset_logger();

    let ours = lightmapper_entries(&entries);
    assert!(!ours.is_empty());
    assert!(ours.iter().all(|e| e.severity >= LogSeverity::Info));
}
