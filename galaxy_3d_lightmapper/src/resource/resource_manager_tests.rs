/// Tests for ResourceManager

use glam::Vec3;
use super::*;

#[test]
fn test_new_is_empty() {
    let manager = ResourceManager::new();
    assert_eq!(manager.model_asset_count(), 0);
    assert!(manager.model_asset("crate").is_none());
}

#[test]
fn test_create_and_get_model_asset() {
    let mut manager = ResourceManager::new();
    let asset = manager.create_model_asset("crate", Some(Vec3::new(2.0, 1.0, 2.0))).unwrap();
    assert_eq!(asset.name(), "crate");

    let asset = manager.model_asset("crate").unwrap();
    assert_eq!(asset.area(), Some(Vec3::new(2.0, 1.0, 2.0)));
    assert_eq!(manager.model_asset_count(), 1);
}

#[test]
fn test_create_duplicate_fails() {
    let mut manager = ResourceManager::new();
    manager.create_model_asset("crate", None).unwrap();
    assert!(manager.create_model_asset("crate", Some(Vec3::ONE)).is_err());
    assert_eq!(manager.model_asset("crate").unwrap().area(), None);
}

#[test]
fn test_update_area() {
    let mut manager = ResourceManager::new();
    manager.create_model_asset("rock", None).unwrap();
    manager.model_asset_mut("rock").unwrap().set_area(Some(Vec3::splat(3.0)));
    assert_eq!(manager.model_asset("rock").unwrap().area(), Some(Vec3::splat(3.0)));
}

#[test]
fn test_remove_model_asset() {
    let mut manager = ResourceManager::new();
    manager.create_model_asset("rock", None).unwrap();
    assert!(manager.remove_model_asset("rock"));
    assert!(!manager.remove_model_asset("rock"));
    assert_eq!(manager.model_asset_count(), 0);
}
