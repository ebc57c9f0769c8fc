/// Tests for Material

use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_material_defaults() {
    let material = Material::new("crate");
    assert_eq!(material.name(), "crate");
    assert_eq!(material.chunks(), &ShaderChunks::default());
    assert_eq!(material.cull(), CullMode::Back);
    assert!(!material.force_uv1());
    assert!(!material.is_dirty());
    assert_eq!(material.revision(), 0);
}

// ============================================================================
// Commit
// ============================================================================

#[test]
fn test_edits_are_pending_until_update() {
    let mut material = Material::new("crate");
    let key = material.shader_key();

    material.set_cull(CullMode::None);
    assert!(material.is_dirty());
    assert_eq!(material.shader_key(), key);

    material.update();
    assert!(!material.is_dirty());
    assert_ne!(material.shader_key(), key);
    assert_eq!(material.revision(), 1);
}

#[test]
fn test_shader_key_depends_on_chunks() {
    let mut a = Material::new("a");
    let mut b = Material::new("b");
    assert_eq!(a.shader_key(), b.shader_key());

    a.chunks_mut().end_ps = Some("gl_FragColor = vec4(1.0);".to_string());
    a.update();
    b.update();
    assert_ne!(a.shader_key(), b.shader_key());
}

#[test]
fn test_restoring_state_restores_key() {
    let mut material = Material::new("floor");
    let original_chunks = material.chunks().clone();
    let original_key = material.shader_key();

    material.chunks_mut().transform_vs = Some("uv1".to_string());
    material.set_force_uv1(true);
    material.update();
    assert_ne!(material.shader_key(), original_key);

    material.set_chunks(original_chunks);
    material.set_force_uv1(false);
    material.update();
    assert_eq!(material.shader_key(), original_key);
    assert_eq!(material.revision(), 2);
}
