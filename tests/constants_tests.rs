// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use lemon_core::constants as tuning;

#[test]
#[allow(clippy::assertions_on_constants)]
fn fog_range_is_ordered_and_inside_the_camera_range() {
    assert!(FOG_NEAR > 0.0);
    assert!(FOG_NEAR < FOG_FAR);
    assert!(FOG_FAR < tuning::CAMERA_ZFAR);
    // At the closest camera the mesh centre should still be in front of the fog.
    assert!(tuning::CAMERA_MIN_DEPTH - tuning::MESH_OFFSET[2] < FOG_FAR);
}

#[test]
fn colours_are_normalized() {
    for c in MESH_COLOR.iter().chain(FOG_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c), "component {} out of range", c);
    }
    assert!(MESH_COLOR[3] > 0.0 && MESH_COLOR[3] < 1.0);
    assert_eq!(FOG_COLOR[3], 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shade_span_covers_the_wave() {
    assert!(SHADE_HEIGHT_SPAN >= lemon_core::WaveParams::default().amplitude_bound());
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        HERO_TILT_ID,
        HERO_STAGE_ID,
        CONTACTS_DESKTOP_ID,
        CONTACTS_MOBILE_ID,
        GALLERY_DESKTOP_ID,
        GALLERY_MOBILE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_tuning_is_consistent() {
    assert!(tuning::CAMERA_MIN_DEPTH < tuning::CAMERA_BASE_DEPTH);
    assert!(tuning::CAMERA_ZNEAR < tuning::CAMERA_MIN_DEPTH);
    assert!(tuning::SPRING_MAX_SUBSTEP_SEC < tuning::SPRING_MAX_DT_SEC);
    assert!(tuning::GYRO_TILT_MAX_DEG < tuning::POINTER_TILT_MAX_DEG);
}
