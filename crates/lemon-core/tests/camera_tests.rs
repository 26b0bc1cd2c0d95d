// Host-side tests for the scroll-driven camera rig.

use glam::Vec3;
use lemon_core::*;

#[test]
fn depth_at_top_of_page_is_base_depth() {
    let rig = CameraRig::default();
    assert_eq!(rig.depth(0.0), 40.0);
    assert_eq!(rig.tilt_x(0.0), 0.0);
}

#[test]
fn depth_clamps_at_min_depth() {
    let rig = CameraRig::default();
    assert!((rig.depth(1000.0) - 10.0).abs() < 1e-4);
    assert_eq!(rig.depth(1e6), 10.0);
}

#[test]
fn depth_never_below_min_and_strictly_decreasing_before_clamp() {
    let rig = CameraRig::default();
    let threshold = rig.clamp_threshold();
    assert!((threshold - 1000.0).abs() < 1e-2);
    let mut s = 0.0f32;
    while s < 5000.0 {
        let d = rig.depth(s);
        assert!(d >= rig.min_depth);
        if s + 1.0 <= threshold - 1.0 {
            assert!(rig.depth(s + 1.0) < d, "depth not decreasing at {s}");
        }
        s += 1.0;
    }
}

#[test]
fn rapid_scroll_events_keep_only_latest_offset() {
    let rig = CameraRig::default();
    let state = [100.0, 500.0, 250.0]
        .iter()
        .fold(InputState::default(), |st, &y| st.apply(InputEvent::Scrolled(y)));
    assert_eq!(state.scroll, 250.0);
    assert!((rig.depth(state.scroll) - 32.5).abs() < 1e-4);
}

#[test]
fn tilt_grows_linearly_with_scroll() {
    let rig = CameraRig::default();
    assert!((rig.tilt_x(2000.0) - 0.2).abs() < 1e-6);
    assert!((rig.tilt_x(4000.0) - 2.0 * rig.tilt_x(2000.0)).abs() < 1e-6);
}

#[test]
fn view_matrix_moves_origin_in_front_of_camera() {
    let cam = Camera::new(CameraRig::default().pose(0.0), 1.5);
    let p = cam.view_matrix().transform_point3(Vec3::ZERO);
    assert!((p - Vec3::new(0.0, 0.0, -40.0)).length() < 1e-4);
}

#[test]
fn viewport_shrinks_as_camera_dives() {
    let rig = CameraRig::default();
    let near = Camera::new(rig.pose(800.0), 1.0).viewport();
    let far = Camera::new(rig.pose(0.0), 1.0).viewport();
    assert!(near.height < far.height);
}

#[test]
fn inverted_depth_bounds_are_rejected() {
    let rig = CameraRig {
        min_depth: 50.0,
        ..CameraRig::default()
    };
    assert!(matches!(
        rig.validate(),
        Err(ConfigError::DepthBounds { .. })
    ));
    assert!(CameraRig::default().validate().is_ok());
}
