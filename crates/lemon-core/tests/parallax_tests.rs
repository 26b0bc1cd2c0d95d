// Host-side tests for the spring filter, input snapshots and panel tilt.

use glam::Vec2;
use lemon_core::*;

fn pointer_at(x: f32, y: f32) -> InputState {
    InputState::default().apply(InputEvent::PointerMoved {
        ndc: Vec2::ZERO,
        panel: Vec2::new(x, y),
    })
}

#[test]
fn default_spring_is_underdamped() {
    let cfg = SpringConfig::default();
    assert!(cfg.damping_ratio() < 1.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn spring_converges_to_target() {
    let mut s = Spring::new(SpringConfig::default(), 0.0, -10.0, 10.0);
    for _ in 0..300 {
        s.step(6.0, 1.0 / 60.0);
    }
    assert!((s.value() - 6.0).abs() < 0.01, "got {}", s.value());
}

#[test]
fn spring_output_respects_bounds_despite_overshoot() {
    let mut s = Spring::new(SpringConfig::default(), -10.0, -10.0, 10.0);
    for _ in 0..240 {
        let v = s.step(10.0, 1.0 / 60.0);
        assert!((-10.0..=10.0).contains(&v), "out of bounds: {v}");
    }
    let mut s = Spring::new(SpringConfig::default(), 0.0, -10.0, 10.0);
    for _ in 0..240 {
        let v = s.step(50.0, 1.0 / 60.0);
        assert!(v <= 10.0);
    }
}

#[test]
fn spring_caps_long_frames() {
    let mut s = Spring::new(SpringConfig::default(), 0.0, -10.0, 10.0);
    let v = s.step(10.0, 5.0);
    assert!(v > 0.0 && v < 10.0, "got {v}");
}

#[test]
fn invalid_spring_is_rejected() {
    let cfg = SpringConfig {
        stiffness: 0.0,
        ..SpringConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositive { .. })
    ));
}

#[test]
fn apply_replaces_only_named_field() {
    let s = InputState::default()
        .apply(InputEvent::Scrolled(120.0))
        .apply(InputEvent::PointerMoved {
            ndc: Vec2::new(0.5, -0.5),
            panel: Vec2::new(0.25, 0.75),
        });
    assert_eq!(s.scroll, 120.0);
    assert_eq!(s.pointer_ndc, Vec2::new(0.5, -0.5));
    assert_eq!(s.panel_pointer, Vec2::new(0.25, 0.75));
    assert_eq!(s.tilt, None);

    let t = s.apply(InputEvent::Tilted(DeviceTilt::from_degrees(15.0, 0.0)));
    assert_eq!(t.scroll, 120.0);
    assert_eq!(t.tilt, Some(DeviceTilt { pitch: 0.5, roll: 0.0 }));
}

#[test]
fn negative_or_nan_scroll_is_clamped() {
    let s = InputState::default().apply(InputEvent::Scrolled(-40.0));
    assert_eq!(s.scroll, 0.0);
    let s = s.apply(InputEvent::Scrolled(f32::NAN));
    assert_eq!(s.scroll, 0.0);
}

#[test]
fn device_tilt_clamps_to_thirty_degrees() {
    let t = DeviceTilt::from_degrees(90.0, -90.0);
    assert_eq!(t, DeviceTilt { pitch: 1.0, roll: -1.0 });
    let t = DeviceTilt::from_degrees(-15.0, 7.5);
    assert!((t.pitch + 0.5).abs() < 1e-6);
    assert!((t.roll - 0.25).abs() < 1e-6);
}

#[test]
fn pointer_targets_map_panel_corners() {
    let cfg = TiltConfig::default();
    let src = TiltSource::Pointer;
    let top_left = ParallaxController::target_for(src, &cfg, &pointer_at(0.0, 0.0));
    assert_eq!(top_left, PanelRotation { x_deg: 10.0, y_deg: -10.0 });
    let bottom_right = ParallaxController::target_for(src, &cfg, &pointer_at(1.0, 1.0));
    assert_eq!(bottom_right, PanelRotation { x_deg: -10.0, y_deg: 10.0 });
    let center = ParallaxController::target_for(src, &cfg, &pointer_at(0.5, 0.5));
    assert!(center.x_deg.abs() < 1e-6 && center.y_deg.abs() < 1e-6);
    let outside = ParallaxController::target_for(src, &cfg, &pointer_at(2.0, -1.0));
    assert_eq!(outside, PanelRotation { x_deg: 10.0, y_deg: 10.0 });
}

#[test]
fn pointer_rotation_stays_in_bounds_while_moving() {
    let cfg = TiltConfig::default();
    let mut ctl = ParallaxController::new(TiltSource::Pointer, cfg, &InputState::default());
    let path = [(0.0, 0.0), (1.0, 1.0), (-3.0, 4.0), (0.5, 0.1), (1.0, 0.0)];
    for &(x, y) in path.iter().cycle().take(50) {
        for _ in 0..6 {
            let r = ctl.step(&pointer_at(x, y), 1.0 / 60.0);
            assert!(r.x_deg.abs() <= 10.0 && r.y_deg.abs() <= 10.0, "{r:?}");
        }
    }
}

#[test]
fn controller_starts_at_initial_target() {
    let ctl = ParallaxController::new(
        TiltSource::Pointer,
        TiltConfig::default(),
        &InputState::default(),
    );
    assert_eq!(ctl.current(), PanelRotation { x_deg: 10.0, y_deg: -10.0 });
}

#[test]
fn orientation_source_maps_tilt_to_five_degrees() {
    let cfg = TiltConfig::default();
    let input = InputState::default().apply(InputEvent::Tilted(DeviceTilt::from_degrees(45.0, -15.0)));
    let r = ParallaxController::target_for(TiltSource::Orientation, &cfg, &input);
    assert!((r.x_deg - 5.0).abs() < 1e-5);
    assert!((r.y_deg + 2.5).abs() < 1e-5);

    let none = ParallaxController::target_for(TiltSource::Orientation, &cfg, &InputState::default());
    assert_eq!(none, PanelRotation::default());
}

#[test]
fn unsupported_orientation_keeps_mobile_panel_flat() {
    let cap: OrientationCapability<()> = OrientationCapability::Unsupported;
    let src = TiltSource::select(true, &cap);
    assert_eq!(src, TiltSource::Disabled);
    let input = pointer_at(0.0, 0.0).apply(InputEvent::Tilted(DeviceTilt::from_degrees(30.0, 30.0)));
    let mut ctl = ParallaxController::new(src, TiltConfig::default(), &input);
    for _ in 0..30 {
        assert_eq!(ctl.step(&input, 1.0 / 60.0), PanelRotation::default());
    }
}

#[test]
fn desktop_uses_pointer_regardless_of_orientation_support() {
    let cap: OrientationCapability<()> = OrientationCapability::Unsupported;
    assert_eq!(TiltSource::select(false, &cap), TiltSource::Pointer);
    let denied: OrientationCapability<()> = OrientationCapability::Denied;
    assert_eq!(TiltSource::select(true, &denied), TiltSource::Disabled);
    assert_eq!(denied.label(), "denied");
    let enabled = OrientationCapability::Enabled(());
    assert_eq!(TiltSource::select(true, &enabled), TiltSource::Orientation);
}

#[test]
fn desktop_skips_orientation_and_still_tilts_with_pointer() {
    assert!(!TiltSource::wants_orientation(false));
    assert!(TiltSource::wants_orientation(true));
    // A desktop that never probes reports Unsupported and keeps the pointer.
    let skipped: OrientationCapability<()> = OrientationCapability::Unsupported;
    assert_eq!(TiltSource::select(false, &skipped), TiltSource::Pointer);
}

#[test]
fn css_transform_formats_degrees() {
    let r = PanelRotation {
        x_deg: 1.0,
        y_deg: -2.5,
    };
    assert_eq!(r.css_transform(), "rotateX(1.000deg) rotateY(-2.500deg)");
}

#[test]
fn default_scene_config_validates() {
    assert!(SceneConfig::default().validate().is_ok());
}
