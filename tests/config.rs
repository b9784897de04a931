use std::time::Duration;

use slopewatch::config::{CameraSource, MonitorConfig, Permission};
use slopewatch::data::location::{Position, ProbeState};
use slopewatch::data::media::{DeviceFeed, FeedState};
use slopewatch::data::scene::ROTATION_STEP;
use slopewatch::error::{ConfigError, LocationError, MediaAccessError};
use slopewatch::ColorScheme;

#[test]
fn defaults_match_documented_values() {
    let cfg = MonitorConfig::default();
    assert_eq!(cfg.title, "Landslide Monitoring");
    assert_eq!(cfg.color_scheme, ColorScheme::Dark);
    assert_eq!(cfg.animation.rotation_step, ROTATION_STEP);
    assert!(cfg.animation.autostart);
    assert_eq!(cfg.scene.plane_size, 10.0);
    assert_eq!(cfg.scene.plane_segments, 32);
    assert_eq!(cfg.scene.field_of_view_deg, 75.0);
    assert_eq!(cfg.camera.source, CameraSource::None);
    assert!(cfg.location.supported);
    assert_eq!(cfg.location.fix, None);
}

#[test]
fn partial_yaml_keeps_other_defaults() {
    let cfg = MonitorConfig::from_yaml_str(
        r#"
title: Hillside A
color_scheme: terrain
animation:
  rotation_step: 0.05
camera:
  source: test_pattern
  permission: denied
location:
  fix: { latitude: 46.8, longitude: 8.2 }
"#,
    )
    .unwrap();
    assert_eq!(cfg.title, "Hillside A");
    assert_eq!(cfg.color_scheme, ColorScheme::Terrain);
    assert_eq!(cfg.animation.rotation_step, 0.05);
    assert!(cfg.animation.autostart);
    assert_eq!(cfg.camera.source, CameraSource::TestPattern);
    assert_eq!(cfg.camera.permission, Permission::Denied);
    assert_eq!(cfg.camera.width, 320);
    assert_eq!(cfg.location.fix, Some(Position::new(46.8, 8.2)));
    assert_eq!(cfg.location.permission, Permission::Granted);
}

#[test]
fn unknown_enum_value_is_an_error() {
    assert!(MonitorConfig::from_yaml_str("color_scheme: neon\n").is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = MonitorConfig::load(std::path::Path::new("/nonexistent/slopewatch.yaml"))
        .err()
        .expect("load should fail");
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("slopewatch.yaml"));
}

#[test]
fn denied_camera_permission_wins_over_source() {
    let cfg = MonitorConfig::from_yaml_str("camera:\n  source: test_pattern\n  permission: denied\n").unwrap();
    let mut feed = DeviceFeed::new();
    feed.request(cfg.camera.backend());
    assert!(feed.wait(Duration::from_secs(5)));
    assert_eq!(
        feed.state(),
        &FeedState::Unavailable(MediaAccessError::PermissionDenied)
    );
}

#[test]
fn location_config_builds_probe_and_provider() {
    let cfg = MonitorConfig::from_yaml_str("location:\n  supported: false\n").unwrap();
    assert_eq!(cfg.location.probe().state(), ProbeState::Unsupported);

    let cfg = MonitorConfig::from_yaml_str("location:\n  permission: denied\n").unwrap();
    let mut probe = cfg.location.probe();
    probe.start(cfg.location.provider());
    assert!(probe.wait(Duration::from_secs(5)));
    assert_eq!(probe.state(), ProbeState::Failed(LocationError::PermissionDenied));
}

#[test]
fn scene_config_builds_terrain() {
    let cfg = MonitorConfig::from_yaml_str("scene:\n  plane_segments: 4\n  camera_position: [0.0, 2.0, 3.0]\n").unwrap();
    let scene = cfg.scene.build();
    assert_eq!(scene.segments, 4);
    assert_eq!(scene.size, 10.0);
    assert_eq!(scene.camera.position, glam::Vec3::new(0.0, 2.0, 3.0));
}
