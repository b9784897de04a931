use std::time::Duration;

use slopewatch::config::MonitorConfig;
use slopewatch::data::location::{Position, ProbeState};
use slopewatch::data::media::FeedState;
use slopewatch::error::{LocationError, MediaAccessError};
use slopewatch::panels::Panel;
use slopewatch::{MonitorApp, SensorForm};

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn launch_starts_render_loop_and_one_shot_requests() {
    let cfg = MonitorConfig::default();
    let mut app = MonitorApp::new(&cfg);

    assert!(app.terrain.animator().is_running());

    assert!(app.video.feed_mut().wait(WAIT));
    assert_eq!(
        app.video.feed().state(),
        &FeedState::Unavailable(MediaAccessError::NoDevice)
    );

    assert!(app.location.probe_mut().wait(WAIT));
    assert_eq!(
        app.location.probe().state(),
        ProbeState::Failed(LocationError::PositionUnavailable)
    );
    assert_eq!(
        app.location.probe().display_text().as_deref(),
        Some("Location information is unavailable.")
    );
}

#[test]
fn autostart_off_leaves_animator_stopped() {
    let mut cfg = MonitorConfig::default();
    cfg.animation.autostart = false;
    let app = MonitorApp::new(&cfg);
    assert!(!app.terrain.animator().is_running());
}

#[test]
fn configured_fix_is_displayed() {
    let mut cfg = MonitorConfig::default();
    cfg.location.fix = Some(Position::new(27.7, 85.3));
    let mut app = MonitorApp::new(&cfg);
    assert!(app.location.probe_mut().wait(WAIT));
    assert_eq!(
        app.location.probe().display_text().as_deref(),
        Some("Latitude: 27.7, Longitude: 85.3")
    );
}

#[test]
fn sample_pipeline_is_independent_of_other_surfaces() {
    let mut app = MonitorApp::new(&MonitorConfig::default());
    *app.sensors.form_mut() = SensorForm::with_values("45", "10", "2", "0");
    app.sensors.submit().unwrap();
    assert_eq!(app.sensors.store().len(), 1);
    assert_eq!(app.terrain.animator().ticks(), 0);
}

#[test]
fn all_panels_start_visible_and_docked() {
    let mut app = MonitorApp::new(&MonitorConfig::default());
    let names: Vec<&str> = app.panels_mut().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Sensor Data", "Monitoring Area", "Camera", "Location"]);
    for p in app.panels_mut() {
        assert!(p.state().visible);
        assert!(!p.state().detached);
        assert!(p.heading().contains(p.name()));
    }
}
