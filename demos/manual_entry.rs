//! Example: Full dashboard with a synthetic camera and a fixed position
//!
//! What it demonstrates
//! - Building a `MonitorConfig` in code instead of loading YAML.
//! - The test-pattern camera bound to the video surface.
//! - A configured position shown on the location surface.
//!
//! How to run
//! ```bash
//! cargo run --example manual_entry
//! ```
//! Enter four numbers and press "Simulate Sensor Data" to add a point to every series.

use slopewatch::config::{CameraSource, MonitorConfig};
use slopewatch::{run_monitor, ColorScheme, Position};

fn main() -> eframe::Result<()> {
    slopewatch::logging::init();

    let mut cfg = MonitorConfig::default();
    cfg.headline = Some("Demo slope".to_string());
    cfg.color_scheme = ColorScheme::Terrain;
    cfg.camera.source = CameraSource::TestPattern;
    cfg.location.fix = Some(Position::new(46.5197, 6.6323));

    run_monitor(cfg)
}
