//! Slopewatch crate root: re-exports and module wiring.
//!
//! A landslide monitoring dashboard built on egui/eframe. Operator-entered
//! sensor readings flow through a single pipeline:
//!
//! `SensorForm` (validate) → `SampleStore` (append) → `VisualizationSink` (chart).
//!
//! Independent of that pipeline, the dashboard runs a per-frame terrain
//! animation, binds a one-shot camera stream and shows a one-shot location
//! lookup.
//!
//! Modules:
//! - `data`: display-independent core (samples, store, form, scene, camera, location)
//! - `panels`: egui views, one per display surface
//! - `app`: the eframe application and `run_monitor`
//! - `config`: YAML-loadable configuration
//! - `error`: error taxonomy

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod panels;

pub use app::{run_monitor, MonitorApp};
pub use color_scheme::ColorScheme;
pub use config::MonitorConfig;
pub use data::chart::ChartSeries;
pub use data::input::SensorForm;
pub use data::location::{LocationProbe, Position, PositionProvider, ProbeState};
pub use data::media::{CaptureBackend, DeviceFeed, FeedState, VideoFrame, VideoStream};
pub use data::sample::{Readings, Sample, SensorKind};
pub use data::scene::{SceneAnimator, TerrainScene};
pub use data::store::{SampleStore, VisualizationSink};
pub use error::{InvalidInputError, LocationError, MediaAccessError};
