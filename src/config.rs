//! Configuration for the monitoring dashboard.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//!
//! ```yaml
//! title: Hillside A
//! color_scheme: light
//! camera:
//!   source: test_pattern
//! location:
//!   fix: { latitude: 46.8, longitude: 8.2 }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::color_scheme::ColorScheme;
use crate::data::location::{ConfiguredPosition, LocationProbe, Position};
use crate::data::media::{CaptureBackend, DeniedCamera, NoCamera, TestPatternCamera};
use crate::data::scene::{SceneCamera, TerrainScene, ROTATION_STEP};
use crate::error::ConfigError;

/// Environment variable naming a config file when none is given on the command line.
pub const CONFIG_ENV_VAR: &str = "SLOPEWATCH_CONFIG";

/// Host permission answer for a gated capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    #[default]
    Granted,
    Denied,
}

// ─────────────────────────────────────────────────────────────────────────────
// Animation / scene
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Radians per render tick.
    pub rotation_step: f64,
    /// Start the render loop at launch.
    pub autostart: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_step: ROTATION_STEP,
            autostart: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera_position: [f32; 3],
    pub field_of_view_deg: f32,
    pub plane_size: f32,
    pub plane_segments: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let scene = TerrainScene::default();
        Self {
            camera_position: scene.camera.position.to_array(),
            field_of_view_deg: scene.camera.fov_y_deg,
            plane_size: scene.size,
            plane_segments: scene.segments,
        }
    }
}

impl SceneConfig {
    pub fn build(&self) -> TerrainScene {
        TerrainScene {
            size: self.plane_size,
            segments: self.plane_segments.max(1),
            camera: SceneCamera {
                position: self.camera_position.into(),
                fov_y_deg: self.field_of_view_deg,
                ..SceneCamera::default()
            },
            ..TerrainScene::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Camera
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraSource {
    #[default]
    None,
    TestPattern,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub source: CameraSource,
    pub permission: Permission,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let pattern = TestPatternCamera::default();
        Self {
            source: CameraSource::default(),
            permission: Permission::default(),
            width: pattern.width,
            height: pattern.height,
            fps: pattern.fps,
        }
    }
}

impl CameraConfig {
    /// Capture backend selected by this config. Permission is checked first.
    pub fn backend(&self) -> Box<dyn CaptureBackend> {
        if self.permission == Permission::Denied {
            return Box::new(DeniedCamera);
        }
        match self.source {
            CameraSource::None => Box::new(NoCamera),
            CameraSource::TestPattern => Box::new(TestPatternCamera {
                width: self.width,
                height: self.height,
                fps: self.fps,
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Location
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// `false` emulates a host with no position capability.
    pub supported: bool,
    pub permission: Permission,
    pub fix: Option<Position>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            supported: true,
            permission: Permission::default(),
            fix: None,
        }
    }
}

impl LocationConfig {
    pub fn provider(&self) -> ConfiguredPosition {
        ConfiguredPosition {
            granted: self.permission == Permission::Granted,
            fix: self.fix,
        }
    }

    /// Probe in its initial state: idle, or unsupported.
    pub fn probe(&self) -> LocationProbe {
        if self.supported {
            LocationProbe::new()
        } else {
            LocationProbe::unsupported()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MonitorConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `animation`    | Render loop step and autostart |
/// | `scene`        | Terrain placeholder geometry and camera |
/// | `camera`       | Video capture source and permission |
/// | `location`     | Position capability, permission and fix |
#[derive(Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the dashboard.
    pub headline: Option<String>,
    pub color_scheme: ColorScheme,
    pub animation: AnimationConfig,
    pub scene: SceneConfig,
    pub camera: CameraConfig,
    pub location: LocationConfig,
    /// Optional eframe native-window options.
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            title: "Landslide Monitoring".to_string(),
            headline: None,
            color_scheme: ColorScheme::default(),
            animation: AnimationConfig::default(),
            scene: SceneConfig::default(),
            camera: CameraConfig::default(),
            location: LocationConfig::default(),
            native_options: None,
        }
    }
}

impl MonitorConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    /// Load a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_yaml_str(&s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {:?}", path);
        Ok(cfg)
    }
}
