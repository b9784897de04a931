//! Error taxonomy.
//!
//! Every error here is contained by the component that produces it: invalid
//! form input aborts a single append, a camera failure leaves the video surface
//! empty, and a location failure is rendered as text. None of them is fatal.

use thiserror::Error;

use crate::data::sample::SensorKind;

/// Notice shown to the operator when any sensor field is not numeric.
pub const INVALID_INPUT_NOTICE: &str = "Please enter valid numerical values for all sensors.";

/// A sensor field did not contain numeric text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} value {text:?} is not numeric")]
pub struct InvalidInputError {
    /// First field that failed to parse.
    pub field: SensorKind,
    /// Raw text found in that field.
    pub text: String,
}

impl InvalidInputError {
    /// Operator-facing notice. Same text whichever field failed.
    pub fn notice(&self) -> &'static str {
        INVALID_INPUT_NOTICE
    }
}

/// Video capture could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaAccessError {
    #[error("permission to use the camera was denied")]
    PermissionDenied,
    #[error("no video capture device is available")]
    NoDevice,
    #[error("the video capture device is in use")]
    DeviceBusy,
    #[error("{0}")]
    Other(String),
}

/// Reason a position query failed. Exactly one of four categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("User denied the request for Geolocation.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    PositionUnavailable,
    #[error("The request to get user location timed out.")]
    Timeout,
    #[error("An unknown error occurred.")]
    Unknown,
}

impl LocationError {
    /// Human-readable message for the location surface.
    pub fn message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => "User denied the request for Geolocation.",
            LocationError::PositionUnavailable => "Location information is unavailable.",
            LocationError::Timeout => "The request to get user location timed out.",
            LocationError::Unknown => "An unknown error occurred.",
        }
    }
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
