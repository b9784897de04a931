//! Sample data model: one timestamped set of four sensor readings.

use std::fmt;

use chrono::{DateTime, Local};
use egui::Color32;

/// The four monitored sensors, in chart series order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    SoilMoisture,
    Rainfall,
    Tilt,
    Vibration,
}

impl SensorKind {
    /// All sensors in series order. Series index `i` belongs to `ALL[i]`.
    pub const ALL: [SensorKind; 4] = [
        SensorKind::SoilMoisture,
        SensorKind::Rainfall,
        SensorKind::Tilt,
        SensorKind::Vibration,
    ];

    /// Position of this sensor's series in the chart.
    pub fn index(self) -> usize {
        match self {
            SensorKind::SoilMoisture => 0,
            SensorKind::Rainfall => 1,
            SensorKind::Tilt => 2,
            SensorKind::Vibration => 3,
        }
    }

    /// Series label shown in the legend and tooltips.
    pub fn label(self) -> &'static str {
        match self {
            SensorKind::SoilMoisture => "Soil Moisture",
            SensorKind::Rainfall => "Rainfall",
            SensorKind::Tilt => "Tilt",
            SensorKind::Vibration => "Vibration",
        }
    }

    /// Line color of the series.
    pub fn color(self) -> Color32 {
        match self {
            SensorKind::SoilMoisture => Color32::BLUE,
            SensorKind::Rainfall => Color32::from_rgb(0, 128, 0),
            SensorKind::Tilt => Color32::RED,
            SensorKind::Vibration => Color32::from_rgb(255, 165, 0),
        }
    }

    /// Hint text for the input field.
    pub fn placeholder(self) -> &'static str {
        match self {
            SensorKind::SoilMoisture => "Soil moisture",
            SensorKind::Rainfall => "Rainfall",
            SensorKind::Tilt => "Tilt",
            SensorKind::Vibration => "Vibration",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four numeric readings of a sample. Units and ranges are unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    pub soil_moisture: f64,
    pub rainfall: f64,
    pub tilt: f64,
    pub vibration: f64,
}

impl Readings {
    pub fn new(soil_moisture: f64, rainfall: f64, tilt: f64, vibration: f64) -> Self {
        Self {
            soil_moisture,
            rainfall,
            tilt,
            vibration,
        }
    }

    /// Reading for a given sensor.
    pub fn get(&self, kind: SensorKind) -> f64 {
        match kind {
            SensorKind::SoilMoisture => self.soil_moisture,
            SensorKind::Rainfall => self.rainfall,
            SensorKind::Tilt => self.tilt,
            SensorKind::Vibration => self.vibration,
        }
    }

    /// Readings in series order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.soil_moisture, self.rainfall, self.tilt, self.vibration]
    }
}

/// One ingested set of readings plus the instant it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Local>,
    pub readings: Readings,
}

impl Sample {
    pub fn new(timestamp: DateTime<Local>, readings: Readings) -> Self {
        Self {
            timestamp,
            readings,
        }
    }

    /// Display label for the chart's time axis.
    pub fn time_label(&self) -> String {
        format_time_label(&self.timestamp)
    }
}

/// Local wall-clock time as `HH:MM:SS`.
pub fn format_time_label(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M:%S").to_string()
}
