//! Operator-entered sensor values.

use chrono::{DateTime, Local};

use crate::data::sample::{Readings, Sample, SensorKind};
use crate::error::InvalidInputError;

/// Text contents of the four sensor input fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorForm {
    fields: [String; 4],
}

impl SensorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with the given texts, in sensor order.
    pub fn with_values<S: Into<String>>(soil_moisture: S, rainfall: S, tilt: S, vibration: S) -> Self {
        Self {
            fields: [
                soil_moisture.into(),
                rainfall.into(),
                tilt.into(),
                vibration.into(),
            ],
        }
    }

    pub fn field(&self, kind: SensorKind) -> &str {
        &self.fields[kind.index()]
    }

    /// Mutable text buffer for binding to a text edit widget.
    pub fn field_mut(&mut self, kind: SensorKind) -> &mut String {
        &mut self.fields[kind.index()]
    }

    pub fn set<S: Into<String>>(&mut self, kind: SensorKind, text: S) {
        self.fields[kind.index()] = text.into();
    }

    /// Validate all four fields and build a sample stamped with the current time.
    pub fn read_sample(&self) -> Result<Sample, InvalidInputError> {
        self.read_sample_at(Local::now())
    }

    /// Like [`read_sample`](Self::read_sample) with an explicit timestamp.
    pub fn read_sample_at(&self, timestamp: DateTime<Local>) -> Result<Sample, InvalidInputError> {
        let mut values = [0.0; 4];
        for kind in SensorKind::ALL {
            values[kind.index()] = parse_reading(kind, self.field(kind))?;
        }
        let [soil_moisture, rainfall, tilt, vibration] = values;
        Ok(Sample::new(
            timestamp,
            Readings::new(soil_moisture, rainfall, tilt, vibration),
        ))
    }
}

/// Parse one field. Surrounding whitespace is ignored; NaN and infinities are rejected.
pub fn parse_reading(field: SensorKind, text: &str) -> Result<f64, InvalidInputError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InvalidInputError {
            field,
            text: text.to_string(),
        })
}
