//! Retained chart data: time labels plus one value series per sensor.

use crate::data::sample::{Readings, SensorKind};
use crate::data::store::VisualizationSink;

/// Chart series retained by the visualization sink.
///
/// `labels[i]` belongs to `series[k][i]` for every sensor `k`.
#[derive(Debug, Default, Clone)]
pub struct ChartSeries {
    labels: Vec<String>,
    series: [Vec<f64>; 4],
    redraws: u64,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn series(&self, kind: SensorKind) -> &[f64] {
        &self.series[kind.index()]
    }

    /// Label for an x position, if it falls on a sample index.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return None;
        }
        self.labels.get(idx as usize).map(String::as_str)
    }

    /// Points for plotting: x is the sample index, y the reading.
    pub fn points(&self, kind: SensorKind) -> Vec<[f64; 2]> {
        self.series(kind)
            .iter()
            .enumerate()
            .map(|(i, y)| [i as f64, *y])
            .collect()
    }

    /// Total number of redraws requested since creation.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }
}

impl VisualizationSink for ChartSeries {
    fn push(&mut self, label: String, readings: &Readings) {
        self.labels.push(label);
        for kind in SensorKind::ALL {
            self.series[kind.index()].push(readings.get(kind));
        }
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}
