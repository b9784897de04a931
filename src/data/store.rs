//! Append-only sample store and the sink interface it feeds.

use crate::data::chart::ChartSeries;
use crate::data::sample::{Readings, Sample};

/// Consumer of appended samples, typically a chart.
///
/// The sink retains one label and one value per series for every sample the
/// store has accepted, index-aligned with the store.
pub trait VisualizationSink {
    /// Append one label and the four readings to the retained series.
    fn push(&mut self, label: String, readings: &Readings);
    /// Reflect the retained series on the display.
    fn redraw(&mut self);
    /// Number of labels currently retained.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered, append-only sequence of samples for the session.
///
/// `append` is the only mutator. There is no capacity bound and no eviction.
#[derive(Debug, Default)]
pub struct SampleStore<S: VisualizationSink = ChartSeries> {
    samples: Vec<Sample>,
    sink: S,
}

impl<S: VisualizationSink> SampleStore<S> {
    /// Create an empty store feeding `sink`. The sink must start empty.
    pub fn new(sink: S) -> Self {
        debug_assert!(sink.is_empty(), "sink must start empty to stay aligned");
        Self {
            samples: Vec::new(),
            sink,
        }
    }

    /// Record `sample`, mirror it into the sink and trigger a redraw.
    pub fn append(&mut self, sample: Sample) {
        self.sink.push(sample.time_label(), &sample.readings);
        self.samples.push(sample);
        debug_assert_eq!(self.sink.len(), self.samples.len());
        self.sink.redraw();
        log::debug!(
            "appended sample #{} {:?}",
            self.samples.len() - 1,
            self.samples[self.samples.len() - 1].readings
        );
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Read-only access to the sink. Mutable access is not exposed so the
    /// sink cannot drift out of alignment with the store.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
