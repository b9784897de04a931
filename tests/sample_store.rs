use chrono::{Local, TimeZone};
use proptest::prelude::*;
use slopewatch::data::sample::{format_time_label, Readings, Sample, SensorKind};
use slopewatch::data::store::{SampleStore, VisualizationSink};
use slopewatch::ChartSeries;

fn sample(r: Readings) -> Sample {
    Sample::new(Local::now(), r)
}

/// Sink that records every call, for checking the store's contract.
#[derive(Default)]
struct RecordingSink {
    labels: Vec<String>,
    rows: Vec<[f64; 4]>,
    redraws: usize,
}

impl VisualizationSink for RecordingSink {
    fn push(&mut self, label: String, readings: &Readings) {
        self.labels.push(label);
        self.rows.push(readings.as_array());
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

#[test]
fn first_sample_lands_in_every_series() {
    let mut store = SampleStore::new(ChartSeries::new());
    assert_eq!(store.len(), 0);

    store.append(sample(Readings::new(45.0, 10.0, 2.0, 0.0)));

    assert_eq!(store.len(), 1);
    let chart = store.sink();
    assert_eq!(chart.labels().len(), 1);
    assert_eq!(chart.series(SensorKind::SoilMoisture), &[45.0]);
    assert_eq!(chart.series(SensorKind::Rainfall), &[10.0]);
    assert_eq!(chart.series(SensorKind::Tilt), &[2.0]);
    assert_eq!(chart.series(SensorKind::Vibration), &[0.0]);
}

#[test]
fn every_append_triggers_one_redraw() {
    let mut store = SampleStore::new(RecordingSink::default());
    for i in 0..3 {
        store.append(sample(Readings::new(i as f64, 0.0, 0.0, 0.0)));
    }
    assert_eq!(store.sink().redraws, 3);
    assert_eq!(store.sink().rows.len(), 3);
}

#[test]
fn samples_keep_arrival_order() {
    let mut store = SampleStore::new(ChartSeries::new());
    for v in [3.0, 1.0, 2.0] {
        store.append(sample(Readings::new(v, v, v, v)));
    }
    let got: Vec<f64> = store.samples().iter().map(|s| s.readings.tilt).collect();
    assert_eq!(got, vec![3.0, 1.0, 2.0]);
    assert_eq!(store.sink().series(SensorKind::Tilt), &[3.0, 1.0, 2.0]);
    assert_eq!(store.last().map(|s| s.readings.tilt), Some(2.0));
}

#[test]
fn labels_are_formatted_sample_time() {
    let ts = Local.with_ymd_and_hms(2024, 3, 9, 14, 3, 9).unwrap();
    let mut store = SampleStore::new(ChartSeries::new());
    store.append(Sample::new(ts, Readings::default()));
    assert_eq!(store.sink().labels()[0], "14:03:09");
    assert_eq!(format_time_label(&ts), "14:03:09");
    // The store keeps the instant itself, not just the label.
    assert_eq!(store.samples()[0].timestamp, ts);
}

#[test]
fn label_lookup_only_on_sample_indices() {
    let mut chart = ChartSeries::new();
    chart.push("10:00:00".into(), &Readings::default());
    chart.push("10:00:05".into(), &Readings::default());
    assert_eq!(chart.label_at(1.0), Some("10:00:05"));
    assert_eq!(chart.label_at(0.5), None);
    assert_eq!(chart.label_at(-1.0), None);
    assert_eq!(chart.label_at(2.0), None);
}

proptest! {
    #[test]
    fn append_keeps_store_and_series_aligned(
        rows in prop::collection::vec(prop::array::uniform4(-1e9f64..1e9), 1..40)
    ) {
        let mut store = SampleStore::new(ChartSeries::new());
        for (i, [a, b, c, d]) in rows.iter().copied().enumerate() {
            let before = store.len();
            store.append(sample(Readings::new(a, b, c, d)));
            prop_assert_eq!(store.len(), before + 1);
            let chart = store.sink();
            prop_assert_eq!(chart.labels().len(), store.len());
            for kind in SensorKind::ALL {
                prop_assert_eq!(chart.series(kind).len(), store.len());
                prop_assert_eq!(chart.series(kind)[i], store.samples()[i].readings.get(kind));
            }
        }
        prop_assert_eq!(store.sink().redraw_count(), rows.len() as u64);
    }
}
