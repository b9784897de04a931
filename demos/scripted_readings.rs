//! Example: Driving the sample pipeline without a window
//!
//! What it demonstrates
//! - Filling a `SensorForm` and appending through `SampleStore`.
//! - Invalid rows are rejected and never reach the chart series.
//!
//! How to run
//! ```bash
//! cargo run --example scripted_readings
//! ```

use slopewatch::{ChartSeries, SampleStore, SensorForm, SensorKind};

fn main() {
    slopewatch::logging::init();

    let rows = [
        ["45", "10", "2", "0"],
        ["47", "12", "2.5", "0.1"],
        ["abc", "10", "2", "0"],
        ["52", "30", "4", "1.2"],
    ];

    let mut store = SampleStore::new(ChartSeries::new());
    for [m, r, t, v] in rows {
        match SensorForm::with_values(m, r, t, v).read_sample() {
            Ok(sample) => store.append(sample),
            Err(e) => eprintln!("{} ({})", e.notice(), e),
        }
    }

    let chart = store.sink();
    for kind in SensorKind::ALL {
        println!("{:>13}: {:?}", kind.label(), chart.series(kind));
    }
    println!("{:>13}: {:?}", "Time", chart.labels());
}
