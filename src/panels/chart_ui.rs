use egui::Ui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

use crate::data::chart::ChartSeries;
use crate::data::sample::SensorKind;

/// Line chart of the four sensor series against their time labels.
#[derive(Default)]
pub struct ChartView {
    seen_redraws: u64,
}

impl ChartView {
    pub fn show(&mut self, ui: &mut Ui, chart: &ChartSeries) {
        let mut plot = Plot::new("sensor_chart")
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_label("Time")
            .y_axis_label("Sensor Values")
            .include_y(0.0)
            .allow_scroll(false)
            .x_axis_formatter(|mark, _range| {
                chart.label_at(mark.value).unwrap_or_default().to_string()
            })
            .label_formatter(|name, value| {
                if name.is_empty() {
                    return String::new();
                }
                match chart.label_at(value.x) {
                    Some(t) => format!("{}: {}\n{}", name, value.y, t),
                    None => format!("{}: {}", name, value.y),
                }
            });

        // Re-fit the view whenever the sink was asked to redraw.
        if chart.redraw_count() != self.seen_redraws {
            self.seen_redraws = chart.redraw_count();
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| {
            for kind in SensorKind::ALL {
                let line = Line::new(kind.label(), PlotPoints::from(chart.points(kind)))
                    .color(kind.color())
                    .width(2.0);
                plot_ui.line(line);
            }
        });
    }
}
