use egui::{Context, Ui};

use super::chart_ui::ChartView;
use super::panel_trait::{Panel, PanelState};
use crate::data::chart::ChartSeries;
use crate::data::input::SensorForm;
use crate::data::sample::SensorKind;
use crate::data::store::SampleStore;
use crate::error::InvalidInputError;

/// Manual sensor entry feeding the live chart.
///
/// The form is the only producer of samples and `submit` is the only path
/// into the store.
pub struct SensorsPanel {
    state: PanelState,
    form: SensorForm,
    store: SampleStore<ChartSeries>,
    chart: ChartView,
    /// Open blocking notice, if the last submission was rejected.
    notice: Option<InvalidInputError>,
}

impl Default for SensorsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::default(),
            form: SensorForm::new(),
            store: SampleStore::new(ChartSeries::new()),
            chart: ChartView::default(),
            notice: None,
        }
    }
}

impl SensorsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &SensorForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SensorForm {
        &mut self.form
    }

    pub fn store(&self) -> &SampleStore<ChartSeries> {
        &self.store
    }

    pub fn notice(&self) -> Option<&InvalidInputError> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Read the form and append the sample. On invalid input nothing is
    /// appended and the operator notice is raised.
    pub fn submit(&mut self) -> Result<(), InvalidInputError> {
        match self.form.read_sample() {
            Ok(sample) => {
                self.store.append(sample);
                Ok(())
            }
            Err(e) => {
                log::warn!("rejected sensor input: {}", e);
                self.notice = Some(e.clone());
                Err(e)
            }
        }
    }

    fn render_form(&mut self, ui: &mut Ui) {
        ui.horizontal_wrapped(|ui| {
            for kind in SensorKind::ALL {
                ui.label(format!("{}:", kind.label()));
                ui.add(
                    egui::TextEdit::singleline(self.form.field_mut(kind))
                        .hint_text(kind.placeholder())
                        .desired_width(70.0),
                );
            }
            let clicked = ui
                .add_enabled(
                    self.notice.is_none(),
                    egui::Button::new(format!(
                        "{} Simulate Sensor Data",
                        egui_phosphor::regular::PLAY
                    )),
                )
                .clicked();
            if clicked {
                let _ = self.submit();
            }
        });
        ui.small(format!("{} samples recorded", self.store.len()));
    }

    fn render_notice(&mut self, ctx: &Context) {
        let Some(err) = &self.notice else {
            return;
        };
        let text = err.notice();
        let resp = egui::Modal::new(egui::Id::new("invalid_sensor_input")).show(ctx, |ui| {
            ui.label(format!("{} {}", egui_phosphor::regular::WARNING, text));
            ui.add_space(8.0);
            ui.button("OK").clicked()
        });
        if resp.inner || resp.should_close() {
            self.dismiss_notice();
        }
    }
}

impl Panel for SensorsPanel {
    fn name(&self) -> &'static str {
        "Sensor Data"
    }

    fn icon(&self) -> &'static str {
        egui_phosphor::regular::CHART_LINE
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui) {
        self.render_form(ui);
        ui.separator();
        self.chart.show(ui, self.store.sink());
        let ctx = ui.ctx().clone();
        self.render_notice(&ctx);
    }
}
