use std::time::Duration;

use egui::{Context, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::data::location::{LocationProbe, PositionProvider, ProbeState};

/// Text surface showing the probed position or why it is missing.
pub struct LocationPanel {
    state: PanelState,
    probe: LocationProbe,
}

impl LocationPanel {
    pub fn new(probe: LocationProbe) -> Self {
        Self {
            state: PanelState::default(),
            probe,
        }
    }

    /// Issue the position query. Ignored unless the probe is idle.
    pub fn start<P: PositionProvider>(&mut self, provider: P) {
        self.probe.start(provider);
    }

    pub fn probe(&self) -> &LocationProbe {
        &self.probe
    }

    pub fn probe_mut(&mut self) -> &mut LocationProbe {
        &mut self.probe
    }
}

impl Default for LocationPanel {
    fn default() -> Self {
        Self::new(LocationProbe::new())
    }
}

impl Panel for LocationPanel {
    fn name(&self) -> &'static str {
        "Location"
    }

    fn icon(&self) -> &'static str {
        egui_phosphor::regular::MAP_PIN
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn calculate(&mut self, ctx: &Context) {
        if self.probe.poll() {
            ctx.request_repaint();
        } else if self.probe.state() == ProbeState::Pending {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn render_panel(&mut self, ui: &mut Ui) {
        match self.probe.display_text() {
            Some(text) => {
                ui.label(text);
            }
            None if self.probe.state() == ProbeState::Pending => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak("Locating…");
                });
            }
            None => {}
        }
    }
}
