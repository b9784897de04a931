use egui::{Context, Ui};

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub visible: bool,
    pub detached: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            visible: true,
            detached: false,
        }
    }
}

/// A dashboard section bound to one display surface.
pub trait Panel {
    fn name(&self) -> &'static str;
    fn icon(&self) -> &'static str {
        ""
    }
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    /// Per-frame work, run whether or not the panel is shown.
    fn calculate(&mut self, _ctx: &Context) {}
    fn render_panel(&mut self, _ui: &mut Ui) {}

    fn heading(&self) -> String {
        let icon = self.icon();
        if icon.is_empty() {
            self.name().to_string()
        } else {
            format!("{} {}", icon, self.name())
        }
    }
}
