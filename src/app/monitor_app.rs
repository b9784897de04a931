//! Standalone dashboard application.
//!
//! [`MonitorApp`] owns one panel per display surface and implements
//! [`eframe::App`]. Construction performs the launch-time side effects: the
//! render loop starts, the camera is requested and the location is probed.
//! Each frame then:
//!
//! 1. runs every panel's per-frame work (poll one-shot results, tick the scene),
//! 2. lays out the docked panels and any detached windows.

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::MonitorConfig;
use crate::data::scene::SceneAnimator;
use crate::panels::{LocationPanel, Panel, SensorsPanel, TerrainPanel, VideoPanel};

pub struct MonitorApp {
    pub sensors: SensorsPanel,
    pub terrain: TerrainPanel,
    pub video: VideoPanel,
    pub location: LocationPanel,

    /// Optional heading text shown in the top bar.
    pub headline: Option<String>,
    pub color_scheme: ColorScheme,
    color_scheme_applied: bool,
}

impl MonitorApp {
    pub fn new(cfg: &MonitorConfig) -> Self {
        let mut animator = SceneAnimator::with_step(cfg.animation.rotation_step);
        if cfg.animation.autostart {
            animator.start();
        }

        let mut video = VideoPanel::new();
        video.request(cfg.camera.backend());

        let mut location = LocationPanel::new(cfg.location.probe());
        location.start(cfg.location.provider());

        Self {
            sensors: SensorsPanel::new(),
            terrain: TerrainPanel::new(animator, cfg.scene.build()),
            video,
            location,
            headline: cfg.headline.clone(),
            color_scheme: cfg.color_scheme,
            color_scheme_applied: false,
        }
    }

    pub fn panels_mut(&mut self) -> [&mut dyn Panel; 4] {
        [
            &mut self.sensors,
            &mut self.terrain,
            &mut self.video,
            &mut self.location,
        ]
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(h) = &self.headline {
                ui.heading(h);
                ui.separator();
            }
            for panel in self.panels_mut() {
                let heading = panel.heading();
                ui.toggle_value(&mut panel.state_mut().visible, heading);
            }
        });
    }
}

/// Render a panel in place unless it is hidden or detached.
fn docked(ui: &mut egui::Ui, panel: &mut dyn Panel) {
    let st = *panel.state();
    if !st.visible || st.detached {
        return;
    }
    ui.horizontal(|ui| {
        ui.strong(panel.heading());
        if ui
            .small_button(egui_phosphor::regular::ARROW_SQUARE_OUT)
            .on_hover_text("Detach")
            .clicked()
        {
            panel.state_mut().detached = true;
        }
    });
    panel.render_panel(ui);
    ui.separator();
}

/// Render a detached panel in its own window. Closing the window re-docks it.
fn detached(ctx: &egui::Context, panel: &mut dyn Panel) {
    let st = *panel.state();
    if !st.visible || !st.detached {
        return;
    }
    let mut open = true;
    egui::Window::new(panel.heading())
        .open(&mut open)
        .resizable(true)
        .show(ctx, |ui| panel.render_panel(ui));
    if !open {
        panel.state_mut().detached = false;
    }
}

impl eframe::App for MonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        for panel in self.panels_mut() {
            panel.calculate(ctx);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| self.top_bar(ui));

        egui::SidePanel::right("device_surfaces")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                docked(ui, &mut self.video);
                docked(ui, &mut self.location);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = ui.available_height() * 0.55;
            let width = ui.available_width();
            ui.allocate_ui(egui::vec2(width, chart_height), |ui| {
                docked(ui, &mut self.sensors);
            });
            docked(ui, &mut self.terrain);
        });

        for panel in self.panels_mut() {
            detached(ctx, panel);
        }
    }
}
