//! Visual themes for the dashboard.

use eframe::egui::{Color32, Context, Visuals};
use serde::Deserialize;

/// Visual theme, applied once on the first frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// eframe default dark visuals.
    #[default]
    Dark,
    Light,
    /// Earth tones on a dark olive background.
    Terrain,
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light, ColorScheme::Terrain]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::Terrain => "Terrain",
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            ColorScheme::Dark => Visuals::dark(),
            ColorScheme::Light => Visuals::light(),
            ColorScheme::Terrain => {
                let mut v = Visuals::dark();
                let bg = Color32::from_rgb(38, 40, 30);
                let bg1 = Color32::from_rgb(56, 58, 44);
                let fg = Color32::from_rgb(226, 214, 180);
                v.panel_fill = bg;
                v.window_fill = bg1;
                v.extreme_bg_color = Color32::from_rgb(28, 30, 22);
                v.faint_bg_color = bg1;
                v.override_text_color = Some(fg);
                v.widgets.noninteractive.bg_fill = bg1;
                v.widgets.noninteractive.fg_stroke.color = fg;
                v.widgets.hovered.bg_fill = Color32::from_rgb(94, 88, 60);
                v
            }
        }
    }

    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}
