use egui::{Color32, Context, Pos2, Sense, Stroke, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::data::scene::{SceneAnimator, TerrainScene};

const WIRE_COLOR: Color32 = Color32::from_rgb(0, 255, 0);
const BACKGROUND: Color32 = Color32::BLACK;

/// 3D viewport with the spinning terrain placeholder.
pub struct TerrainPanel {
    state: PanelState,
    animator: SceneAnimator,
    scene: TerrainScene,
}

impl TerrainPanel {
    pub fn new(animator: SceneAnimator, scene: TerrainScene) -> Self {
        Self {
            state: PanelState::default(),
            animator,
            scene,
        }
    }

    pub fn animator(&self) -> &SceneAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut SceneAnimator {
        &mut self.animator
    }

    pub fn scene(&self) -> &TerrainScene {
        &self.scene
    }
}

impl Default for TerrainPanel {
    fn default() -> Self {
        Self::new(SceneAnimator::default(), TerrainScene::default())
    }
}

impl Panel for TerrainPanel {
    fn name(&self) -> &'static str {
        "Monitoring Area"
    }

    fn icon(&self) -> &'static str {
        egui_phosphor::regular::MOUNTAINS
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    /// One render tick per frame; keeps frames coming while running.
    fn calculate(&mut self, ctx: &Context) {
        if self.animator.tick() {
            ctx.request_repaint();
        }
    }

    fn render_panel(&mut self, ui: &mut Ui) {
        let size = ui.available_size().max(egui::vec2(64.0, 64.0));
        let (rect, _resp) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);

        let aspect = rect.width() / rect.height();
        let center = rect.center();
        let (hw, hh) = (rect.width() / 2.0, rect.height() / 2.0);
        let to_screen = |p: glam::Vec2| Pos2::new(center.x + p.x * hw, center.y - p.y * hh);

        let stroke = Stroke::new(1.0, WIRE_COLOR);
        for [a, b] in self.scene.wireframe(self.animator.angle() as f32, aspect) {
            painter.line_segment([to_screen(a), to_screen(b)], stroke);
        }
    }
}
