use std::time::Duration;

use egui::{Color32, ColorImage, Context, TextureHandle, TextureOptions, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::data::media::{CaptureBackend, DeviceFeed, FeedState};

/// Video surface bound to the device feed.
///
/// A failed capture request leaves the surface blank; the cause is only logged.
pub struct VideoPanel {
    state: PanelState,
    feed: DeviceFeed,
    texture: Option<TextureHandle>,
}

impl Default for VideoPanel {
    fn default() -> Self {
        Self {
            state: PanelState::default(),
            feed: DeviceFeed::new(),
            texture: None,
        }
    }
}

impl VideoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the one-shot capture request.
    pub fn request(&mut self, backend: Box<dyn CaptureBackend>) {
        self.feed.request(backend);
    }

    pub fn feed(&self) -> &DeviceFeed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut DeviceFeed {
        &mut self.feed
    }
}

impl Panel for VideoPanel {
    fn name(&self) -> &'static str {
        "Camera"
    }

    fn icon(&self) -> &'static str {
        egui_phosphor::regular::VIDEO_CAMERA
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn calculate(&mut self, ctx: &Context) {
        if self.feed.poll() {
            if let Some(frame) = self.feed.latest_frame() {
                let image = ColorImage::from_rgba_unmultiplied(frame.size, &frame.rgba);
                match &mut self.texture {
                    Some(tex) => tex.set(image, TextureOptions::LINEAR),
                    None => {
                        self.texture =
                            Some(ctx.load_texture("camera_feed", image, TextureOptions::LINEAR));
                    }
                }
            }
            ctx.request_repaint();
        }
        if matches!(self.feed.state(), FeedState::Requesting | FeedState::Streaming) {
            ctx.request_repaint_after(Duration::from_millis(30));
        }
    }

    fn render_panel(&mut self, ui: &mut Ui) {
        match (&self.texture, self.feed.state()) {
            (Some(tex), FeedState::Streaming) => {
                ui.add(egui::Image::from_texture(tex).shrink_to_fit());
                if let Some(label) = self.feed.stream_label() {
                    ui.small(label);
                }
            }
            _ => {
                let size = egui::vec2(ui.available_width(), ui.available_width() * 0.75);
                let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                ui.painter().rect_filled(rect, 0.0, Color32::BLACK);
            }
        }
    }
}
