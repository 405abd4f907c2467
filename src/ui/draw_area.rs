//! Zeichenfläche im zentralen Bereich: zeigt das Pixmap der Szene über die Kamera.

use crate::app::{AppIntent, AppState};
use crate::core::Pixmap;

use super::input::{collect_wheel_intents, ViewportContext};

/// Name der Canvas-Textur im egui-Textur-Manager.
const CANVAS_TEXTURE_NAME: &str = "canvas_pixmap";

/// Scrollbarer, zoombarer Viewport auf die Szene.
///
/// Hält die hochgeladene Textur des aktuellen Pixmaps.
#[derive(Default)]
pub struct DrawAreaView {
    texture: Option<egui::TextureHandle>,
}

impl DrawAreaView {
    /// Erstellt einen leeren Viewport ohne Textur.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt das Pixmap der Szene als Textur hoch, sobald es sich geändert hat.
    pub fn sync_texture(&mut self, ctx: &egui::Context, state: &mut AppState) {
        if !state.view.canvas_dirty {
            return;
        }
        state.view.canvas_dirty = false;

        self.texture = state.scene.pixmap().and_then(Pixmap::rgba).map(|rgba| {
            let size = [rgba.width() as usize, rgba.height() as usize];
            let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            ctx.load_texture(CANVAS_TEXTURE_NAME, image, egui::TextureOptions::NEAREST)
        });

        match &self.texture {
            Some(texture) => log::info!(
                "Canvas-Textur hochgeladen ({}x{})",
                texture.size()[0],
                texture.size()[1]
            ),
            None => log::info!("Canvas-Textur entfernt"),
        }
    }

    /// Rendert den Viewport im CentralPanel und gibt erzeugte Events zurück.
    pub fn show(&self, ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
        let mut events = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];
                if state.view.viewport_size != viewport_size {
                    events.push(AppIntent::ViewportResized {
                        size: viewport_size,
                    });
                }

                events.extend(collect_wheel_intents(&ViewportContext {
                    ui,
                    response: &response,
                    viewport_size,
                    camera: &state.view.camera,
                    options: &state.options,
                }));

                self.paint(ui, rect, state);
            });

        events
    }

    fn paint(&self, ui: &egui::Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);
        let [r, g, b, a] = state.options.canvas_background;
        painter.rect_filled(
            rect,
            egui::CornerRadius::ZERO,
            egui::Color32::from_rgba_unmultiplied(r, g, b, a),
        );

        let Some(texture) = &self.texture else {
            return;
        };

        let image_rect = pixmap_screen_rect(state, rect);
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture.id(), image_rect, uv, egui::Color32::WHITE);
    }
}

/// Bildschirm-Rechteck des Pixmaps bei aktueller Kamera.
///
/// Das Pixmap liegt mit der linken oberen Ecke im Szenen-Ursprung.
pub fn pixmap_screen_rect(state: &AppState, viewport: egui::Rect) -> egui::Rect {
    let (width, height) = state.scene.size();
    let screen_size = glam::Vec2::new(viewport.width(), viewport.height());
    let camera = &state.view.camera;

    let min = camera.world_to_screen(glam::Vec2::ZERO, screen_size);
    let max = camera.world_to_screen(glam::Vec2::new(width as f32, height as f32), screen_size);

    egui::Rect::from_min_max(
        viewport.min + egui::vec2(min.x, min.y),
        viewport.min + egui::vec2(max.x, max.y),
    )
}
