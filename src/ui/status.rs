//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(image_summary(state));

            ui.separator();

            ui.label(zoom_label(state));

            // Statusnachricht (z.B. Ladefehler)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}

/// Dateiname und Größe des geladenen Bildes.
pub fn image_summary(state: &AppState) -> String {
    let pixmap = state.scene.pixmap().filter(|p| !p.is_null());
    match (pixmap, &state.ui.image_path) {
        (Some(pixmap), Some(path)) => {
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown");
            let (width, height) = pixmap.dimensions();
            format!("Image: {} ({}x{})", filename, width, height)
        }
        _ => "No image loaded".to_string(),
    }
}

/// Zoom in Prozent.
pub fn zoom_label(state: &AppState) -> String {
    format!("Zoom: {:.0}%", state.view.camera.zoom * 100.0)
}
