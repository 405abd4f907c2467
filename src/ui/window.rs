//! Hauptfenster: Werkzeug-Dock links, Paletten-Dock rechts, Zeichenfläche zentral.

use std::path::PathBuf;

use crate::app::{AppController, AppIntent, AppState};
use crate::shared::EditorOptions;

use super::{render_palette_dock, render_status_bar, render_tools_dock, DrawAreaView};

/// Haupt-Anwendungsstruktur
pub struct EditorWindow {
    state: AppState,
    controller: AppController,
    draw_area: DrawAreaView,
}

impl EditorWindow {
    /// Erstellt das Fenster und lädt optional ein Startbild.
    ///
    /// Ein ungültiger Pfad ist kein Fehler: die Szene erhält ein leeres Pixmap,
    /// die Status-Bar zeigt die Meldung.
    pub fn new(options: EditorOptions, image: Option<PathBuf>) -> Self {
        let mut window = Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            draw_area: DrawAreaView::new(),
        };

        if let Some(path) = image {
            window.process_events(vec![AppIntent::StartupImageRequested { path }]);
        }

        window
    }

    /// Lesender Zugriff auf den Anwendungszustand.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Verarbeitet UI-Events über den Controller.
    pub fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        self.draw_area.sync_texture(ctx, &mut self.state);

        render_status_bar(ctx, &self.state);
        render_tools_dock(ctx, &self.state);
        render_palette_dock(ctx, &self.state);

        self.draw_area.show(ctx, &self.state)
    }
}

impl eframe::App for EditorWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = !events.is_empty();

        self.process_events(events);

        // Kamera hat sich nach dem Zeichnen geändert
        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_without_image_has_empty_scene() {
        let window = EditorWindow::new(EditorOptions::default(), None);
        assert!(window.state().scene.is_empty());
        assert!(window.state().ui.status_message.is_none());
    }

    #[test]
    fn invalid_image_path_is_not_fatal() {
        let path = std::env::temp_dir().join("qpaint_window_missing_image.png");
        let _ = std::fs::remove_file(&path);

        let window = EditorWindow::new(EditorOptions::default(), Some(path));

        let pixmap = window.state().scene.pixmap().expect("Pixmap erwartet");
        assert!(pixmap.is_null());
        assert!(window.state().ui.status_message.is_some());
    }

    #[test]
    fn zoom_event_scales_by_step() {
        let mut window = EditorWindow::new(EditorOptions::default(), None);
        window.process_events(vec![AppIntent::CameraZoom {
            factor: 1.25,
            focus_world: None,
        }]);
        assert!((window.state().view.camera.zoom - 1.25).abs() < 1e-6);
    }
}
