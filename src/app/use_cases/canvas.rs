//! Use-Case-Funktionen für den Inhalt der Zeichenfläche.

use crate::app::AppState;
use crate::core::Pixmap;
use std::path::{Path, PathBuf};

/// Lädt ein Bild und setzt es als einzigen Inhalt der Szene.
///
/// Ein Ladefehler ist nicht fatal: die Szene erhält eine Null-Pixmap,
/// der Fehler wird geloggt und als Statusnachricht angezeigt.
pub fn load_image(state: &mut AppState, path: PathBuf) {
    log::info!("Lade Bild: {}", path.display());

    let pixmap = match Pixmap::load(&path) {
        Ok(pixmap) => {
            let (width, height) = pixmap.dimensions();
            log::info!("Bild erfolgreich geladen: {}x{} Pixel", width, height);
            state.ui.status_message = None;
            pixmap
        }
        Err(e) => {
            log::warn!("Bild konnte nicht geladen werden: {:#}", e);
            state.ui.status_message = Some(load_failure_message(&path));
            Pixmap::null()
        }
    };

    state.scene.add_pixmap(pixmap);
    state.ui.image_path = Some(path);
    state.view.canvas_dirty = true;
}

fn load_failure_message(path: &Path) -> String {
    format!("Image could not be loaded: {}", path.display())
}
